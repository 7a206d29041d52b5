use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutSession {
  pub id: i64,
  pub user_id: i64,
  pub workout_plan_id: Option<i64>,
  pub date: NaiveDate,
  pub name: String,
  pub duration_minutes: Option<i64>,
  pub calories_burned: Option<i64>,
  pub notes: Option<String>,
  pub completed: bool,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new sessions. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutSession {
  pub workout_plan_id: Option<i64>,
  pub date: String,
  pub name: String,
  pub duration_minutes: Option<i64>,
  pub calories_burned: Option<i64>,
  pub notes: Option<String>,
  #[serde(default)]
  pub completed: bool,
}
