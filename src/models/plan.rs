use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::{parse_daily_workouts, PlanIndex};

/// A stored, LLM-generated plan. `description` holds the raw plan text.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutPlan {
  pub id: i64,
  pub user_id: i64,
  pub name: String,
  pub description: String,
  pub goal_type: Option<String>,
  pub duration_weeks: Option<i64>,
  pub days_per_week: i64,
  pub is_active: bool,
  pub created_at: Option<DateTime<Utc>>,
}

impl WorkoutPlan {
  pub fn daily_workouts(&self) -> PlanIndex {
    parse_daily_workouts(&self.description)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutPlan {
  pub name: String,
  pub description: String,
  pub goal_type: Option<String>,
  pub duration_weeks: Option<i64>,
  pub days_per_week: i64,
}
