use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Goal {
  pub id: i64,
  pub user_id: i64,
  /// bulk, cut, tone, strength, endurance
  pub goal_type: String,
  pub target_weight: Option<f64>,
  pub target_body_fat: Option<f64>,
  pub target_date: Option<NaiveDate>,
  /// Sessions per week
  pub workout_frequency: i64,
  /// Minutes per session
  pub workout_duration: i64,
  pub preferred_exercises_json: String,
  pub equipment_available_json: String,
  pub is_active: bool,
  pub created_at: Option<DateTime<Utc>>,
}

impl Goal {
  pub fn preferred_exercises(&self) -> Vec<String> {
    serde_json::from_str(&self.preferred_exercises_json).unwrap_or_default()
  }

  pub fn equipment_available(&self) -> Vec<String> {
    serde_json::from_str(&self.equipment_available_json).unwrap_or_default()
  }
}

/// For inserting new goals. `target_date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
  pub goal_type: String,
  pub target_weight: Option<f64>,
  pub target_body_fat: Option<f64>,
  pub target_date: Option<String>,
  pub workout_frequency: Option<i64>,
  pub workout_duration: Option<i64>,
  #[serde(default)]
  pub preferred_exercises: Vec<String>,
  #[serde(default)]
  pub equipment_available: Vec<String>,
}

impl NewGoal {
  pub fn new(goal_type: impl Into<String>) -> Self {
    Self {
      goal_type: goal_type.into(),
      target_weight: None,
      target_body_fat: None,
      target_date: None,
      workout_frequency: None,
      workout_duration: None,
      preferred_exercises: Vec::new(),
      equipment_available: Vec::new(),
    }
  }
}
