use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One body-measurement entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Progress {
  pub id: i64,
  pub user_id: i64,
  pub date: NaiveDate,
  pub weight: Option<f64>,
  pub body_fat_percentage: Option<f64>,
  pub muscle_mass: Option<f64>,
  pub chest: Option<f64>,
  pub waist: Option<f64>,
  pub hips: Option<f64>,
  pub arms: Option<f64>,
  pub thighs: Option<f64>,
  pub notes: Option<String>,
}

/// For inserting new progress entries. `date` is `YYYY-MM-DD`, today if absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProgress {
  pub date: Option<String>,
  pub weight: Option<f64>,
  pub body_fat_percentage: Option<f64>,
  pub muscle_mass: Option<f64>,
  pub chest: Option<f64>,
  pub waist: Option<f64>,
  pub hips: Option<f64>,
  pub arms: Option<f64>,
  pub thighs: Option<f64>,
  pub notes: Option<String>,
}
