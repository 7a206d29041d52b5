use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
  pub id: i64,
  pub name: String,
  /// Inches or centimeters, depending on the configured unit system
  pub height: Option<f64>,
  pub age: Option<i64>,
  pub gender: Option<String>,
  /// beginner, intermediate, advanced
  pub fitness_level: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new users (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
  pub name: String,
  pub height: Option<f64>,
  pub age: Option<i64>,
  pub gender: Option<String>,
  pub fitness_level: Option<String>,
}
