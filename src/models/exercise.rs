use serde::{Deserialize, Serialize};

/// Catalog entry (seeded by migration)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
  pub id: i64,
  pub name: String,
  pub category: Option<String>,
  pub muscle_groups_json: String,
  pub equipment_needed: Option<String>,
  pub difficulty_level: Option<String>,
  pub instructions: Option<String>,
  pub tips: Option<String>,
}

impl Exercise {
  pub fn muscle_groups(&self) -> Vec<String> {
    serde_json::from_str(&self.muscle_groups_json).unwrap_or_default()
  }
}
