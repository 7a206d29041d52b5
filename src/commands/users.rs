use chrono::Utc;

use crate::db::AppState;
use crate::models::{NewUser, User};

pub async fn create_user(state: &AppState, user: NewUser) -> Result<i64, String> {
  if user.name.trim().is_empty() {
    return Err("Name is required".to_string());
  }

  let result = sqlx::query(
    r#"
    INSERT INTO users (name, height, age, gender, fitness_level, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
  )
  .bind(user.name.trim())
  .bind(user.height)
  .bind(user.age)
  .bind(&user.gender)
  .bind(&user.fitness_level)
  .bind(Utc::now())
  .execute(&state.db)
  .await
  .map_err(|e| format!("Failed to create user: {}", e))?;

  tracing::info!(user_id = result.last_insert_rowid(), "User created");

  Ok(result.last_insert_rowid())
}

/// `None` when the user doesn't exist
pub async fn find_user(state: &AppState, user_id: i64) -> Result<Option<User>, String> {
  sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
    .bind(user_id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch user: {}", e))
}

pub async fn get_user(state: &AppState, user_id: i64) -> Result<User, String> {
  find_user(state, user_id)
    .await?
    .ok_or_else(|| "User not found".to_string())
}

/// BMI from the user's height and latest recorded weight
pub async fn get_bmi(state: &AppState, user_id: i64) -> Result<Option<f64>, String> {
  let user = get_user(state, user_id).await?;
  let latest = crate::commands::progress::latest_progress(state, user_id).await?;

  Ok(match (latest.and_then(|p| p.weight), user.height) {
    (Some(weight), Some(height)) => state.config.units.bmi(weight, height),
    _ => None,
  })
}
