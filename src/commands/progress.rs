use chrono::Local;

use crate::commands::parse_date;
use crate::db::AppState;
use crate::models::{NewProgress, Progress};

/// Record a body-measurement entry. Date defaults to today.
pub async fn record_progress(
  state: &AppState,
  user_id: i64,
  entry: NewProgress,
) -> Result<i64, String> {
  let date = match entry.date.as_deref() {
    Some(d) => parse_date(d)?,
    None => Local::now().date_naive(),
  };

  let result = sqlx::query(
    r#"
    INSERT INTO progress (
      user_id, date, weight, body_fat_percentage, muscle_mass,
      chest, waist, hips, arms, thighs, notes
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
    "#,
  )
  .bind(user_id)
  .bind(date)
  .bind(entry.weight)
  .bind(entry.body_fat_percentage)
  .bind(entry.muscle_mass)
  .bind(entry.chest)
  .bind(entry.waist)
  .bind(entry.hips)
  .bind(entry.arms)
  .bind(entry.thighs)
  .bind(&entry.notes)
  .execute(&state.db)
  .await
  .map_err(|e| format!("Failed to record progress: {}", e))?;

  Ok(result.last_insert_rowid())
}

/// All entries, newest first
pub async fn list_progress(state: &AppState, user_id: i64) -> Result<Vec<Progress>, String> {
  sqlx::query_as::<_, Progress>(
    "SELECT * FROM progress WHERE user_id = ?1 ORDER BY date DESC, id DESC",
  )
  .bind(user_id)
  .fetch_all(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch progress: {}", e))
}

pub async fn latest_progress(state: &AppState, user_id: i64) -> Result<Option<Progress>, String> {
  sqlx::query_as::<_, Progress>(
    "SELECT * FROM progress WHERE user_id = ?1 ORDER BY date DESC, id DESC LIMIT 1",
  )
  .bind(user_id)
  .fetch_optional(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch progress: {}", e))
}
