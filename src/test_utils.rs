//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Plan text fixtures

use crate::config::AppConfig;
use crate::db::AppState;
use crate::models::{Goal, Progress, User, WorkoutSession};
use chrono::{Local, NaiveDate, Utc};
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Fixtures
/// ---------------------------------------------------------------------------

pub const SAMPLE_PLAN: &str = "Day 1: Upper Body Strength
• Push-ups - 3x12
• Pull-ups - 3x8
• Plank - 3x45s
• Dips - 3x10
Day 2: Lower Body Power
• Squats - 4x10
";

/// Claude messages API response body wrapping `text`
pub fn mock_claude_body(text: &str) -> String {
  serde_json::json!({
    "id": "msg_test",
    "type": "message",
    "role": "assistant",
    "model": "claude-test",
    "content": [{ "type": "text", "text": text }],
    "stop_reason": "end_turn",
    "usage": { "input_tokens": 12, "output_tokens": 34 }
  })
  .to_string()
}

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// In-memory state with default config
pub async fn setup_test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    config: AppConfig::default(),
  }
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Insert a user and return its id
pub async fn seed_test_user(pool: &SqlitePool) -> i64 {
  sqlx::query(
    "INSERT INTO users (name, height, age, gender, fitness_level) VALUES (?1, ?2, ?3, ?4, ?5)",
  )
  .bind("Alex")
  .bind(70.0)
  .bind(32)
  .bind("female")
  .bind("intermediate")
  .execute(pool)
  .await
  .expect("Failed to seed user")
  .last_insert_rowid()
}

/// Insert an active plan and return its id
pub async fn seed_test_plan(pool: &SqlitePool, user_id: i64, text: &str, days_per_week: i64) -> i64 {
  sqlx::query(
    r#"
    INSERT INTO workout_plans (user_id, name, description, goal_type, duration_weeks, days_per_week, created_at)
    VALUES (?1, 'Strength Workout Plan', ?2, 'strength', 8, ?3, ?4)
    "#,
  )
  .bind(user_id)
  .bind(text)
  .bind(days_per_week)
  .bind(Utc::now())
  .execute(pool)
  .await
  .expect("Failed to seed plan")
  .last_insert_rowid()
}

/// Insert a session and return its id
pub async fn seed_test_session(
  pool: &SqlitePool,
  user_id: i64,
  plan_id: Option<i64>,
  date: NaiveDate,
  completed: bool,
) -> i64 {
  sqlx::query(
    r#"
    INSERT INTO workout_sessions (user_id, workout_plan_id, date, name, duration_minutes, completed)
    VALUES (?1, ?2, ?3, 'Upper Body Strength', 55, ?4)
    "#,
  )
  .bind(user_id)
  .bind(plan_id)
  .bind(date)
  .bind(completed)
  .execute(pool)
  .await
  .expect("Failed to seed session")
  .last_insert_rowid()
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_user() -> User {
  User {
    id: 1,
    name: "Alex".to_string(),
    height: Some(70.0),
    age: Some(32),
    gender: Some("female".to_string()),
    fitness_level: Some("intermediate".to_string()),
    created_at: Some(Utc::now()),
  }
}

pub fn mock_goal(frequency: i64, duration: i64) -> Goal {
  Goal {
    id: 1,
    user_id: 1,
    goal_type: "strength".to_string(),
    target_weight: Some(175.0),
    target_body_fat: None,
    target_date: None,
    workout_frequency: frequency,
    workout_duration: duration,
    preferred_exercises_json: r#"["deadlift"]"#.to_string(),
    equipment_available_json: r#"["barbell","dumbbells"]"#.to_string(),
    is_active: true,
    created_at: Some(Utc::now()),
  }
}

pub fn mock_progress(weight: f64) -> Progress {
  mock_progress_on(Local::now().date_naive(), Some(weight))
}

pub fn mock_progress_on(date: NaiveDate, weight: Option<f64>) -> Progress {
  Progress {
    id: 1,
    user_id: 1,
    date,
    weight,
    body_fat_percentage: None,
    muscle_mass: None,
    chest: None,
    waist: None,
    hips: None,
    arms: None,
    thighs: None,
    notes: None,
  }
}

pub fn mock_session(date: NaiveDate, duration_minutes: Option<i64>, completed: bool) -> WorkoutSession {
  WorkoutSession {
    id: 1,
    user_id: 1,
    workout_plan_id: None,
    date,
    name: "Session".to_string(),
    duration_minutes,
    calories_burned: None,
    notes: None,
    completed,
    created_at: None,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('users', 'workout_plans', 'workout_sessions', 'goals', 'progress', 'exercises')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 6, "Expected 6 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_helpers_insert_rows() {
    let pool = setup_test_db().await;

    let user_id = seed_test_user(&pool).await;
    let plan_id = seed_test_plan(&pool, user_id, SAMPLE_PLAN, 3).await;
    seed_test_session(&pool, user_id, Some(plan_id), Local::now().date_naive(), true).await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_sessions")
      .fetch_one(&pool)
      .await
      .expect("Failed to count sessions");
    assert_eq!(count, 1);

    teardown_test_db(pool).await;
  }
}
