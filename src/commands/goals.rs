use chrono::Utc;

use crate::commands::parse_date;
use crate::db::AppState;
use crate::models::{Goal, NewGoal};

const DEFAULT_FREQUENCY: i64 = 3;
const DEFAULT_DURATION: i64 = 60;

pub async fn create_goal(state: &AppState, user_id: i64, goal: NewGoal) -> Result<i64, String> {
  if goal.goal_type.trim().is_empty() {
    return Err("Goal type is required".to_string());
  }

  let target_date = goal.target_date.as_deref().map(parse_date).transpose()?;
  let preferred = serde_json::to_string(&goal.preferred_exercises)
    .map_err(|e| format!("Failed to encode preferred exercises: {}", e))?;
  let equipment = serde_json::to_string(&goal.equipment_available)
    .map_err(|e| format!("Failed to encode equipment: {}", e))?;

  let result = sqlx::query(
    r#"
    INSERT INTO goals (
      user_id, goal_type, target_weight, target_body_fat, target_date,
      workout_frequency, workout_duration, preferred_exercises_json,
      equipment_available_json, created_at
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    "#,
  )
  .bind(user_id)
  .bind(goal.goal_type.trim())
  .bind(goal.target_weight)
  .bind(goal.target_body_fat)
  .bind(target_date)
  .bind(goal.workout_frequency.unwrap_or(DEFAULT_FREQUENCY))
  .bind(goal.workout_duration.unwrap_or(DEFAULT_DURATION))
  .bind(preferred)
  .bind(equipment)
  .bind(Utc::now())
  .execute(&state.db)
  .await
  .map_err(|e| format!("Failed to create goal: {}", e))?;

  Ok(result.last_insert_rowid())
}

pub async fn list_active_goals(state: &AppState, user_id: i64) -> Result<Vec<Goal>, String> {
  sqlx::query_as::<_, Goal>(
    "SELECT * FROM goals WHERE user_id = ?1 AND is_active = 1 ORDER BY created_at ASC, id ASC",
  )
  .bind(user_id)
  .fetch_all(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch goals: {}", e))
}

/// The goal that drives plan generation and session length
pub async fn active_goal(state: &AppState, user_id: i64) -> Result<Option<Goal>, String> {
  sqlx::query_as::<_, Goal>(
    "SELECT * FROM goals WHERE user_id = ?1 AND is_active = 1 ORDER BY created_at ASC, id ASC LIMIT 1",
  )
  .bind(user_id)
  .fetch_optional(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch goal: {}", e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[tokio::test]
  async fn test_create_goal_with_defaults() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    create_goal(&state, user_id, NewGoal::new("bulk")).await.unwrap();

    let goal = active_goal(&state, user_id).await.unwrap().unwrap();
    assert_eq!(goal.goal_type, "bulk");
    assert_eq!(goal.workout_frequency, 3);
    assert_eq!(goal.workout_duration, 60);
    assert!(goal.equipment_available().is_empty());
    assert!(goal.is_active);

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_create_goal_round_trips_lists_and_date() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    let mut goal = NewGoal::new("strength");
    goal.target_date = Some("2025-12-31".to_string());
    goal.workout_frequency = Some(4);
    goal.equipment_available = vec!["barbell".into(), "rack".into()];
    goal.preferred_exercises = vec!["squat".into()];
    create_goal(&state, user_id, goal).await.unwrap();

    let goals = list_active_goals(&state, user_id).await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].workout_frequency, 4);
    assert_eq!(goals[0].equipment_available(), vec!["barbell".to_string(), "rack".to_string()]);
    assert_eq!(goals[0].preferred_exercises(), vec!["squat".to_string()]);
    assert_eq!(goals[0].target_date.map(|d| d.to_string()).as_deref(), Some("2025-12-31"));

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_create_goal_rejects_bad_input() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    assert!(create_goal(&state, user_id, NewGoal::new("")).await.is_err());

    let mut goal = NewGoal::new("cut");
    goal.target_date = Some("soon".to_string());
    assert!(create_goal(&state, user_id, goal).await.is_err());

    assert!(active_goal(&state, user_id).await.unwrap().is_none());

    teardown_test_db(state.db).await;
  }
}
