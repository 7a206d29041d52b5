use chrono::{NaiveDate, Utc};

use crate::commands::parse_date;
use crate::db::AppState;
use crate::models::{NewWorkoutSession, WorkoutSession};

const RECENT_SESSION_LIMIT: i64 = 10;

pub async fn log_session(
  state: &AppState,
  user_id: i64,
  session: NewWorkoutSession,
) -> Result<i64, String> {
  if session.name.trim().is_empty() {
    return Err("Name and date are required".to_string());
  }
  let date = parse_date(&session.date)?;

  let result = sqlx::query(
    r#"
    INSERT INTO workout_sessions (
      user_id, workout_plan_id, date, name, duration_minutes,
      calories_burned, notes, completed, created_at
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
    "#,
  )
  .bind(user_id)
  .bind(session.workout_plan_id)
  .bind(date)
  .bind(session.name.trim())
  .bind(session.duration_minutes)
  .bind(session.calories_burned)
  .bind(&session.notes)
  .bind(session.completed)
  .bind(Utc::now())
  .execute(&state.db)
  .await
  .map_err(|e| format!("Failed to log workout: {}", e))?;

  tracing::info!(session_id = result.last_insert_rowid(), %date, "Workout session logged");

  Ok(result.last_insert_rowid())
}

/// Past workouts are completed by definition
pub async fn log_past_workout(
  state: &AppState,
  user_id: i64,
  session: NewWorkoutSession,
) -> Result<i64, String> {
  log_session(
    state,
    user_id,
    NewWorkoutSession {
      completed: true,
      notes: session.notes.clone().or_else(|| Some(String::new())),
      ..session
    },
  )
  .await
}

/// Most recent sessions, newest first
pub async fn list_recent_sessions(
  state: &AppState,
  user_id: i64,
) -> Result<Vec<WorkoutSession>, String> {
  sqlx::query_as::<_, WorkoutSession>(
    "SELECT * FROM workout_sessions WHERE user_id = ?1 ORDER BY date DESC, id DESC LIMIT ?2",
  )
  .bind(user_id)
  .bind(RECENT_SESSION_LIMIT)
  .fetch_all(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch workout sessions: {}", e))
}

pub async fn list_completed_sessions(
  state: &AppState,
  user_id: i64,
) -> Result<Vec<WorkoutSession>, String> {
  sqlx::query_as::<_, WorkoutSession>(
    "SELECT * FROM workout_sessions WHERE user_id = ?1 AND completed = 1 ORDER BY date ASC, id ASC",
  )
  .bind(user_id)
  .fetch_all(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch workout sessions: {}", e))
}

/// Whether a completed session is logged on `date`
pub async fn completed_on(state: &AppState, user_id: i64, date: NaiveDate) -> Result<bool, String> {
  let count: i64 = sqlx::query_scalar(
    "SELECT COUNT(*) FROM workout_sessions WHERE user_id = ?1 AND date = ?2 AND completed = 1",
  )
  .bind(user_id)
  .bind(date)
  .fetch_one(&state.db)
  .await
  .map_err(|e| format!("Failed to check workout sessions: {}", e))?;

  Ok(count > 0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  fn new_session(date: &str, completed: bool) -> NewWorkoutSession {
    NewWorkoutSession {
      workout_plan_id: None,
      date: date.to_string(),
      name: "Leg Day".to_string(),
      duration_minutes: Some(50),
      calories_burned: Some(400),
      notes: None,
      completed,
    }
  }

  #[tokio::test]
  async fn test_log_and_list_sessions() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    log_session(&state, user_id, new_session("2025-03-01", false)).await.unwrap();
    log_session(&state, user_id, new_session("2025-03-03", true)).await.unwrap();

    let sessions = list_recent_sessions(&state, user_id).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].date.to_string(), "2025-03-03");
    assert_eq!(sessions[0].calories_burned, Some(400));

    let completed = list_completed_sessions(&state, user_id).await.unwrap();
    assert_eq!(completed.len(), 1);

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_recent_sessions_are_capped() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    for day in 1..=12 {
      let date = format!("2025-05-{:02}", day);
      log_session(&state, user_id, new_session(&date, true)).await.unwrap();
    }

    let sessions = list_recent_sessions(&state, user_id).await.unwrap();
    assert_eq!(sessions.len(), 10);
    assert_eq!(sessions[0].date.to_string(), "2025-05-12");

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_log_past_workout_is_completed() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    log_past_workout(&state, user_id, new_session("2025-01-10", false)).await.unwrap();

    let date = parse_date("2025-01-10").unwrap();
    assert!(completed_on(&state, user_id, date).await.unwrap());

    let session = &list_recent_sessions(&state, user_id).await.unwrap()[0];
    assert!(session.completed);
    assert_eq!(session.notes.as_deref(), Some(""));

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_log_session_validates_input() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;

    let mut nameless = new_session("2025-01-10", true);
    nameless.name = " ".to_string();
    assert_eq!(
      log_session(&state, user_id, nameless).await,
      Err("Name and date are required".to_string())
    );

    assert_eq!(
      log_past_workout(&state, user_id, new_session("10/01/2025", true)).await,
      Err("Invalid date format. Use YYYY-MM-DD".to_string())
    );

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_incomplete_session_does_not_count_as_done() {
    let state = setup_test_state().await;
    let user_id = seed_test_user(&state.db).await;
    let date = parse_date("2025-02-14").unwrap();

    seed_test_session(&state.db, user_id, None, date, false).await;
    assert!(!completed_on(&state, user_id, date).await.unwrap());

    seed_test_session(&state.db, user_id, None, date, true).await;
    assert!(completed_on(&state, user_id, date).await.unwrap());

    teardown_test_db(state.db).await;
  }
}
