use crate::db::AppState;
use crate::models::Exercise;

pub async fn list_exercises(state: &AppState) -> Result<Vec<Exercise>, String> {
  sqlx::query_as::<_, Exercise>("SELECT * FROM exercises ORDER BY name")
    .fetch_all(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch exercises: {}", e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[tokio::test]
  async fn test_catalog_is_seeded() {
    let state = setup_test_state().await;

    let exercises = list_exercises(&state).await.unwrap();
    let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Deadlifts", "Plank", "Pull-ups", "Push-ups", "Squats"]);

    let plank = exercises.iter().find(|e| e.name == "Plank").unwrap();
    assert_eq!(plank.category.as_deref(), Some("core"));
    assert_eq!(plank.muscle_groups(), vec!["core".to_string(), "shoulders".to_string()]);

    teardown_test_db(state.db).await;
  }
}
