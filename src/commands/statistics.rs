use crate::commands::{progress, sessions};
use crate::db::AppState;
use crate::statistics::TrainingStatistics;

pub async fn get_statistics(state: &AppState, user_id: i64) -> Result<TrainingStatistics, String> {
  let completed = sessions::list_completed_sessions(state, user_id).await?;
  let entries = progress::list_progress(state, user_id).await?;

  Ok(TrainingStatistics::compute(&completed, &entries))
}
