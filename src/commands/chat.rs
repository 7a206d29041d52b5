use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::commands::{goals, progress, sessions, users};
use crate::db::AppState;
use crate::llm::ClaudeClient;
use crate::prompts;

/// Sessions considered "recent activity" in the coach's context
const RECENT_FOR_CONTEXT: usize = 5;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
  pub response: String,
  pub timestamp: DateTime<Utc>,
}

/// Ask the coach a question with the user's profile as context
pub async fn chat(state: &AppState, user_id: i64, message: &str) -> Result<ChatResponse, String> {
  if message.trim().is_empty() {
    return Err("Message is required".to_string());
  }

  let client = ClaudeClient::from_config(&state.config).map_err(|e| e.to_string())?;

  let user = users::find_user(state, user_id).await?;
  let latest = progress::latest_progress(state, user_id).await?;
  let goal = goals::active_goal(state, user_id).await?;
  let recent = sessions::list_recent_sessions(state, user_id)
    .await?
    .len()
    .min(RECENT_FOR_CONTEXT);

  let system_prompt = prompts::build_coach_prompt(
    user.as_ref(),
    latest.as_ref(),
    goal.as_ref(),
    recent,
    state.config.units,
  );

  let (response, _) = client
    .coach_reply(&system_prompt, message)
    .await
    .map_err(|e| format!("Failed to get AI response: {}", e))?;

  Ok(ChatResponse {
    response,
    timestamp: Utc::now(),
  })
}
