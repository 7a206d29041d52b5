//! LLM integration for plan generation and coaching chat
//!
//! This module handles communication with the Claude API. Responses are
//! returned as plain text; plan structure is recovered by `crate::plan`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::prompts::{self, PlanContext};

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const API_VERSION: &str = "2023-06-01";

const PLAN_MAX_TOKENS: u32 = 2500;
const PLAN_TEMPERATURE: f32 = 0.3;
const CHAT_MAX_TOKENS: u32 = 600;
const CHAT_TEMPERATURE: f32 = 0.4;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, Serialize)]
pub enum LlmError {
  #[error("API key not configured")]
  MissingApiKey,

  #[error("Invalid API URL: {0}")]
  InvalidUrl(String),

  #[error("Request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Parse error: {0}")]
  Parse(String),
}

/// ---------------------------------------------------------------------------
/// Messages API Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct MessagesRequest {
  model: String,
  max_tokens: u32,
  temperature: f32,
  system: String,
  messages: Vec<MessageTurn>,
}

#[derive(Debug, Serialize)]
struct MessageTurn {
  role: String,
  content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
  content: Vec<ContentBlock>,
  #[allow(dead_code)]
  model: String,
  #[allow(dead_code)]
  stop_reason: Option<String>,
  usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
  #[serde(rename = "type")]
  content_type: String,
  text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
  pub input_tokens: u32,
  pub output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
  error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
  message: String,
}

/// ---------------------------------------------------------------------------
/// Claude Client
/// ---------------------------------------------------------------------------

pub struct ClaudeClient {
  client: Client,
  api_key: String,
  api_url: url::Url,
}

impl ClaudeClient {
  pub fn new(api_key: impl Into<String>, api_url: &str) -> Result<Self, LlmError> {
    let api_url = url::Url::parse(api_url).map_err(|e| LlmError::InvalidUrl(e.to_string()))?;

    Ok(Self {
      client: Client::new(),
      api_key: api_key.into(),
      api_url,
    })
  }

  /// Create a client from app config; fails if no API key is set
  pub fn from_config(config: &AppConfig) -> Result<Self, LlmError> {
    let api_key = config
      .anthropic_api_key
      .clone()
      .ok_or(LlmError::MissingApiKey)?;

    Self::new(api_key, &config.llm_api_url)
  }

  /// Call Claude with a system prompt and user message
  pub async fn complete(
    &self,
    system_prompt: &str,
    user_message: &str,
    max_tokens: u32,
    temperature: f32,
  ) -> Result<(String, Usage), LlmError> {
    let request = MessagesRequest {
      model: CLAUDE_MODEL.to_string(),
      max_tokens,
      temperature,
      system: system_prompt.to_string(),
      messages: vec![MessageTurn {
        role: "user".to_string(),
        content: user_message.to_string(),
      }],
    };

    tracing::debug!(max_tokens, "Sending completion request");

    let response = self
      .client
      .post(self.api_url.clone())
      .header("x-api-key", &self.api_key)
      .header("anthropic-version", API_VERSION)
      .header("content-type", "application/json")
      .json(&request)
      .send()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    if !status.is_success() {
      tracing::warn!(%status, "Completion request failed");
      // Try to parse error response
      if let Ok(error_resp) = serde_json::from_str::<ApiErrorEnvelope>(&body) {
        return Err(LlmError::Api(error_resp.error.message));
      }
      return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
    }

    let reply: MessagesResponse =
      serde_json::from_str(&body).map_err(|e| LlmError::Parse(e.to_string()))?;

    // Extract text from the first text content block
    let text = reply
      .content
      .iter()
      .find(|c| c.content_type == "text")
      .and_then(|c| c.text.clone())
      .ok_or_else(|| LlmError::Parse("No text content in response".to_string()))?;

    tracing::debug!(
      input_tokens = reply.usage.input_tokens,
      output_tokens = reply.usage.output_tokens,
      "Completion received"
    );

    Ok((text, reply.usage))
  }

  /// Generate a plan document. The text is returned as-is; it is not
  /// guaranteed to follow the requested layout.
  pub async fn generate_workout_plan(
    &self,
    ctx: &PlanContext,
  ) -> Result<(String, Usage), LlmError> {
    let user_message = prompts::build_plan_prompt(ctx);

    self
      .complete(
        prompts::PLAN_SYSTEM_PROMPT,
        &user_message,
        PLAN_MAX_TOKENS,
        PLAN_TEMPERATURE,
      )
      .await
  }

  /// One chat turn with the coach
  pub async fn coach_reply(
    &self,
    system_prompt: &str,
    message: &str,
  ) -> Result<(String, Usage), LlmError> {
    self
      .complete(system_prompt, message, CHAT_MAX_TOKENS, CHAT_TEMPERATURE)
      .await
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
