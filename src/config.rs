//! Runtime configuration loaded from the environment (and `.env`)

use serde::Serialize;
use std::env;
use thiserror::Error;

use crate::units::UnitSystem;

/// ---------------------------------------------------------------------------
/// Defaults
/// ---------------------------------------------------------------------------

pub const DEFAULT_DATABASE_URL: &str = "sqlite://workoutbot.db?mode=rwc";
pub const DEFAULT_LLM_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_SESSION_MINUTES: i64 = 60;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value for {name}: {value}")]
  InvalidValue { name: String, value: String },
}

impl Serialize for ConfigError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// App Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub database_url: String,
  /// Only needed for plan generation and chat
  pub anthropic_api_key: Option<String>,
  pub llm_api_url: String,
  pub units: UnitSystem,
  pub default_session_minutes: i64,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      anthropic_api_key: None,
      llm_api_url: DEFAULT_LLM_API_URL.to_string(),
      units: UnitSystem::default(),
      default_session_minutes: DEFAULT_SESSION_MINUTES,
    }
  }
}

impl AppConfig {
  /// Read configuration from process environment. Call `dotenvy::dotenv()`
  /// first if a `.env` file should be honored.
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let units = match non_empty("WORKOUTBOT_UNITS") {
      Some(value) => value.parse::<UnitSystem>().map_err(|_| ConfigError::InvalidValue {
        name: "WORKOUTBOT_UNITS".into(),
        value,
      })?,
      None => defaults.units,
    };

    let default_session_minutes = match non_empty("DEFAULT_SESSION_MINUTES") {
      Some(value) => match value.parse::<i64>() {
        Ok(minutes) if minutes > 0 => minutes,
        _ => {
          return Err(ConfigError::InvalidValue {
            name: "DEFAULT_SESSION_MINUTES".into(),
            value,
          })
        }
      },
      None => defaults.default_session_minutes,
    };

    Ok(Self {
      database_url: non_empty("DATABASE_URL").unwrap_or(defaults.database_url),
      anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
      llm_api_url: non_empty("LLM_API_URL").unwrap_or(defaults.llm_api_url),
      units,
      default_session_minutes,
    })
  }
}

fn non_empty(name: &str) -> Option<String> {
  env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
