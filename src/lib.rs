pub mod commands;
pub mod config;
pub mod db;
pub mod llm;
pub mod models;
pub mod plan;
pub mod prompts;
pub mod schedule;
pub mod statistics;
pub mod units;

#[cfg(test)]
mod test_utils;

pub use plan::{parse_daily_workouts, DailyWorkout, Focus, PlanIndex};
pub use schedule::{workout_for_day, ScheduledWorkout, TodaysWorkout, WeeklySchedule};

use config::{AppConfig, ConfigError};
use db::{AppState, DbError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum StartupError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Db(#[from] DbError),
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `workoutbot=info` filter.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workoutbot=info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

/// Load `.env`, read configuration and open the database
pub async fn init_state() -> Result<AppState, StartupError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = AppConfig::from_env()?;
  let state = AppState::from_config(config).await?;

  tracing::info!(units = %state.config.units, "Database ready");

  Ok(state)
}
