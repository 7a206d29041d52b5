//! Application commands
//!
//! Each command takes the shared [`AppState`](crate::db::AppState) and returns
//! `Result<T, String>` so callers (the CLI, or any route layer in front of
//! it) can surface the message directly.

pub mod chat;
pub mod exercises;
pub mod goals;
pub mod plans;
pub mod progress;
pub mod sessions;
pub mod statistics;
pub mod today;
pub mod users;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date from a request
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
  NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
    .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())
}
