use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::config::AppConfig;

pub type DbPool = SqlitePool;

/// Application state shared by all commands
pub struct AppState {
  pub db: DbPool,
  pub config: AppConfig,
}

#[derive(Error, Debug)]
pub enum DbError {
  #[error("Failed to connect to database: {0}")]
  Connect(#[from] sqlx::Error),

  #[error("Failed to run migrations: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(config: &AppConfig) -> Result<DbPool, DbError> {
  tracing::info!(url = %config.database_url, "Initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&config.database_url)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database initialized successfully");

  Ok(pool)
}

impl AppState {
  pub async fn from_config(config: AppConfig) -> Result<Self, DbError> {
    let db = initialize_db(&config).await?;
    Ok(Self { db, config })
  }
}
