//! Novabook Library Lending Core
//!
//! The lending engine of the Novabook library management system: books,
//! members, staff users, and the transactional borrow/return lifecycle on
//! top of PostgreSQL. This crate is an in-process API; the desktop shell
//! consuming it owns presentation, CSV tooling, and session handling.

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all consumers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Composition root: connect the pool, apply pending migrations, and
    /// build the repository and services once. Consumers receive explicit
    /// references from here. There is no global registry.
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        let pool = db::connect(&config.database).await?;

        db::MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::Internal(format!("failed to run database migrations: {}", e)))?;

        tracing::info!("connected to database");

        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, &config.loans);

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
