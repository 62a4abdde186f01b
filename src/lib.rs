//! RecipeBox Server Library
//!
//! This module exports the favorites API, the recipe catalog adapter and the
//! search logic for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod search;
pub mod source;

pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given pool and configuration
    pub fn new(pool: sqlx::SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }
}
