//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The state is built once at startup and is read-only afterwards:
//! the pool is internally Arc'd, the config is wrapped in Arc, and the
//! token keys are pre-computed and shared.

use crate::auth::TokenService;
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token service with cached signing keys
    pub tokens: TokenService,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the signing keys from the configured secret, so call it
    /// once at application startup.
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let tokens = TokenService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            tokens,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token service
    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
