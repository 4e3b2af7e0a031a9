//! Database repositories
//!
//! Provides data access layer for database operations. Each operation
//! checks out one pooled connection, runs a single parameterized
//! statement on it, and returns the connection when the guard drops.

pub mod account;
pub mod patient;

pub use account::{AccountProfile, AccountRecord, AccountRepository, NewAccount};
pub use patient::PatientRepository;

use thiserror::Error;

/// Failure raised by a repository operation
///
/// Driver errors are kept as sources for logging and never reach a
/// response body.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("could not obtain a database connection")]
    Connection(#[source] sqlx::Error),

    #[error("query failed")]
    Query(#[source] sqlx::Error),

    #[error("row decode failed: {0}")]
    Decode(String),

    #[error("email already registered")]
    DuplicateEmail,
}

impl RepositoryError {
    /// Whether the database could not be reached at all
    pub fn is_connection(&self) -> bool {
        matches!(self, RepositoryError::Connection(_))
    }
}
