//! Error types for the Patient Records application

use thiserror::Error;

/// Reasons a session token can be rejected
///
/// These are only ever reported in server logs. Clients see a single
/// generic 401 regardless of which variant occurred.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,
}

/// One or more required request fields were absent or empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);
