//! API request and response types
//!
//! Field names follow the public JSON contract consumed by the web and
//! mobile clients, which is why account fields are in Spanish.

use crate::models::AccountId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read a field as text, treating any non-string JSON value as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// API error response
///
/// Every failure, whatever its status code, is reported with this body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// System status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub database: String,
}

/// Registration request
///
/// Every field is optional at the wire level so that missing values are
/// reported as a validation failure instead of a deserialization error.
/// A value of the wrong JSON type counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub password: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub nombre: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub apellido: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub especialidad: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub registro_medico: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub telefono: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

/// Public account fields returned alongside a session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: Option<String>,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: AccountSummary,
}

/// Practitioner profile response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: AccountId,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: Option<String>,
    pub registro_medico: Option<String>,
    pub telefono: Option<String>,
}
