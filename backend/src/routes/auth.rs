//! Authentication routes
//!
//! Provides endpoints for practitioner registration and login.
//! Password hashing runs on the blocking thread pool.

use crate::error::{ApiError, ApiResult};
use crate::services::account::{AccountService, MISSING_CREDENTIALS, MISSING_REGISTRATION_FIELDS};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use patient_records_shared::{
    Credentials, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, Registration,
};
use tracing::{debug, warn};

const REGISTERED: &str = "Usuario registrado exitosamente";

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registro", post(register))
        .route("/login", post(login))
}

/// Bodies that are not JSON objects are treated as empty so they fail field validation
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(%rejection, "Unreadable JSON request body");
            T::default()
        }
    }
}

/// Register a new practitioner
///
/// POST /api/auth/registro
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let registration = Registration::try_from(body_or_default(payload)).map_err(|missing| {
        debug!(%missing, "Registration rejected");
        ApiError::Validation(MISSING_REGISTRATION_FIELDS.to_string())
    })?;

    AccountService::register(state.db(), registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: REGISTERED.to_string(),
        }),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let credentials = Credentials::try_from(body_or_default(payload)).map_err(|missing| {
        debug!(%missing, "Login rejected");
        ApiError::Validation(MISSING_CREDENTIALS.to_string())
    })?;

    let response =
        AccountService::login(state.db(), state.tokens(), credentials, Utc::now()).await?;
    Ok(Json(response))
}
