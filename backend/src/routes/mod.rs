//! Route definitions for the Patient Records API
//!
//! This module organizes all API routes and applies middleware.

use crate::error::{INTERNAL_MESSAGE, NOT_FOUND_ROUTE_MESSAGE};
use crate::state::AppState;
use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use patient_records_shared::ErrorResponse;
use std::any::Any;
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::error;

mod auth;
mod health;
mod patients;
mod profile;


pub use auth::auth_routes;
pub use profile::profile_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::landing_page))
        .nest("/api", api_routes(state.clone()))
        .fallback(not_found)
        // Apply middleware layers
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/status", get(health::status))
        .route("/pacientes", get(patients::list_patients))
        .nest("/auth", auth::auth_routes())
        .nest("/usuarios", profile::profile_routes(state))
}

/// Fallback for unmatched routes
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: NOT_FOUND_ROUTE_MESSAGE.to_string(),
        }),
    )
}

/// Turn a handler panic into the generic 500 body
fn handle_panic(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
