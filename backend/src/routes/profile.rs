//! Practitioner profile routes
//!
//! Every route here sits behind `require_auth`.

use crate::auth::{require_auth, AuthUser};
use crate::error::ApiResult;
use crate::services::AccountService;
use crate::state::AppState;
use axum::{extract::State, middleware, routing::get, Json, Router};
use patient_records_shared::ProfileResponse;

/// Create profile routes guarded by the auth middleware
pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/perfil", get(get_profile))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// GET /api/usuarios/perfil - Profile of the authenticated account
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = AccountService::get_profile(state.db(), auth.account_id).await?;
    Ok(Json(profile))
}
