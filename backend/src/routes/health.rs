//! Landing page and system status endpoints
//!
//! - `/` - Static landing page
//! - `/api/status` - Reports whether the database is reachable

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, response::Html, Json};
use patient_records_shared::StatusResponse;

/// Name of the backing store reported by `/api/status`
pub const DATABASE_NAME: &str = "PostgreSQL";

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>Plataforma Web</title>
</head>
<body>
  <h1>Plataforma Web</h1>
  <p>API de registros de pacientes.</p>
  <ul>
    <li><code>GET /api/status</code></li>
    <li><code>GET /api/pacientes</code></li>
    <li><code>POST /api/auth/registro</code></li>
    <li><code>POST /api/auth/login</code></li>
    <li><code>GET /api/usuarios/perfil</code></li>
  </ul>
</body>
</html>
"#;

/// GET / - Landing page
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /api/status - Database connectivity check
///
/// Returns 500 with `status: "error"` when no connection can be opened.
pub async fn status(State(state): State<AppState>) -> (StatusCode, Json<StatusResponse>) {
    let (code, status) = match db::health_check(state.db()).await {
        Ok(()) => (StatusCode::OK, "online"),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "error"),
    };

    (
        code,
        Json(StatusResponse {
            status: status.to_string(),
            database: DATABASE_NAME.to_string(),
        }),
    )
}
