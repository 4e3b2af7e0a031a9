//! Patient listing route

use crate::error::{ApiError, ApiResult};
use crate::repositories::PatientRepository;
use crate::state::AppState;
use axum::{extract::State, Json};
use patient_records_shared::Patient;

const LIST_FAILED: &str = "Error al obtener pacientes";

/// GET /api/pacientes - List every patient
pub async fn list_patients(State(state): State<AppState>) -> ApiResult<Json<Vec<Patient>>> {
    let patients = PatientRepository::list_all(state.db())
        .await
        .map_err(ApiError::database(LIST_FAILED))?;

    Ok(Json(patients))
}
