//! Patient Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreatePatientRequest, UpdatePatientRequest};
use crate::application::dto::response::PatientResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all patients
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, AppError> {
    Ok(Json(state.patients.list_patients().await?))
}

/// Get patient by ID
pub async fn get_patient(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PatientResponse>, AppError> {
    Ok(Json(state.patients.get_patient(id).await?))
}

/// Create a new patient
pub async fn create_patient(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreatePatientRequest>,
) -> Result<(StatusCode, Json<PatientResponse>), AppError> {
    let patient = state.patients.create_patient(body).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// Update patient
pub async fn update_patient(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdatePatientRequest>,
) -> Result<Json<PatientResponse>, AppError> {
    Ok(Json(state.patients.update_patient(id, body).await?))
}

/// Delete patient together with its appointments and medical record
pub async fn delete_patient(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.patients.delete_patient(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
