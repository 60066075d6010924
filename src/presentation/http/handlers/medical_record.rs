//! Medical Record Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateMedicalRecordRequest, UpdateMedicalRecordRequest};
use crate::application::dto::response::MedicalRecordResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List medical records with their patient embedded
pub async fn list_medical_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<MedicalRecordResponse>>, AppError> {
    Ok(Json(state.medical_records.list_medical_records().await?))
}

/// Get medical record by ID
pub async fn get_medical_record(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MedicalRecordResponse>, AppError> {
    Ok(Json(state.medical_records.get_medical_record(id).await?))
}

/// Open a medical record for a patient
pub async fn create_medical_record(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateMedicalRecordRequest>,
) -> Result<(StatusCode, Json<MedicalRecordResponse>), AppError> {
    let record = state.medical_records.create_medical_record(body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update medical record
pub async fn update_medical_record(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateMedicalRecordRequest>,
) -> Result<Json<MedicalRecordResponse>, AppError> {
    Ok(Json(
        state.medical_records.update_medical_record(id, body).await?,
    ))
}

/// Delete a medical record and the appointments filed under it
pub async fn delete_medical_record(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.medical_records.delete_medical_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
