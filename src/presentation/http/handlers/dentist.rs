//! Dentist Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateDentistRequest, UpdateDentistRequest};
use crate::application::dto::response::DentistResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all dentists
pub async fn list_dentists(
    State(state): State<AppState>,
) -> Result<Json<Vec<DentistResponse>>, AppError> {
    Ok(Json(state.dentists.list_dentists().await?))
}

/// Get dentist by ID
pub async fn get_dentist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<DentistResponse>, AppError> {
    Ok(Json(state.dentists.get_dentist(id).await?))
}

/// Register a dentist
pub async fn create_dentist(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateDentistRequest>,
) -> Result<(StatusCode, Json<DentistResponse>), AppError> {
    let dentist = state.dentists.create_dentist(body).await?;
    Ok((StatusCode::CREATED, Json(dentist)))
}

/// Update dentist
pub async fn update_dentist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateDentistRequest>,
) -> Result<Json<DentistResponse>, AppError> {
    Ok(Json(state.dentists.update_dentist(id, body).await?))
}

/// Delete dentist together with their appointments
pub async fn delete_dentist(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.dentists.delete_dentist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
