//! Appointment Type Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{
    CreateAppointmentTypeRequest, UpdateAppointmentTypeRequest,
};
use crate::application::dto::response::AppointmentTypeResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all appointment types
pub async fn list_appointment_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentTypeResponse>>, AppError> {
    Ok(Json(state.appointment_types.list_appointment_types().await?))
}

/// Get appointment type by ID
pub async fn get_appointment_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<AppointmentTypeResponse>, AppError> {
    Ok(Json(state.appointment_types.get_appointment_type(id).await?))
}

/// Create an appointment type
pub async fn create_appointment_type(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateAppointmentTypeRequest>,
) -> Result<(StatusCode, Json<AppointmentTypeResponse>), AppError> {
    let created = state.appointment_types.create_appointment_type(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update appointment type
pub async fn update_appointment_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateAppointmentTypeRequest>,
) -> Result<Json<AppointmentTypeResponse>, AppError> {
    Ok(Json(
        state
            .appointment_types
            .update_appointment_type(id, body)
            .await?,
    ))
}

/// Delete an appointment type and every appointment of that type
pub async fn delete_appointment_type(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.appointment_types.delete_appointment_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
