//! Appointment Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::application::dto::response::AppointmentResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List appointments with patient, dentist and type embedded
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    Ok(Json(state.appointments.list_appointments().await?))
}

/// Get appointment by ID
pub async fn get_appointment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<AppointmentResponse>, AppError> {
    Ok(Json(state.appointments.get_appointment(id).await?))
}

/// Book an appointment
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let appointment = state.appointments.create_appointment(body).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Reschedule or change the status of an appointment
pub async fn update_appointment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateAppointmentRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    Ok(Json(state.appointments.update_appointment(id, body).await?))
}

/// Delete appointment
pub async fn delete_appointment(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.appointments.delete_appointment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
