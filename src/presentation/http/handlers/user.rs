//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateUserRequest, UpdateUserRequest, UserStatusRequest};
use crate::application::dto::response::UserResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    Ok(Json(state.users.list_users().await?))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<UserResponse>, AppError> {
    Ok(Json(state.users.get_user(id).await?))
}

/// Create a user with a hashed password
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.users.create_user(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update user
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    Ok(Json(state.users.update_user(id, body).await?))
}

/// Enable or disable an account: `PUT /api/usuarios/{id}/estado`
pub async fn update_user_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UserStatusRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let active = body
        .active
        .ok_or_else(|| AppError::Validation("El campo 'activo' es requerido".into()))?;

    Ok(Json(state.users.set_active(id, active).await?))
}

/// Delete user
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
