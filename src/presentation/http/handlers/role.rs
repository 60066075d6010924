//! Role Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateRoleRequest, UpdateRoleRequest};
use crate::application::dto::response::RoleResponse;
use crate::presentation::http::extractors::{IdPath, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all roles
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<RoleResponse>>, AppError> {
    Ok(Json(state.roles.list_roles().await?))
}

/// Get role by ID
pub async fn get_role(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<RoleResponse>, AppError> {
    Ok(Json(state.roles.get_role(id).await?))
}

/// Create a new role
pub async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateRoleRequest>,
) -> Result<(StatusCode, Json<RoleResponse>), AppError> {
    let role = state.roles.create_role(body).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// Rename a role
pub async fn update_role(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateRoleRequest>,
) -> Result<Json<RoleResponse>, AppError> {
    Ok(Json(state.roles.update_role(id, body).await?))
}

/// Delete a role and every user holding it
pub async fn delete_role(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.roles.delete_role(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
