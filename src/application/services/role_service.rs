//! Role Service
//!
//! Handles role CRUD. Deleting a role deletes every user holding it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::request::{CreateRoleRequest, UpdateRoleRequest};
use crate::application::dto::response::RoleResponse;
use crate::domain::RoleRepository;
use crate::shared::error::AppError;

pub(crate) const ROLE: &str = "Rol";

/// Role service trait defining role management operations.
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Get all roles.
    async fn list_roles(&self) -> Result<Vec<RoleResponse>, AppError>;

    /// Get a role by its ID.
    async fn get_role(&self, id: i64) -> Result<RoleResponse, AppError>;

    /// Create a new role.
    async fn create_role(&self, request: CreateRoleRequest) -> Result<RoleResponse, AppError>;

    /// Rename a role.
    async fn update_role(&self, id: i64, request: UpdateRoleRequest)
        -> Result<RoleResponse, AppError>;

    /// Delete a role and, through the cascade, its users.
    async fn delete_role(&self, id: i64) -> Result<(), AppError>;
}

// =============================================================================
// Service Implementation
// =============================================================================

/// RoleService implementation.
pub struct RoleServiceImpl {
    role_repo: Arc<dyn RoleRepository>,
}

impl RoleServiceImpl {
    /// Create a new RoleServiceImpl.
    pub fn new(role_repo: Arc<dyn RoleRepository>) -> Self {
        Self { role_repo }
    }
}

#[async_trait]
impl RoleService for RoleServiceImpl {
    async fn list_roles(&self) -> Result<Vec<RoleResponse>, AppError> {
        let roles = self.role_repo.find_all().await?;
        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }

    async fn get_role(&self, id: i64) -> Result<RoleResponse, AppError> {
        self.role_repo
            .find_by_id(id)
            .await?
            .map(RoleResponse::from)
            .ok_or_else(|| AppError::not_found(ROLE, id))
    }

    async fn create_role(&self, request: CreateRoleRequest) -> Result<RoleResponse, AppError> {
        let saved = self.role_repo.save(&request.into_entity()).await?;
        tracing::info!(role_id = saved.id, name = %saved.name, "Role created");
        Ok(saved.into())
    }

    async fn update_role(
        &self,
        id: i64,
        request: UpdateRoleRequest,
    ) -> Result<RoleResponse, AppError> {
        let mut role = self
            .role_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ROLE, id))?;

        request.apply_to(&mut role);

        let saved = self.role_repo.save(&role).await?;
        tracing::debug!(role_id = id, name = %saved.name, "Role updated");
        Ok(saved.into())
    }

    async fn delete_role(&self, id: i64) -> Result<(), AppError> {
        if !self.role_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(ROLE, id));
        }

        self.role_repo.delete_by_id(id).await?;
        tracing::info!(role_id = id, "Role deleted");
        Ok(())
    }
}
