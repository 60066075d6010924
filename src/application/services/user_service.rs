//! User Service
//!
//! Staff accounts. Passwords are stored as Argon2 hashes and never leave
//! this service.

use std::collections::HashMap;
use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

use super::role_service::ROLE;
use crate::application::dto::request::{CreateUserRequest, EntityRef, UpdateUserRequest};
use crate::application::dto::response::UserResponse;
use crate::domain::{Role, RoleRepository, User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::validation::non_blank;

const USER: &str = "Usuario";

/// Length of generated temporary passwords
const TEMP_PASSWORD_LEN: usize = 12;

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserResponse>, AppError>;

    async fn get_user(&self, id: i64) -> Result<UserResponse, AppError>;

    /// Create a user. Username falls back to the email's local part and a
    /// missing password is replaced by a random temporary one.
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError>;

    async fn update_user(&self, id: i64, request: UpdateUserRequest)
        -> Result<UserResponse, AppError>;

    /// Enable or disable an account without touching any other field.
    async fn set_active(&self, id: i64, active: bool) -> Result<UserResponse, AppError>;

    async fn delete_user(&self, id: i64) -> Result<(), AppError>;
}

pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, role_repo: Arc<dyn RoleRepository>) -> Self {
        Self {
            user_repo,
            role_repo,
        }
    }

    async fn resolve_role(&self, id: i64) -> Result<Role, AppError> {
        self.role_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ROLE, id))
    }

    async fn to_response(&self, user: User) -> Result<UserResponse, AppError> {
        let role = self.role_repo.find_by_id(user.role_id).await?;
        Ok(UserResponse::assemble(user, role.as_ref()))
    }
}

/// Hash a password with Argon2id and a fresh salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

fn temporary_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_PASSWORD_LEN)
        .map(char::from)
        .collect()
}

/// Username to use when none was given: the local part of the email.
fn default_username(username: Option<String>, email: Option<&str>) -> Result<String, AppError> {
    if let Some(username) = non_blank(username) {
        return Ok(username.trim().to_string());
    }

    email
        .and_then(|e| e.split('@').next())
        .map(str::trim)
        .filter(|local| !local.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Se requiere username o email".into()))
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;
        let roles: HashMap<i64, Role> = self
            .role_repo
            .find_all()
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        Ok(users
            .into_iter()
            .map(|u| {
                let role = roles.get(&u.role_id);
                UserResponse::assemble(u, role)
            })
            .collect())
    }

    async fn get_user(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER, id))?;

        self.to_response(user).await
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let role_id = request
            .role
            .map(|r| r.id)
            .ok_or_else(|| AppError::Validation("Se requiere el rol (id)".into()))?;
        let role = self.resolve_role(role_id).await?;

        let mut user = request.profile_into_entity();
        user.username = default_username(request.username.clone(), user.email.as_deref())?;
        user.role_id = role.id;

        let password = match non_blank(request.password.clone()) {
            Some(password) => password,
            None => {
                tracing::warn!(username = %user.username, "No password given, generated a temporary one");
                temporary_password()
            }
        };
        user.password_hash = hash_password(&password)?;

        let saved = self.user_repo.save(&user).await?;
        tracing::info!(user_id = saved.id, username = %saved.username, role = %role.name, "User created");

        Ok(UserResponse::assemble(saved, Some(&role)))
    }

    async fn update_user(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER, id))?;

        request.apply_profile_to(&mut user);

        if let Some(password) = non_blank(request.password.clone()) {
            user.password_hash = hash_password(&password)?;
        }
        if let Some(EntityRef { id: role_id }) = request.role {
            user.role_id = self.resolve_role(role_id).await?.id;
        }

        let saved = self.user_repo.save(&user).await?;
        tracing::debug!(user_id = id, "User updated");

        self.to_response(saved).await
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<UserResponse, AppError> {
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER, id))?;

        user.active = active;
        user.updated_at = Utc::now();

        let saved = self.user_repo.save(&user).await?;
        tracing::info!(user_id = id, active, "User status changed");

        self.to_response(saved).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.user_repo.exists_by_id(id).await? {
            return Err(AppError::not_found(USER, id));
        }

        self.user_repo.delete_by_id(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
