//! Role entity and repository trait.
//!
//! Maps to the `roles` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A user role (administrator, receptionist, dentist, ...).
///
/// Maps to the `roles` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(50) NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Users reference their role with `ON DELETE CASCADE`: deleting a role
/// deletes every user holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,

    /// Role name (up to 50 characters, unique)
    pub name: String,

    /// Role creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for Role {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Role data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Role>, AppError>;

    /// Find a role by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, AppError>;

    /// Insert when `id == 0`, otherwise update the name.
    async fn save(&self, role: &Role) -> Result<Role, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete a role together with its users.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
