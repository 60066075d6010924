//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A staff account of the clinic system.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_names, last_names: VARCHAR(100) NULL
/// - document_type: VARCHAR(10) NULL
/// - document: VARCHAR(20) NULL UNIQUE
/// - birth_date: DATE NULL
/// - gender: VARCHAR(1) NULL
/// - email: VARCHAR(150) NULL UNIQUE
/// - phone: VARCHAR(15) NULL
/// - address: VARCHAR(255) NULL
/// - username: VARCHAR(50) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - active: BOOLEAN NOT NULL DEFAULT TRUE
/// - role_id: BIGINT NOT NULL REFERENCES roles(id) ON DELETE CASCADE
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub first_names: Option<String>,
    pub last_names: Option<String>,
    pub document_type: Option<String>,
    pub document: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    /// Login name (up to 50 characters, unique)
    pub username: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the account may be used
    pub active: bool,

    pub role_id: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full name, falling back to the username when no names are set.
    pub fn display_name(&self) -> String {
        let names: Vec<&str> = [self.first_names.as_deref(), self.last_names.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if names.is_empty() {
            self.username.clone()
        } else {
            names.join(" ")
        }
    }
}

impl Default for User {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_names: None,
            last_names: None,
            document_type: None,
            document: None,
            birth_date: None,
            gender: None,
            email: None,
            phone: None,
            address: None,
            username: String::new(),
            password_hash: String::new(),
            active: true,
            role_id: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Insert when `id == 0`, otherwise overwrite every column of the row.
    async fn save(&self, user: &User) -> Result<User, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
