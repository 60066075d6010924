//! Appointment type entity and repository trait.
//!
//! Maps to the `appointment_types` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A kind of appointment (cleaning, extraction, check-up, ...).
///
/// Maps to the `appointment_types` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - description: VARCHAR(255) NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for AppointmentType {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: String::new(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for AppointmentType data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentTypeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<AppointmentType>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<AppointmentType>, AppError>;

    async fn save(&self, appointment_type: &AppointmentType) -> Result<AppointmentType, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete the type and every appointment booked with it.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
