//! Medical record entity and repository trait.
//!
//! Maps to the `medical_records` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Clinical history of a patient. Each patient has at most one record.
///
/// Maps to the `medical_records` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - patient_id: BIGINT NOT NULL UNIQUE REFERENCES patients(id) ON DELETE CASCADE
/// - medical_history, allergies, medications: VARCHAR(255) NULL
/// - diseases, surgeries, notes: TEXT NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,

    /// Owning patient (one record per patient)
    pub patient_id: i64,

    /// Relevant medical antecedents
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub diseases: Option<String>,
    pub surgeries: Option<String>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for MedicalRecord {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            patient_id: 0,
            medical_history: None,
            allergies: None,
            medications: None,
            diseases: None,
            surgeries: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for MedicalRecord data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MedicalRecord>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<MedicalRecord>, AppError>;

    /// Insert when `id == 0`, otherwise overwrite every column of the row.
    /// A second record for the same patient is a `Conflict`.
    async fn save(&self, record: &MedicalRecord) -> Result<MedicalRecord, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete a record. Appointments filed under it keep existing, detached.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
