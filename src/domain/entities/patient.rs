//! Patient entity and repository trait.
//!
//! Maps to the `patients` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A patient of the clinic.
///
/// Maps to the `patients` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name: VARCHAR(100) NOT NULL
/// - last_name: VARCHAR(100) NULL
/// - document_type: VARCHAR(10) NULL
/// - document: VARCHAR(50) NOT NULL UNIQUE
/// - birth_date: DATE NULL
/// - gender: VARCHAR(1) NULL
/// - email: VARCHAR(150) NULL UNIQUE
/// - phone: VARCHAR(20) NULL
/// - address: VARCHAR(255) NULL
/// - emergency_contact_name / _relationship / _phone: VARCHAR NULL
/// - allergies, medications, notes: TEXT NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Deleting a patient cascades to its appointments and its medical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Storage-assigned id (0 until persisted)
    pub id: i64,

    pub first_name: String,
    pub last_name: Option<String>,

    /// Identity document kind (CC, TI, CE, ...)
    pub document_type: Option<String>,

    /// Identity document number, unique across patients
    pub document: String,

    pub birth_date: Option<NaiveDate>,

    /// Single-letter gender code
    pub gender: Option<String>,

    /// Contact email, unique when present
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    pub emergency_contact_name: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_phone: Option<String>,

    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }

    /// Whether the patient has not been stored yet.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

impl Default for Patient {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name: String::new(),
            last_name: None,
            document_type: None,
            document: String::new(),
            birth_date: None,
            gender: None,
            email: None,
            phone: None,
            address: None,
            emergency_contact_name: None,
            emergency_contact_relationship: None,
            emergency_contact_phone: None,
            allergies: None,
            medications: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Patient data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// All patients in storage order.
    async fn find_all(&self) -> Result<Vec<Patient>, AppError>;

    /// Find a patient by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError>;

    /// Insert when `id == 0`, otherwise overwrite every column of the row.
    async fn save(&self, patient: &Patient) -> Result<Patient, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete a patient; appointments and medical record go with it.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
