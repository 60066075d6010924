//! Dentist entity and repository trait.
//!
//! Maps to the `dentists` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A dentist working at the clinic.
///
/// Maps to the `dentists` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name, last_name: VARCHAR(100) NOT NULL
/// - license_number: VARCHAR(20) NOT NULL UNIQUE
/// - document: VARCHAR(20) NULL UNIQUE
/// - email: VARCHAR(150) NULL UNIQUE
/// - professional, emergency contact and schedule columns: NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Deleting a dentist cascades to its appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dentist {
    pub id: i64,

    pub first_name: String,
    pub last_name: String,

    /// Professional license number, unique across dentists
    pub license_number: String,

    // Personal information
    pub document_type: Option<String>,
    pub document: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    // Professional information
    pub university: Option<String>,
    pub graduation_year: Option<i32>,
    pub years_of_experience: Option<i32>,
    pub specialties: Option<String>,

    // Emergency contact
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub emergency_contact_phone: Option<String>,

    // Availability
    /// Free-form list of working days, e.g. `"LUN,MAR,MIE"`
    pub working_days: Option<String>,
    /// Shift start as `HH:MM`
    pub start_time: Option<String>,
    /// Shift end as `HH:MM`
    pub end_time: Option<String>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dentist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for Dentist {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            license_number: String::new(),
            document_type: None,
            document: None,
            birth_date: None,
            gender: None,
            email: None,
            phone: None,
            address: None,
            university: None,
            graduation_year: None,
            years_of_experience: None,
            specialties: None,
            emergency_contact_name: None,
            emergency_contact_relationship: None,
            emergency_contact_phone: None,
            working_days: None,
            start_time: None,
            end_time: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Dentist data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DentistRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Dentist>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Dentist>, AppError>;

    /// Insert when `id == 0`, otherwise overwrite every column of the row.
    async fn save(&self, dentist: &Dentist) -> Result<Dentist, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete a dentist and, by cascade, its appointments.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
