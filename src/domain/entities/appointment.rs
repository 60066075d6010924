//! Appointment entity and repository trait.
//!
//! Maps to the `appointments` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AppointmentStatus;
use crate::shared::error::AppError;

/// A scheduled visit of a patient to a dentist.
///
/// Maps to the `appointments` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - patient_id: BIGINT NOT NULL REFERENCES patients(id) ON DELETE CASCADE
/// - dentist_id: BIGINT NOT NULL REFERENCES dentists(id) ON DELETE CASCADE
/// - appointment_type_id: BIGINT NOT NULL REFERENCES appointment_types(id) ON DELETE CASCADE
/// - medical_record_id: BIGINT NULL REFERENCES medical_records(id) ON DELETE SET NULL
/// - date: DATE NOT NULL
/// - time: TIME NOT NULL
/// - status: VARCHAR(20) NOT NULL DEFAULT 'PENDIENTE'
/// - notes: VARCHAR(255) NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,

    pub patient_id: i64,
    pub dentist_id: i64,
    pub appointment_type_id: i64,

    /// Medical record the visit is filed under, if any
    pub medical_record_id: Option<i64>,

    pub date: NaiveDate,
    pub time: NaiveTime,

    #[serde(default)]
    pub status: AppointmentStatus,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Date and time combined.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }
}

impl Default for Appointment {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            patient_id: 0,
            dentist_id: 0,
            appointment_type_id: 0,
            medical_record_id: None,
            date: now.date_naive(),
            time: NaiveTime::MIN,
            status: AppointmentStatus::default(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Appointment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Appointment>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError>;

    /// Insert when `id == 0`, otherwise overwrite every column of the row.
    async fn save(&self, appointment: &Appointment) -> Result<Appointment, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
