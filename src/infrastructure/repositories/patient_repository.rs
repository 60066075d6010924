//! Patient Repository Implementation
//!
//! PostgreSQL implementation of the PatientRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{Patient, PatientRepository};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

/// Database row representation matching the patients table schema.
#[derive(Debug, sqlx::FromRow)]
struct PatientRow {
    id: i64,
    first_name: String,
    last_name: Option<String>,
    document_type: Option<String>,
    document: String,
    birth_date: Option<NaiveDate>,
    gender: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    emergency_contact_name: Option<String>,
    emergency_contact_relationship: Option<String>,
    emergency_contact_phone: Option<String>,
    allergies: Option<String>,
    medications: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PatientRow {
    fn into_patient(self) -> Patient {
        Patient {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            document_type: self.document_type,
            document: self.document,
            birth_date: self.birth_date,
            gender: self.gender,
            email: self.email,
            phone: self.phone,
            address: self.address,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_relationship: self.emergency_contact_relationship,
            emergency_contact_phone: self.emergency_contact_phone,
            allergies: self.allergies,
            medications: self.medications,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const COLUMNS: &str = "id, first_name, last_name, document_type, document, birth_date, gender, \
     email, phone, address, emergency_contact_name, emergency_contact_relationship, \
     emergency_contact_phone, allergies, medications, notes, created_at, updated_at";

/// PostgreSQL patient repository implementation.
#[derive(Clone)]
pub struct PgPatientRepository {
    pool: PgPool,
}

impl PgPatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn find_all(&self) -> Result<Vec<Patient>, AppError> {
        let rows = sqlx::query_as::<_, PatientRow>(&format!(
            "SELECT {} FROM patients ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_patient()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let row = sqlx::query_as::<_, PatientRow>(&format!(
            "SELECT {} FROM patients WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_patient()))
    }

    async fn save(&self, patient: &Patient) -> Result<Patient, AppError> {
        let sql = if patient.is_new() {
            format!(
                r#"
                INSERT INTO patients (
                    first_name, last_name, document_type, document, birth_date, gender,
                    email, phone, address, emergency_contact_name,
                    emergency_contact_relationship, emergency_contact_phone,
                    allergies, medications, notes
                )
                VALUES ($2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                RETURNING {}
                "#,
                COLUMNS
            )
        } else {
            format!(
                r#"
                UPDATE patients
                SET first_name = $2, last_name = $3, document_type = $4, document = $5,
                    birth_date = $6, gender = $7, email = $8, phone = $9, address = $10,
                    emergency_contact_name = $11, emergency_contact_relationship = $12,
                    emergency_contact_phone = $13, allergies = $14, medications = $15,
                    notes = $16, updated_at = NOW()
                WHERE id = $1
                RETURNING {}
                "#,
                COLUMNS
            )
        };

        let row = sqlx::query_as::<_, PatientRow>(&sql)
            .bind(patient.id)
            .bind(&patient.first_name)
            .bind(&patient.last_name)
            .bind(&patient.document_type)
            .bind(&patient.document)
            .bind(patient.birth_date)
            .bind(&patient.gender)
            .bind(&patient.email)
            .bind(&patient.phone)
            .bind(&patient.address)
            .bind(&patient.emergency_contact_name)
            .bind(&patient.emergency_contact_relationship)
            .bind(&patient.emergency_contact_phone)
            .bind(&patient.allergies)
            .bind(&patient.medications)
            .bind(&patient.notes)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(|r| r.into_patient())
            .ok_or_else(|| AppError::not_found("Paciente", patient.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM patients WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Appointments and the medical record go with the patient (ON DELETE CASCADE).
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Paciente", id));
        }

        Ok(())
    }
}
