//! Medical Record Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{MedicalRecord, MedicalRecordRepository};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct MedicalRecordRow {
    id: i64,
    patient_id: i64,
    medical_history: Option<String>,
    allergies: Option<String>,
    medications: Option<String>,
    diseases: Option<String>,
    surgeries: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MedicalRecordRow {
    fn into_medical_record(self) -> MedicalRecord {
        MedicalRecord {
            id: self.id,
            patient_id: self.patient_id,
            medical_history: self.medical_history,
            allergies: self.allergies,
            medications: self.medications,
            diseases: self.diseases,
            surgeries: self.surgeries,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const COLUMNS: &str = "id, patient_id, medical_history, allergies, medications, diseases, \
     surgeries, notes, created_at, updated_at";

/// PostgreSQL medical record repository implementation.
#[derive(Clone)]
pub struct PgMedicalRecordRepository {
    pool: PgPool,
}

impl PgMedicalRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedicalRecordRepository for PgMedicalRecordRepository {
    async fn find_all(&self) -> Result<Vec<MedicalRecord>, AppError> {
        let rows = sqlx::query_as::<_, MedicalRecordRow>(&format!(
            "SELECT {} FROM medical_records ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_medical_record()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MedicalRecord>, AppError> {
        let row = sqlx::query_as::<_, MedicalRecordRow>(&format!(
            "SELECT {} FROM medical_records WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_medical_record()))
    }

    async fn save(&self, record: &MedicalRecord) -> Result<MedicalRecord, AppError> {
        let sql = if record.id == 0 {
            format!(
                r#"
                INSERT INTO medical_records (
                    patient_id, medical_history, allergies, medications, diseases,
                    surgeries, notes
                )
                VALUES ($2, $3, $4, $5, $6, $7, $8)
                RETURNING {}
                "#,
                COLUMNS
            )
        } else {
            format!(
                r#"
                UPDATE medical_records
                SET patient_id = $2, medical_history = $3, allergies = $4,
                    medications = $5, diseases = $6, surgeries = $7, notes = $8,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {}
                "#,
                COLUMNS
            )
        };

        let row = sqlx::query_as::<_, MedicalRecordRow>(&sql)
            .bind(record.id)
            .bind(record.patient_id)
            .bind(&record.medical_history)
            .bind(&record.allergies)
            .bind(&record.medications)
            .bind(&record.diseases)
            .bind(&record.surgeries)
            .bind(&record.notes)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(|r| r.into_medical_record())
            .ok_or_else(|| AppError::not_found("Historia clinica", record.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM medical_records WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Appointments filed under the record keep existing with a NULL reference.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM medical_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Historia clinica", id));
        }

        Ok(())
    }
}
