//! Appointment Repository Implementation
//!
//! PostgreSQL implementation of the AppointmentRepository trait. The status
//! is stored as text (`PENDIENTE`, `CONFIRMADA`, `CANCELADA`).

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;

use crate::domain::{Appointment, AppointmentRepository, AppointmentStatus};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    dentist_id: i64,
    appointment_type_id: i64,
    medical_record_id: Option<i64>,
    date: NaiveDate,
    time: NaiveTime,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AppointmentRow {
    fn into_appointment(self) -> Result<Appointment, AppError> {
        let status = AppointmentStatus::parse(&self.status).ok_or_else(|| {
            AppError::Internal(format!(
                "Unknown appointment status '{}' on appointment {}",
                self.status, self.id
            ))
        })?;

        Ok(Appointment {
            id: self.id,
            patient_id: self.patient_id,
            dentist_id: self.dentist_id,
            appointment_type_id: self.appointment_type_id,
            medical_record_id: self.medical_record_id,
            date: self.date,
            time: self.time,
            status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const COLUMNS: &str = "id, patient_id, dentist_id, appointment_type_id, medical_record_id, \
     date, time, status, notes, created_at, updated_at";

/// PostgreSQL appointment repository implementation.
#[derive(Clone)]
pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn find_all(&self) -> Result<Vec<Appointment>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {} FROM appointments ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_appointment()).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(&format!(
            "SELECT {} FROM appointments WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_appointment()).transpose()
    }

    async fn save(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let sql = if appointment.id == 0 {
            format!(
                r#"
                INSERT INTO appointments (
                    patient_id, dentist_id, appointment_type_id, medical_record_id,
                    date, time, status, notes
                )
                VALUES ($2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {}
                "#,
                COLUMNS
            )
        } else {
            format!(
                r#"
                UPDATE appointments
                SET patient_id = $2, dentist_id = $3, appointment_type_id = $4,
                    medical_record_id = $5, date = $6, time = $7, status = $8,
                    notes = $9, updated_at = NOW()
                WHERE id = $1
                RETURNING {}
                "#,
                COLUMNS
            )
        };

        let row = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(appointment.id)
            .bind(appointment.patient_id)
            .bind(appointment.dentist_id)
            .bind(appointment.appointment_type_id)
            .bind(appointment.medical_record_id)
            .bind(appointment.date)
            .bind(appointment.time)
            .bind(appointment.status.as_str())
            .bind(&appointment.notes)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(|r| r.into_appointment())
            .transpose()?
            .ok_or_else(|| AppError::not_found("Cita", appointment.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM appointments WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Cita", id));
        }

        Ok(())
    }
}
