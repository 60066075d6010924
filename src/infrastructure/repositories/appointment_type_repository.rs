//! Appointment Type Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AppointmentType, AppointmentTypeRepository};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct AppointmentTypeRow {
    id: i64,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AppointmentTypeRow {
    fn into_appointment_type(self) -> AppointmentType {
        AppointmentType {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL appointment type repository implementation.
#[derive(Clone)]
pub struct PgAppointmentTypeRepository {
    pool: PgPool,
}

impl PgAppointmentTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentTypeRepository for PgAppointmentTypeRepository {
    async fn find_all(&self) -> Result<Vec<AppointmentType>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentTypeRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM appointment_types
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_appointment_type()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AppointmentType>, AppError> {
        let row = sqlx::query_as::<_, AppointmentTypeRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM appointment_types
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_appointment_type()))
    }

    async fn save(&self, appointment_type: &AppointmentType) -> Result<AppointmentType, AppError> {
        let row = if appointment_type.id == 0 {
            sqlx::query_as::<_, AppointmentTypeRow>(
                r#"
                INSERT INTO appointment_types (name, description)
                VALUES ($1, $2)
                RETURNING id, name, description, created_at, updated_at
                "#,
            )
            .bind(&appointment_type.name)
            .bind(&appointment_type.description)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, AppointmentTypeRow>(
                r#"
                UPDATE appointment_types
                SET name = $2, description = $3, updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, description, created_at, updated_at
                "#,
            )
            .bind(appointment_type.id)
            .bind(&appointment_type.name)
            .bind(&appointment_type.description)
            .fetch_optional(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        row.map(|r| r.into_appointment_type())
            .ok_or_else(|| AppError::not_found("Tipo de cita", appointment_type.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM appointment_types WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Appointments of this type are removed by the cascade.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointment_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Tipo de cita", id));
        }

        Ok(())
    }
}
