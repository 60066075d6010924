//! Dentist Repository Implementation
//!
//! PostgreSQL implementation of the DentistRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{Dentist, DentistRepository};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct DentistRow {
    id: i64,
    first_name: String,
    last_name: String,
    license_number: String,
    document_type: Option<String>,
    document: Option<String>,
    birth_date: Option<NaiveDate>,
    gender: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    university: Option<String>,
    graduation_year: Option<i32>,
    years_of_experience: Option<i32>,
    specialties: Option<String>,
    emergency_contact_name: Option<String>,
    emergency_contact_relationship: Option<String>,
    emergency_contact_phone: Option<String>,
    working_days: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DentistRow {
    fn into_dentist(self) -> Dentist {
        Dentist {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            license_number: self.license_number,
            document_type: self.document_type,
            document: self.document,
            birth_date: self.birth_date,
            gender: self.gender,
            email: self.email,
            phone: self.phone,
            address: self.address,
            university: self.university,
            graduation_year: self.graduation_year,
            years_of_experience: self.years_of_experience,
            specialties: self.specialties,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_relationship: self.emergency_contact_relationship,
            emergency_contact_phone: self.emergency_contact_phone,
            working_days: self.working_days,
            start_time: self.start_time,
            end_time: self.end_time,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const COLUMNS: &str = "id, first_name, last_name, license_number, document_type, document, \
     birth_date, gender, email, phone, address, university, graduation_year, \
     years_of_experience, specialties, emergency_contact_name, \
     emergency_contact_relationship, emergency_contact_phone, working_days, start_time, \
     end_time, notes, created_at, updated_at";

/// PostgreSQL dentist repository implementation.
#[derive(Clone)]
pub struct PgDentistRepository {
    pool: PgPool,
}

impl PgDentistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DentistRepository for PgDentistRepository {
    async fn find_all(&self) -> Result<Vec<Dentist>, AppError> {
        let rows = sqlx::query_as::<_, DentistRow>(&format!(
            "SELECT {} FROM dentists ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_dentist()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dentist>, AppError> {
        let row = sqlx::query_as::<_, DentistRow>(&format!(
            "SELECT {} FROM dentists WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_dentist()))
    }

    async fn save(&self, dentist: &Dentist) -> Result<Dentist, AppError> {
        let sql = if dentist.id == 0 {
            format!(
                r#"
                INSERT INTO dentists (
                    first_name, last_name, license_number, document_type, document,
                    birth_date, gender, email, phone, address, university, graduation_year,
                    years_of_experience, specialties, emergency_contact_name,
                    emergency_contact_relationship, emergency_contact_phone, working_days,
                    start_time, end_time, notes
                )
                VALUES ($2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                        $17, $18, $19, $20, $21, $22)
                RETURNING {}
                "#,
                COLUMNS
            )
        } else {
            format!(
                r#"
                UPDATE dentists
                SET first_name = $2, last_name = $3, license_number = $4,
                    document_type = $5, document = $6, birth_date = $7, gender = $8,
                    email = $9, phone = $10, address = $11, university = $12,
                    graduation_year = $13, years_of_experience = $14, specialties = $15,
                    emergency_contact_name = $16, emergency_contact_relationship = $17,
                    emergency_contact_phone = $18, working_days = $19, start_time = $20,
                    end_time = $21, notes = $22, updated_at = NOW()
                WHERE id = $1
                RETURNING {}
                "#,
                COLUMNS
            )
        };

        let row = sqlx::query_as::<_, DentistRow>(&sql)
            .bind(dentist.id)
            .bind(&dentist.first_name)
            .bind(&dentist.last_name)
            .bind(&dentist.license_number)
            .bind(&dentist.document_type)
            .bind(&dentist.document)
            .bind(dentist.birth_date)
            .bind(&dentist.gender)
            .bind(&dentist.email)
            .bind(&dentist.phone)
            .bind(&dentist.address)
            .bind(&dentist.university)
            .bind(dentist.graduation_year)
            .bind(dentist.years_of_experience)
            .bind(&dentist.specialties)
            .bind(&dentist.emergency_contact_name)
            .bind(&dentist.emergency_contact_relationship)
            .bind(&dentist.emergency_contact_phone)
            .bind(&dentist.working_days)
            .bind(&dentist.start_time)
            .bind(&dentist.end_time)
            .bind(&dentist.notes)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(|r| r.into_dentist())
            .ok_or_else(|| AppError::not_found("Odontologo", dentist.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM dentists WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM dentists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Odontologo", id));
        }

        Ok(())
    }
}
