//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::{User, UserRepository};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

/// Database row representation for users
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_names: Option<String>,
    last_names: Option<String>,
    document_type: Option<String>,
    document: Option<String>,
    birth_date: Option<NaiveDate>,
    gender: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    username: String,
    password_hash: String,
    active: bool,
    role_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_names: row.first_names,
            last_names: row.last_names,
            document_type: row.document_type,
            document: row.document,
            birth_date: row.birth_date,
            gender: row.gender,
            email: row.email,
            phone: row.phone,
            address: row.address,
            username: row.username,
            password_hash: row.password_hash,
            active: row.active,
            role_id: row.role_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str = "id, first_names, last_names, document_type, document, birth_date, \
     gender, email, phone, address, username, password_hash, active, role_id, created_at, \
     updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn save(&self, user: &User) -> Result<User, AppError> {
        let sql = if user.id == 0 {
            format!(
                r#"
                INSERT INTO users (
                    first_names, last_names, document_type, document, birth_date, gender,
                    email, phone, address, username, password_hash, active, role_id
                )
                VALUES ($2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                RETURNING {}
                "#,
                COLUMNS
            )
        } else {
            format!(
                r#"
                UPDATE users
                SET first_names = $2, last_names = $3, document_type = $4, document = $5,
                    birth_date = $6, gender = $7, email = $8, phone = $9, address = $10,
                    username = $11, password_hash = $12, active = $13, role_id = $14,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {}
                "#,
                COLUMNS
            )
        };

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.id)
            .bind(&user.first_names)
            .bind(&user.last_names)
            .bind(&user.document_type)
            .bind(&user.document)
            .bind(user.birth_date)
            .bind(&user.gender)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.address)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.active)
            .bind(user.role_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(User::from)
            .ok_or_else(|| AppError::not_found("Usuario", user.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Usuario", id));
        }

        Ok(())
    }
}
