//! Role Repository Implementation
//!
//! PostgreSQL implementation of the RoleRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Role, RoleRepository};
use crate::infrastructure::database::map_db_error;
use crate::shared::error::AppError;

/// Database row representation matching the roles table schema.
#[derive(Debug, sqlx::FromRow)]
struct RoleRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RoleRow {
    /// Convert database row to domain Role entity.
    fn into_role(self) -> Role {
        Role {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL role repository implementation.
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn find_all(&self) -> Result<Vec<Role>, AppError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM roles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_role()).collect())
    }

    /// Find a role by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, AppError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_role()))
    }

    async fn save(&self, role: &Role) -> Result<Role, AppError> {
        let row = if role.id == 0 {
            sqlx::query_as::<_, RoleRow>(
                r#"
                INSERT INTO roles (name)
                VALUES ($1)
                RETURNING id, name, created_at, updated_at
                "#,
            )
            .bind(&role.name)
            .fetch_optional(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, RoleRow>(
                r#"
                UPDATE roles
                SET name = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, created_at, updated_at
                "#,
            )
            .bind(role.id)
            .bind(&role.name)
            .fetch_optional(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        row.map(|r| r.into_role())
            .ok_or_else(|| AppError::not_found("Rol", role.id))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM roles WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Users holding the role are removed by the cascade.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Rol", id));
        }

        Ok(())
    }
}
