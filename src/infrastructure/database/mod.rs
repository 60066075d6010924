//! Database Module
//!
//! PostgreSQL connection pool, migrations, storage error mapping and the
//! readiness probe.

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Translate a write failure into the matching application error.
///
/// Constraint violations are client errors; anything else stays a
/// database error and is only logged.
pub fn map_db_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown").to_string();
        match db_err.kind() {
            ErrorKind::UniqueViolation => {
                return AppError::Conflict(format!("Valor duplicado ({})", constraint));
            }
            ErrorKind::ForeignKeyViolation => {
                return AppError::NotFound(format!(
                    "Registro relacionado no encontrado ({})",
                    constraint
                ));
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                return AppError::Validation(db_err.message().to_string());
            }
            _ => {}
        }
    }

    AppError::Database(err)
}

/// Readiness check for the backing store.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Ok when the store answers a trivial query.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Pings PostgreSQL and refreshes the pool gauges.
#[derive(Clone)]
pub struct PgHealthProbe {
    pool: PgPool,
}

impl PgHealthProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for PgHealthProbe {
    async fn ping(&self) -> Result<(), AppError> {
        let size = self.pool.size();
        let idle = self.pool.num_idle() as u32;
        let max = self.pool.options().get_max_connections();
        metrics::update_db_pool_stats(idle, size.saturating_sub(idle), max);

        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
