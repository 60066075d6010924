//! Application Startup
//!
//! Dependency wiring, application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    AppointmentService, AppointmentServiceImpl, AppointmentTypeService,
    AppointmentTypeServiceImpl, DentistService, DentistServiceImpl, MedicalRecordService,
    MedicalRecordServiceImpl, PatientService, PatientServiceImpl, RoleService, RoleServiceImpl,
    UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::domain::{
    AppointmentRepository, AppointmentTypeRepository, DentistRepository, MedicalRecordRepository,
    PatientRepository, RoleRepository, UserRepository,
};
use crate::infrastructure::database::{self, HealthProbe, PgHealthProbe};
use crate::infrastructure::repositories::{
    PgAppointmentRepository, PgAppointmentTypeRepository, PgDentistRepository,
    PgMedicalRecordRepository, PgPatientRepository, PgRoleRepository, PgUserRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// One repository per entity, behind its domain trait.
#[derive(Clone)]
pub struct Repositories {
    pub patients: Arc<dyn PatientRepository>,
    pub dentists: Arc<dyn DentistRepository>,
    pub appointment_types: Arc<dyn AppointmentTypeRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub medical_records: Arc<dyn MedicalRecordRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            patients: Arc::new(PgPatientRepository::new(pool.clone())),
            dentists: Arc::new(PgDentistRepository::new(pool.clone())),
            appointment_types: Arc::new(PgAppointmentTypeRepository::new(pool.clone())),
            appointments: Arc::new(PgAppointmentRepository::new(pool.clone())),
            medical_records: Arc::new(PgMedicalRecordRepository::new(pool.clone())),
            roles: Arc::new(PgRoleRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub patients: Arc<dyn PatientService>,
    pub dentists: Arc<dyn DentistService>,
    pub appointment_types: Arc<dyn AppointmentTypeService>,
    pub appointments: Arc<dyn AppointmentService>,
    pub medical_records: Arc<dyn MedicalRecordService>,
    pub roles: Arc<dyn RoleService>,
    pub users: Arc<dyn UserService>,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Build every service from the given repositories.
    pub fn new(repos: Repositories, health: Arc<dyn HealthProbe>) -> Self {
        Self {
            patients: Arc::new(PatientServiceImpl::new(repos.patients.clone())),
            dentists: Arc::new(DentistServiceImpl::new(repos.dentists.clone())),
            appointment_types: Arc::new(AppointmentTypeServiceImpl::new(
                repos.appointment_types.clone(),
            )),
            appointments: Arc::new(AppointmentServiceImpl::new(
                repos.appointments.clone(),
                repos.patients.clone(),
                repos.dentists.clone(),
                repos.appointment_types.clone(),
                repos.medical_records.clone(),
            )),
            medical_records: Arc::new(MedicalRecordServiceImpl::new(
                repos.medical_records.clone(),
                repos.patients.clone(),
            )),
            roles: Arc::new(RoleServiceImpl::new(repos.roles.clone())),
            users: Arc::new(UserServiceImpl::new(repos.users, repos.roles)),
            health,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let state = AppState::new(
            Repositories::postgres(&db),
            Arc::new(PgHealthProbe::new(db.clone())),
        );

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped (Ctrl+C or SIGTERM)
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
