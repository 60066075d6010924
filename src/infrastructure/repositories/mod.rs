//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! Each repository handles data access for one table. Writes map
//! constraint violations through [`map_db_error`](crate::infrastructure::database::map_db_error);
//! cascades are enforced by the foreign keys declared in `migrations/`.
//!
//! ## Available Repositories
//!
//! - **PgPatientRepository** - `patients`
//! - **PgDentistRepository** - `dentists`
//! - **PgAppointmentTypeRepository** - `appointment_types`
//! - **PgAppointmentRepository** - `appointments`
//! - **PgMedicalRecordRepository** - `medical_records`
//! - **PgRoleRepository** - `roles`
//! - **PgUserRepository** - `users`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgPatientRepository, PgRoleRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let patient_repo = PgPatientRepository::new(pool.clone());
//!     let role_repo = PgRoleRepository::new(pool.clone());
//! }
//! ```

pub mod patient_repository;
pub mod dentist_repository;
pub mod appointment_type_repository;
pub mod appointment_repository;
pub mod medical_record_repository;
pub mod role_repository;
pub mod user_repository;

pub use patient_repository::PgPatientRepository;
pub use dentist_repository::PgDentistRepository;
pub use appointment_type_repository::PgAppointmentTypeRepository;
pub use appointment_repository::PgAppointmentRepository;
pub use medical_record_repository::PgMedicalRecordRepository;
pub use role_repository::PgRoleRepository;
pub use user_repository::PgUserRepository;
