//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PatientService**: Patient CRUD
//! - **DentistService**: Dentist CRUD
//! - **AppointmentTypeService**: Appointment type CRUD
//! - **AppointmentService**: Appointments with patient, dentist and type resolution
//! - **MedicalRecordService**: One clinical history per patient
//! - **RoleService**: Role CRUD
//! - **UserService**: Staff accounts, password hashing and status toggle

pub mod patient_service;
pub mod dentist_service;
pub mod appointment_type_service;
pub mod appointment_service;
pub mod medical_record_service;
pub mod role_service;
pub mod user_service;

pub use patient_service::{PatientService, PatientServiceImpl};
pub use dentist_service::{DentistService, DentistServiceImpl};
pub use appointment_type_service::{AppointmentTypeService, AppointmentTypeServiceImpl};
pub use appointment_service::{AppointmentService, AppointmentServiceImpl};
pub use medical_record_service::{MedicalRecordService, MedicalRecordServiceImpl};
pub use role_service::{RoleService, RoleServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
