//! # Domain Entities
//!
//! Persisted records of the dental clinic. All entities map directly to their
//! corresponding database tables and carry storage-assigned `i64` ids.
//!
//! ## Clinical Entities
//!
//! - **Patient**: Identity, contact, emergency contact and medical notes
//! - **Dentist**: Identity, license, professional and availability data
//! - **AppointmentType**: Kind of visit
//! - **Appointment**: A patient's visit to a dentist
//! - **MedicalRecord**: A patient's clinical history (one per patient)
//!
//! ## Access Entities
//!
//! - **Role**: Named group of users
//! - **User**: Staff account
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait with the same five
//! operations: `find_all`, `find_by_id`, `save`, `exists_by_id`, `delete_by_id`.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod patient;
mod dentist;
mod appointment_type;
mod appointment;
mod medical_record;
mod role;
mod user;

pub use patient::{Patient, PatientRepository};
pub use dentist::{Dentist, DentistRepository};
pub use appointment_type::{AppointmentType, AppointmentTypeRepository};
pub use appointment::{Appointment, AppointmentRepository};
pub use medical_record::{MedicalRecord, MedicalRecordRepository};
pub use role::{Role, RoleRepository};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use patient::MockPatientRepository;
#[cfg(test)]
pub use dentist::MockDentistRepository;
#[cfg(test)]
pub use appointment_type::MockAppointmentTypeRepository;
#[cfg(test)]
pub use appointment::MockAppointmentRepository;
#[cfg(test)]
pub use medical_record::MockMedicalRecordRepository;
#[cfg(test)]
pub use role::MockRoleRepository;
#[cfg(test)]
pub use user::MockUserRepository;
