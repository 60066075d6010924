//! # Domain Layer
//!
//! The domain layer contains the core records of the dental clinic.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Persisted records (Patient, Dentist, Appointment, ...) and
//!   their repository traits
//! - **value_objects**: Immutable value types (AppointmentStatus)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Relations are held as foreign-key ids and resolved by services

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
