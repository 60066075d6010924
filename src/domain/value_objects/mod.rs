//! Value Objects
//!
//! Immutable value types shared by entities.

mod appointment_status;

pub use appointment_status::AppointmentStatus;
