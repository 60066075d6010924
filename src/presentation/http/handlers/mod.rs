//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod patient;
pub mod dentist;
pub mod appointment_type;
pub mod appointment;
pub mod medical_record;
pub mod role;
pub mod user;
