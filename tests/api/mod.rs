//! REST API endpoint tests

mod appointment_tests;
mod dentist_tests;
mod health_tests;
mod medical_record_tests;
mod patient_tests;
mod role_user_tests;
