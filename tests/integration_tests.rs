//! Integration Tests Entry Point
//!
//! Tests are organized by module:
//! - `api/` - REST API endpoint tests
//! - `common/` - In-memory store and test application

mod api;
mod common;
