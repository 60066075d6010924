//! # Dental Clinic Library
//!
//! This crate provides the backend of a dental clinic management system:
//! - RESTful HTTP API over patients, dentists, appointments, appointment types,
//!   medical records, users and roles
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Services mapping DTOs to entities and back
//! - **Infrastructure Layer**: PostgreSQL repositories, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! dental_clinic/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database and metrics implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation, time formats)
//! ```

// Configuration module
pub mod config;

// Domain layer - Entities and repository contracts
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
