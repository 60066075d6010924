//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    match metrics::gather_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Resource routes under `/api`
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/citas", appointment_routes())
        .nest("/pacientes", patient_routes())
        .nest("/odontologos", dentist_routes())
        .nest("/historias-clinicas", medical_record_routes())
        .nest("/roles", role_routes())
        .nest("/tipos-cita", appointment_type_routes())
        .nest("/usuarios", user_routes())
}

fn appointment_routes() -> Router<AppState> {
    use handlers::appointment::*;

    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route(
            "/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}

fn patient_routes() -> Router<AppState> {
    use handlers::patient::*;

    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route(
            "/{id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
}

fn dentist_routes() -> Router<AppState> {
    use handlers::dentist::*;

    Router::new()
        .route("/", get(list_dentists).post(create_dentist))
        .route(
            "/{id}",
            get(get_dentist).put(update_dentist).delete(delete_dentist),
        )
}

fn medical_record_routes() -> Router<AppState> {
    use handlers::medical_record::*;

    Router::new()
        .route("/", get(list_medical_records).post(create_medical_record))
        .route(
            "/{id}",
            get(get_medical_record)
                .put(update_medical_record)
                .delete(delete_medical_record),
        )
}

fn role_routes() -> Router<AppState> {
    use handlers::role::*;

    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/{id}", get(get_role).put(update_role).delete(delete_role))
}

fn appointment_type_routes() -> Router<AppState> {
    use handlers::appointment_type::*;

    Router::new()
        .route("/", get(list_appointment_types).post(create_appointment_type))
        .route(
            "/{id}",
            get(get_appointment_type)
                .put(update_appointment_type)
                .delete(delete_appointment_type),
        )
}

/// User routes, including the account status toggle
fn user_routes() -> Router<AppState> {
    use handlers::user::*;

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/estado", put(update_user_status))
}
