//! Medical Record API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_create_record_embeds_patient() {
    let app = TestApp::new();
    let patient = app.create_patient().await;

    let response = app
        .server
        .post("/api/historias-clinicas")
        .json(&json!({
            "paciente": { "id": patient },
            "antecedentes": "Hipertension",
            "cirugias": "Apendicectomia 2010"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["paciente"]["id"], patient);
    assert_eq!(json["antecedentes"], "Hipertension");
}

#[tokio::test]
async fn test_second_record_for_patient_conflicts() {
    let app = TestApp::new();
    let patient = app.create_patient().await;
    let body = json!({ "paciente": { "id": patient } });
    app.create("/api/historias-clinicas", body.clone()).await;

    let response = app.server.post("/api/historias-clinicas").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(app.store.medical_record_count(), 1);
}

#[tokio::test]
async fn test_record_for_unknown_patient_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/historias-clinicas")
        .json(&json!({ "paciente": { "id": 77 } }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.store.medical_record_count(), 0);
}

#[tokio::test]
async fn test_deleting_record_cascades_to_its_appointments() {
    let app = TestApp::new();
    let patient = app.create_patient().await;
    let dentist = app.create_dentist().await;
    let kind = app.create_appointment_type().await;
    let record = app
        .create("/api/historias-clinicas", json!({ "paciente": { "id": patient } }))
        .await;
    let filed = app
        .create(
            "/api/citas",
            json!({
                "paciente": { "id": patient },
                "odontologo": { "id": dentist },
                "tipoCita": { "id": kind },
                "historiaClinica": { "id": record },
                "fecha": "2025-06-02",
                "hora": "09:15"
            }),
        )
        .await;
    let unfiled = app
        .create(
            "/api/citas",
            json!({
                "paciente": { "id": patient },
                "odontologo": { "id": dentist },
                "tipoCita": { "id": kind },
                "fecha": "2025-06-09",
                "hora": "09:15"
            }),
        )
        .await;

    app.server
        .delete(&format!("/api/historias-clinicas/{}", record))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/api/citas/{}", filed))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get(&format!("/api/citas/{}", unfiled))
        .await
        .assert_status_ok();
    assert_eq!(app.store.appointment_count(), 1);
}
