//! Appointment API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

struct Parties {
    patient: i64,
    dentist: i64,
    kind: i64,
}

async fn parties(app: &TestApp) -> Parties {
    Parties {
        patient: app.create_patient().await,
        dentist: app.create_dentist().await,
        kind: app.create_appointment_type().await,
    }
}

fn appointment_body(p: &Parties) -> Value {
    json!({
        "paciente": { "id": p.patient },
        "odontologo": { "id": p.dentist },
        "tipoCita": { "id": p.kind },
        "fecha": "2025-03-14",
        "hora": "10:30",
        "observaciones": "Primera visita"
    })
}

#[tokio::test]
async fn test_create_appointment_embeds_relations() {
    let app = TestApp::new();
    let p = parties(&app).await;

    let response = app
        .server
        .post("/api/citas")
        .json(&appointment_body(&p))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["paciente"]["id"], p.patient);
    assert_eq!(json["odontologo"]["id"], p.dentist);
    assert_eq!(json["tipoCita"]["id"], p.kind);
    assert_eq!(json["tipoCita"]["nombre"], "Limpieza");
    assert_eq!(json["historiaClinica"], Value::Null);
    assert_eq!(json["fecha"], "2025-03-14");
    assert_eq!(json["hora"], "10:30");
    assert_eq!(json["estado"], "PENDIENTE");
}

#[tokio::test]
async fn test_get_appointment_matches_created() {
    let app = TestApp::new();
    let p = parties(&app).await;
    let id = app.create("/api/citas", appointment_body(&p)).await;

    let response = app.server.get(&format!("/api/citas/{}", id)).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["hora"], "10:30");
    assert_eq!(json["observaciones"], "Primera visita");
    assert_eq!(json["paciente"]["id"], p.patient);
}

#[tokio::test]
async fn test_unknown_dentist_is_not_found_and_stores_nothing() {
    let app = TestApp::new();
    let mut p = parties(&app).await;
    p.dentist = 9999;

    let response = app
        .server
        .post("/api/citas")
        .json(&appointment_body(&p))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Odontologo no encontrado con ID: 9999"
    );
    assert_eq!(app.store.appointment_count(), 0);
}

#[tokio::test]
async fn test_missing_patient_is_bad_request() {
    let app = TestApp::new();
    let p = parties(&app).await;
    let mut body = appointment_body(&p);
    body.as_object_mut().unwrap().remove("paciente");

    let response = app.server.post("/api/citas").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.store.appointment_count(), 0);
}

#[tokio::test]
async fn test_invalid_time_is_bad_request() {
    let app = TestApp::new();
    let p = parties(&app).await;
    let mut body = appointment_body(&p);
    body["hora"] = json!("half past ten");

    let response = app.server.post("/api/citas").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_status_keeps_relations() {
    let app = TestApp::new();
    let p = parties(&app).await;
    let id = app.create("/api/citas", appointment_body(&p)).await;

    let response = app
        .server
        .put(&format!("/api/citas/{}", id))
        .json(&json!({ "estado": "CONFIRMADA", "hora": "11:00" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["estado"], "CONFIRMADA");
    assert_eq!(json["hora"], "11:00");
    assert_eq!(json["paciente"]["id"], p.patient);
    assert_eq!(json["fecha"], "2025-03-14");
}

#[tokio::test]
async fn test_deleting_patient_cascades_to_appointments() {
    let app = TestApp::new();
    let p = parties(&app).await;
    let id = app.create("/api/citas", appointment_body(&p)).await;

    app.server
        .delete(&format!("/api/pacientes/{}", p.patient))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/api/citas/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.store.appointment_count(), 0);
}

#[tokio::test]
async fn test_deleting_appointment_type_cascades_to_appointments() {
    let app = TestApp::new();
    let p = parties(&app).await;
    app.create("/api/citas", appointment_body(&p)).await;

    app.server
        .delete(&format!("/api/tipos-cita/{}", p.kind))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let list = app.server.get("/api/citas").await;
    list.assert_status_ok();
    assert!(list.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_list_appointments_embeds_relations() {
    let app = TestApp::new();
    let p = parties(&app).await;
    app.create("/api/citas", appointment_body(&p)).await;
    app.create("/api/citas", appointment_body(&p)).await;

    let response = app.server.get("/api/citas").await;

    response.assert_status_ok();
    let list = response.json::<Vec<Value>>();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|a| a["odontologo"]["id"] == p.dentist));
}

#[tokio::test]
async fn test_status_is_accepted_in_any_case() {
    let app = TestApp::new();
    let p = parties(&app).await;
    let mut body = appointment_body(&p);
    body["estado"] = json!("confirmada");
    let id = app.create("/api/citas", body).await;

    let response = app
        .server
        .put(&format!("/api/citas/{}", id))
        .json(&json!({ "estado": "cancelled" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["estado"], "CANCELADA");
}
