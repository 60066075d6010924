//! Dentist API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{dentist_body, TestApp};

#[tokio::test]
async fn test_create_then_get_returns_same_values() {
    let app = TestApp::new();
    let body = dentist_body();
    let id = app.create("/api/odontologos", body.clone()).await;

    let response = app.server.get(&format!("/api/odontologos/{}", id)).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], id);
    for field in ["nombre", "apellido", "matricula", "especialidades", "horaInicio", "horaFin"] {
        assert_eq!(json[field], body[field], "field {}", field);
    }
}

#[tokio::test]
async fn test_duplicate_license_conflicts_and_stores_nothing() {
    let app = TestApp::new();
    let first = dentist_body();
    app.create("/api/odontologos", first.clone()).await;

    let mut second = dentist_body();
    second["matricula"] = first["matricula"].clone();
    let response = app.server.post("/api/odontologos").json(&second).await;

    response.assert_status(StatusCode::CONFLICT);
    let list = app.server.get("/api/odontologos").await;
    assert_eq!(list.json::<Vec<Value>>().len(), 1);
}

#[tokio::test]
async fn test_missing_license_is_bad_request() {
    let app = TestApp::new();
    let mut body = dentist_body();
    body.as_object_mut().unwrap().remove("matricula");

    app.server
        .post("/api/odontologos")
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_keeps_fields_not_supplied() {
    let app = TestApp::new();
    let body = dentist_body();
    let id = app.create("/api/odontologos", body.clone()).await;

    let response = app
        .server
        .put(&format!("/api/odontologos/{}", id))
        .json(&json!({ "universidad": "Universidad Nacional", "experiencia": 12 }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["universidad"], "Universidad Nacional");
    assert_eq!(json["experiencia"], 12);
    assert_eq!(json["matricula"], body["matricula"]);
    assert_eq!(json["nombre"], body["nombre"]);
}

#[tokio::test]
async fn test_update_unknown_dentist_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/odontologos/321")
        .json(&json!({ "nombre": "Nadie" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Odontologo no encontrado con ID: 321"
    );
}

#[tokio::test]
async fn test_deleting_dentist_cascades_to_appointments() {
    let app = TestApp::new();
    let patient = app.create_patient().await;
    let dentist = app.create_dentist().await;
    let kind = app.create_appointment_type().await;
    let appointment = app
        .create(
            "/api/citas",
            json!({
                "paciente": { "id": patient },
                "odontologo": { "id": dentist },
                "tipoCita": { "id": kind },
                "fecha": "2025-04-01",
                "hora": "14:00"
            }),
        )
        .await;

    app.server
        .delete(&format!("/api/odontologos/{}", dentist))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/api/citas/{}", appointment))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get(&format!("/api/odontologos/{}", dentist))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get(&format!("/api/pacientes/{}", patient))
        .await
        .assert_status_ok();
}
