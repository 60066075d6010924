//! Patient API Tests

use axum::body::Bytes;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{patient_body, unique_digits, TestApp};

#[tokio::test]
async fn test_create_then_get_returns_same_values() {
    let app = TestApp::new();
    let body = patient_body();

    let created = app.server.post("/api/pacientes").json(&body).await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let fetched = app.server.get(&format!("/api/pacientes/{}", id)).await;
    fetched.assert_status_ok();
    let json = fetched.json::<Value>();

    assert_eq!(json["id"], id);
    for field in ["nombre", "apellido", "documento", "fechaNacimiento", "correo", "alergias"] {
        assert_eq!(json[field], body[field], "field {}", field);
    }
}

#[tokio::test]
async fn test_minimal_patient_is_accepted() {
    let app = TestApp::new();
    let document = unique_digits();

    let response = app
        .server
        .post("/api/pacientes")
        .json(&json!({ "nombre": "Ana", "documento": document }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["nombre"], "Ana");
    assert_eq!(json["documento"], document);
    assert_eq!(json["correo"], Value::Null);
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/pacientes")
        .json(&json!({ "nombre": "", "documento": unique_digits() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.store.patient_count(), 0);
}

#[tokio::test]
async fn test_every_invalid_field_is_reported() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/pacientes")
        .json(&json!({
            "nombre": "",
            "documento": unique_digits(),
            "correo": "not-an-email"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["code"], 10007);
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
    assert_eq!(app.store.patient_count(), 0);
}

#[tokio::test]
async fn test_duplicate_document_conflicts_and_stores_nothing() {
    let app = TestApp::new();
    let first = patient_body();
    app.create("/api/pacientes", first.clone()).await;

    let mut second = patient_body();
    second["documento"] = first["documento"].clone();
    let response = app.server.post("/api/pacientes").json(&second).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(app.store.patient_count(), 1);
}

#[tokio::test]
async fn test_duplicate_email_conflicts_and_stores_nothing() {
    let app = TestApp::new();
    let first = patient_body();
    app.create("/api/pacientes", first.clone()).await;

    let mut second = patient_body();
    second["correo"] = first["correo"].clone();
    let response = app.server.post("/api/pacientes").json(&second).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(app.store.patient_count(), 1);
}

#[tokio::test]
async fn test_list_returns_every_patient() {
    let app = TestApp::new();
    app.create_patient().await;
    app.create_patient().await;

    let response = app.server.get("/api/pacientes").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 2);
}

#[tokio::test]
async fn test_update_keeps_fields_not_supplied() {
    let app = TestApp::new();
    let body = patient_body();
    let id = app.create("/api/pacientes", body.clone()).await;

    let response = app
        .server
        .put(&format!("/api/pacientes/{}", id))
        .json(&json!({ "telefono": "3109998877", "apellido": null }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["telefono"], "3109998877");
    assert_eq!(json["apellido"], body["apellido"]);
    assert_eq!(json["documento"], body["documento"]);
}

#[tokio::test]
async fn test_update_unknown_patient_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/pacientes/999")
        .json(&json!({ "nombre": "Nadie" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.store.patient_count(), 0);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    let id = app.create_patient().await;

    app.server
        .delete(&format!("/api/pacientes/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/pacientes/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("Paciente no encontrado con ID: {}", id)
    );
}

#[tokio::test]
async fn test_delete_unknown_patient_is_not_found() {
    let app = TestApp::new();

    app.server
        .delete("/api/pacientes/4242")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.get("/api/pacientes/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "ID invalido: abc");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/pacientes")
        .bytes(Bytes::from_static(b"{ \"nombre\": "))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.store.patient_count(), 0);
}
