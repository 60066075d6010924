//! Role and User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_create_user_never_returns_password() {
    let app = TestApp::new();
    let role = app.create_role("RECEPCION").await;

    let response = app
        .server
        .post("/api/usuarios")
        .json(&json!({
            "nombres": "Marta",
            "email": "marta.rios@clinica.test",
            "password": "s3creta-larga",
            "rol": { "id": role }
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["username"], "marta.rios");
    assert_eq!(json["activo"], true);
    assert_eq!(json["rol"]["nombre"], "RECEPCION");
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());

    let id = json["id"].as_i64().unwrap();
    let stored = app.store.stored_user(id).unwrap();
    assert!(stored.password_hash.starts_with("$argon2"));
    assert_ne!(stored.password_hash, "s3creta-larga");
}

#[tokio::test]
async fn test_create_user_without_role_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/usuarios")
        .json(&json!({ "username": "sinrol" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_duplicate_role_name_conflicts() {
    let app = TestApp::new();
    app.create_role("ADMIN").await;

    let response = app
        .server
        .post("/api/roles")
        .json(&json!({ "nombre": "ADMIN" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_status_toggle_changes_only_active_flag() {
    let app = TestApp::new();
    let role = app.create_role("ODONTOLOGO").await;
    let id = app
        .create(
            "/api/usuarios",
            json!({
                "nombres": "Luis",
                "apellidos": "Paz",
                "username": "lpaz",
                "rol": { "id": role }
            }),
        )
        .await;
    let hash_before = app.store.stored_user(id).unwrap().password_hash;

    let response = app
        .server
        .put(&format!("/api/usuarios/{}/estado", id))
        .json(&json!({ "activo": false }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["activo"], false);
    assert_eq!(json["nombres"], "Luis");
    assert_eq!(json["username"], "lpaz");
    assert_eq!(json["rol"]["id"], role);
    assert_eq!(app.store.stored_user(id).unwrap().password_hash, hash_before);
}

#[tokio::test]
async fn test_status_toggle_without_flag_is_bad_request() {
    let app = TestApp::new();
    let role = app.create_role("ODONTOLOGO").await;
    let id = app
        .create(
            "/api/usuarios",
            json!({ "username": "lpaz", "rol": { "id": role } }),
        )
        .await;

    let response = app
        .server
        .put(&format!("/api/usuarios/{}/estado", id))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.store.stored_user(id).unwrap().active);
}

#[tokio::test]
async fn test_delete_user_then_get_is_not_found() {
    let app = TestApp::new();
    let role = app.create_role("RECEPCION").await;
    let id = app
        .create("/api/usuarios", json!({ "username": "temporal", "rol": { "id": role } }))
        .await;

    app.server
        .delete(&format!("/api/usuarios/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/usuarios/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("Usuario no encontrado con ID: {}", id)
    );
    app.server
        .get(&format!("/api/roles/{}", role))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_deleting_role_cascades_to_users() {
    let app = TestApp::new();
    let role = app.create_role("TEMPORAL").await;
    let first = app
        .create("/api/usuarios", json!({ "username": "uno", "rol": { "id": role } }))
        .await;
    let second = app
        .create("/api/usuarios", json!({ "username": "dos", "rol": { "id": role } }))
        .await;

    app.server
        .delete(&format!("/api/roles/{}", role))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    for id in [first, second] {
        app.server
            .get(&format!("/api/usuarios/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_rename_role() {
    let app = TestApp::new();
    let role = app.create_role("AUXILIAR").await;

    let response = app
        .server
        .put(&format!("/api/roles/{}", role))
        .json(&json!({ "nombre": "ASISTENTE" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["nombre"], "ASISTENTE");
}
