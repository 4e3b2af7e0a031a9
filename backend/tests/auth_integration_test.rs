//! Integration tests for registration and login

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success() {
    let app = common::TestApp::new().await;

    let email = common::unique_email("register");
    let body = json!({
        "email": email,
        "password": "p",
        "nombre": "N",
        "apellido": "A",
        "especialidad": "Oncología",
        "registro_medico": "RM-1234",
        "telefono": "555-0100"
    });

    let (status, response) = app.post("/api/auth/registro", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Usuario registrado exitosamente");
    assert_eq!(app.account_count(&email).await, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new().await;

    let email = common::unique_email("duplicate");
    let body = json!({
        "email": email,
        "password": "p",
        "nombre": "N",
        "apellido": "A"
    });

    // First registration should succeed
    let (status, _) = app.post("/api/auth/registro", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    // Second registration with same email should fail
    let (status, response) = app.post("/api/auth/registro", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("El email ya está registrado"));

    assert_eq!(app.account_count(&email).await, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_email_is_case_sensitive() {
    let app = common::TestApp::new().await;

    let email = common::unique_email("case");
    let body = json!({ "email": email, "password": "p", "nombre": "N", "apellido": "A" });
    let upper = json!({
        "email": email.to_uppercase(),
        "password": "p",
        "nombre": "N",
        "apellido": "A"
    });

    let (status, _) = app.post("/api/auth/registro", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.post("/api/auth/registro", &upper.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({ "email": user.email, "password": user.password });
    let (status, response) = app.post("/api/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["token"].as_str().unwrap().is_empty());
    assert_eq!(response["usuario"]["email"], user.email);
    assert_eq!(response["usuario"]["nombre"], user.nombre);
    assert_eq!(response["usuario"]["apellido"], user.apellido);
    assert!(response["usuario"]["id"].as_i64().unwrap() > 0);
    assert!(response["usuario"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_wrong_password_is_indistinguishable_from_unknown_account() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let wrong_password = json!({ "email": user.email, "password": "WrongPassword123!" });
    let unknown_account = json!({
        "email": common::unique_email("nobody"),
        "password": "WrongPassword123!"
    });

    let (status_wrong, body_wrong) =
        app.post("/api/auth/login", &wrong_password.to_string()).await;
    let (status_unknown, body_unknown) =
        app.post("/api/auth/login", &unknown_account.to_string()).await;

    assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
    assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(body_wrong, body_unknown);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_inactive_account_cannot_login() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    sqlx::query("UPDATE usuarios SET activo = FALSE WHERE email = $1")
        .bind(&user.email)
        .execute(&app.pool)
        .await
        .unwrap();

    let body = json!({ "email": user.email, "password": user.password });
    let (status, response) = app.post("/api/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(response.contains("Credenciales inválidas"));
}
