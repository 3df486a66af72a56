//! Integration tests for registration and the session flow.

mod common;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_and_login() {
    let app = common::TestApp::new().await;

    app.register("Franky", "Rossi", "3401234567", "franky@example.com")
        .await;

    let cookie = app.login("franky@example.com", "password1").await;
    let response = app.request("GET", "/api/user", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAuth"], true);
    assert_eq!(response.body["user"]["name"], "Franky");
    assert_eq!(response.body["user"]["surname"], "Rossi");
    assert_eq!(response.body["user"]["phoneNumber"], "3401234567");
    assert_eq!(response.body["user"]["email"], "franky@example.com");
    assert_eq!(response.body["user"]["role"], "customer");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new().await;
    app.register("Mauro", "Verdi", "3401111111", "mauro@example.com")
        .await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Maurizio",
                "surname": "Neri",
                "phoneNumber": "3402222222",
                "email": "mauro@example.com",
                "password": "password1",
                "confirmPassword": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "Email già registrata");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_duplicate_phone_and_name() {
    let app = common::TestApp::new().await;
    app.register("Luca", "Blu", "3403333333", "luca@example.com")
        .await;

    let phone_dup = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Lucio",
                "surname": "Gialli",
                "phoneNumber": "3403333333",
                "email": "lucio@example.com",
                "password": "password1",
                "confirmPassword": "password1",
            })),
            None,
        )
        .await;
    assert_eq!(phone_dup.status, StatusCode::CONFLICT);
    assert_eq!(phone_dup.body["message"], "Numero di telefono già in uso");

    let name_dup = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Luca",
                "surname": "Blu",
                "phoneNumber": "3404444444",
                "email": "luca2@example.com",
                "password": "password1",
                "confirmPassword": "password1",
            })),
            None,
        )
        .await;
    assert_eq!(name_dup.status, StatusCode::CONFLICT);
    assert_eq!(name_dup.body["message"], "Nome e cognome già in uso");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_register_invalid_phone() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Gina",
                "surname": "Viola",
                "phoneNumber": "1234567890",
                "email": "gina@example.com",
                "password": "password1",
                "confirmPassword": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["phone_number"].is_string());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;
    app.register("Paolo", "Gialli", "3405555555", "paolo@example.com")
        .await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "paolo@example.com",
                "password": "wrong",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Credenziali non valide");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_unknown_email_same_error() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "whatever",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Credenziali non valide");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_anonymous_current_user() {
    let app = common::TestApp::new().await;

    let response = app.request("GET", "/api/user", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAuth"], false);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_logout_destroys_session() {
    let app = common::TestApp::new().await;
    let cookie = app
        .register("Sara", "Neri", "3406666666", "sara@example.com")
        .await;

    let response = app
        .request("POST", "/api/logout", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = app.request("GET", "/api/user", None, Some(&cookie)).await;
    assert_eq!(after.body["isAuth"], false);
}
