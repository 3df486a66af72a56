//! Integration tests for the order lifecycle.

mod common;

use chrono::{Duration, Utc};
use http::StatusCode;

/// A delivery date comfortably outside the 72-hour edit window.
fn far_future_date() -> String {
    (Utc::now() + Duration::days(10)).format("%Y-%m-%d").to_string()
}

/// A delivery timestamp roughly 70 hours away (inside the window).
fn near_future() -> (String, String) {
    let ts = Utc::now() + Duration::hours(70);
    (ts.format("%Y-%m-%d").to_string(), ts.format("%H:%M").to_string())
}

fn order_body(date: &str, hour: &str) -> serde_json::Value {
    serde_json::json!({
        "quantita": 5.0,
        "tipologia": "consumazione",
        "indirizzo": "Via Roma 1, Torino",
        "data": date,
        "orario": hour,
    })
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_submit_and_list_roundtrip() {
    let app = common::TestApp::new().await;
    let cookie = app
        .register("Franky", "Rossi", "3401234567", "franky@example.com")
        .await;

    let date = far_future_date();
    let submitted = app
        .request(
            "POST",
            "/api/submit-order",
            Some(order_body(&date, "10:30")),
            Some(&cookie),
        )
        .await;

    assert_eq!(submitted.status, StatusCode::OK, "{:?}", submitted.body);
    assert_eq!(submitted.body["data"]["status"], "in attesa");

    let listed = app
        .request("GET", "/api/orders", None, Some(&cookie))
        .await;
    assert_eq!(listed.status, StatusCode::OK);

    let orders = listed.body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["quantity"], 5.0);
    assert_eq!(orders[0]["ice_type"], "consumazione");
    assert_eq!(orders[0]["delivery_address"], "Via Roma 1, Torino");
    assert_eq!(orders[0]["delivery_date"], date);
    assert_eq!(orders[0]["delivery_hour"], "10:30");
    assert_eq!(orders[0]["status"], "in attesa");
    assert!(orders[0]["request_date"].is_string());
    assert!(orders[0]["request_hour"].is_string());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_submit_rejects_non_positive_quantity() {
    let app = common::TestApp::new().await;
    let cookie = app
        .register("Mauro", "Verdi", "3402222222", "mauro@example.com")
        .await;

    for quantity in [0.0, -2.0] {
        let mut body = order_body(&far_future_date(), "10:30");
        body["quantita"] = serde_json::json!(quantity);

        let response = app
            .request("POST", "/api/submit-order", Some(body), Some(&cookie))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.body["details"]["quantita"].is_string());
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_guest_submit_requires_contact_with_valid_phone() {
    let app = common::TestApp::new().await;

    let missing = app
        .request(
            "POST",
            "/api/submit-order",
            Some(order_body(&far_future_date(), "10:30")),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    for field in ["nome", "cognome", "telefono"] {
        assert!(missing.body["details"][field].is_string(), "{field}");
    }

    let mut bad_phone = order_body(&far_future_date(), "10:30");
    bad_phone["nome"] = serde_json::json!("Gino");
    bad_phone["cognome"] = serde_json::json!("Blu");
    bad_phone["telefono"] = serde_json::json!("1234567890");
    let response = app
        .request("POST", "/api/submit-order", Some(bad_phone), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["telefono"].is_string());

    let mut ok = order_body(&far_future_date(), "10:30");
    ok["nome"] = serde_json::json!("Gino");
    ok["cognome"] = serde_json::json!("Blu");
    ok["telefono"] = serde_json::json!("3409999999");
    let response = app
        .request("POST", "/api/submit-order", Some(ok), None)
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["contact_phone"], "3409999999");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_guest_submit_matching_phone_attaches_account() {
    let app = common::TestApp::new().await;
    let cookie = app
        .register("Anna", "Bianchi", "3408888888", "anna@example.com")
        .await;

    let mut body = order_body(&far_future_date(), "11:00");
    body["nome"] = serde_json::json!("Anna");
    body["cognome"] = serde_json::json!("Bianchi");
    body["telefono"] = serde_json::json!("3408888888");

    let response = app
        .request("POST", "/api/submit-order", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["user_id"].is_string());

    // The order shows up in the account's own listing.
    let listed = app.request("GET", "/api/orders", None, Some(&cookie)).await;
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_and_cancel_outside_window() {
    let app = common::TestApp::new().await;
    let cookie = app
        .register("Elena", "Gialli", "3407777777", "elena@example.com")
        .await;

    let date = far_future_date();
    let submitted = app
        .request(
            "POST",
            "/api/submit-order",
            Some(order_body(&date, "10:30")),
            Some(&cookie),
        )
        .await;
    let order_id = submitted.body["data"]["id"].as_str().unwrap().to_string();

    let mut update = order_body(&date, "12:00");
    update["quantita"] = serde_json::json!(8.0);
    let updated = app
        .request(
            "PUT",
            &format!("/api/update-order/{order_id}"),
            Some(update),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.body["data"]["quantity"], 8.0);
    assert_eq!(updated.body["data"]["delivery_hour"], "12:00");

    let cancelled = app
        .request(
            "PUT",
            &format!("/api/delete-order/{order_id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.body["data"]["status"], "cancellato");

    // Cancelled orders are hidden from the default listing.
    let listed = app.request("GET", "/api/orders", None, Some(&cookie)).await;
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 0);

    let with_cancelled = app
        .request(
            "GET",
            "/api/orders?include_cancelled=true",
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(with_cancelled.body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_and_cancel_inside_window_rejected() {
    let app = common::TestApp::new().await;
    let cookie = app
        .register("Carlo", "Neri", "3406666666", "carlo@example.com")
        .await;

    let (date, hour) = near_future();
    let submitted = app
        .request(
            "POST",
            "/api/submit-order",
            Some(order_body(&date, &hour)),
            Some(&cookie),
        )
        .await;
    assert_eq!(submitted.status, StatusCode::OK, "{:?}", submitted.body);
    let order_id = submitted.body["data"]["id"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/update-order/{order_id}"),
            Some(order_body(&far_future_date(), "12:00")),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::BAD_REQUEST);

    let cancelled = app
        .request(
            "PUT",
            &format!("/api/delete-order/{order_id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_cannot_touch_another_users_order() {
    let app = common::TestApp::new().await;
    let owner = app
        .register("Piera", "Blu", "3405555555", "piera@example.com")
        .await;
    let intruder = app
        .register("Ugo", "Verdi", "3404444444", "ugo@example.com")
        .await;

    let submitted = app
        .request(
            "POST",
            "/api/submit-order",
            Some(order_body(&far_future_date(), "10:30")),
            Some(&owner),
        )
        .await;
    let order_id = submitted.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/delete-order/{order_id}"),
            None,
            Some(&intruder),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
