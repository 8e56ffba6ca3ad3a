//! Integration tests for the user service endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

fn unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

async fn register(app: &common::TestApp, email: &str) -> Value {
    let body = json!({
        "email": email,
        "password": "secret123",
        "firstName": "Integration",
        "lastName": "Tester"
    });
    let (status, response) = app.post("/api/users/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED, "{}", response);
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_and_fetch_profile() {
    let app = common::TestApp::users().await;
    let email = unique_email();

    let user = register(&app, &email).await;
    assert_eq!(user["role"], "USER");
    assert!(user.get("password").is_none());

    let id = user["userId"].as_str().unwrap();
    let (status, body) = app.get(&format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    let profile: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(profile["email"], email);

    let (status, body) = app.get(&format!("/api/users/email/{}", email)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_email_is_rejected() {
    let app = common::TestApp::users().await;
    let email = unique_email();
    register(&app, &email).await;

    let body = json!({ "email": email, "password": "another123" });
    let (status, response) = app.post("/api/users/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("Email already exists"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update_keeps_other_fields() {
    let app = common::TestApp::users().await;
    let user = register(&app, &unique_email()).await;
    let id = user["userId"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/users/{}", id),
            &json!({ "firstName": "Renamed" }).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(updated["firstName"], "Renamed");
    assert_eq!(updated["lastName"], "Tester");
    assert_eq!(updated["role"], "USER");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_validate_and_delete() {
    let app = common::TestApp::users().await;
    let user = register(&app, &unique_email()).await;
    let id = user["userId"].as_str().unwrap();

    let (status, body) = app.get(&format!("/api/users/{}/validate", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");

    let (status, body) = app.delete(&format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("User deleted successfully"));

    let (_, body) = app.get(&format!("/api/users/{}/validate", id)).await;
    assert_eq!(body, "false");

    let (status, _) = app.delete(&format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_search_escapes_wildcards() {
    let app = common::TestApp::users().await;
    register(&app, &unique_email()).await;

    let (status, body) = app.get("/api/users/search?firstName=%25").await;

    assert_eq!(status, StatusCode::OK);
    let found: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert!(found.iter().all(|u| u["firstName"].as_str().unwrap().contains('%')));
}
