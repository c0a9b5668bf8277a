mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!",
            "fullName": "Nicola D"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("Location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], "nicola");
    assert_eq!(body["email"], "nicola@example.com");
    assert_eq!(body["fullName"], "Nicola D");
    assert_eq!(body["role"], "User");
    assert_eq!(body["isActive"], true);
    assert!(body["createdAt"].is_string());
    assert!(body["lastLoginAt"].is_null());
    assert!(body.get("passwordHash").is_none());
    assert_eq!(location, format!("/api/users/{}", body["id"].as_str().unwrap()));
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let app = TestApp::spawn().await;

    app.create_user("nicola", "nicola@example.com").await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola",
            "email": "other@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::spawn().await;

    app.create_user("nicola", "nicola@example.com").await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "nicola2",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_validation_errors() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/users")
        .json(&json!({
            "username": "ab",
            "email": "invalid-email",
            "password": "short"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"]["username"].is_array());
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::spawn().await;

    let created = app.create_user("nicola", "nicola@example.com").await;
    let user_id = created["id"].as_str().unwrap();

    let response = app
        .get(&format!("/api/users/{}", user_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get(&format!("/api/users/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_get_user_malformed_id_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/not-a-uuid")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::spawn().await;

    app.create_user("first", "first@example.com").await;
    app.create_user("second", "second@example.com").await;

    let response = app
        .get("/api/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "second");
    assert_eq!(users[1]["username"], "first");
}

#[tokio::test]
async fn test_update_user() {
    let app = TestApp::spawn().await;

    let created = app.create_user("nicola", "nicola@example.com").await;
    let user_id = created["id"].as_str().unwrap();

    let response = app
        .put(&format!("/api/users/{}", user_id))
        .json(&json!({
            "email": "new@example.com",
            "fullName": "",
            "role": "Admin"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "new@example.com");
    assert_eq!(body["fullName"], "Test User");
    assert_eq!(body["role"], "Admin");
    assert_eq!(body["username"], "nicola");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_user_email_taken() {
    let app = TestApp::spawn().await;

    app.create_user("first", "first@example.com").await;
    let second = app.create_user("second", "second@example.com").await;

    let response = app
        .put(&format!("/api/users/{}", second["id"].as_str().unwrap()))
        .json(&json!({ "email": "first@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .put(&format!("/api/users/{}", uuid::Uuid::new_v4()))
        .json(&json!({ "role": "Admin" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::spawn().await;

    let created = app.create_user("nicola", "nicola@example.com").await;
    let path = format!("/api/users/{}", created["id"].as_str().unwrap());

    let response = app
        .delete(&path)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&path).send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .delete(&path)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_check_username_and_email() {
    let app = TestApp::spawn().await;

    app.create_user("nicola", "nicola@example.com").await;

    let taken: serde_json::Value = app
        .get("/api/users/check-username/nicola")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(taken, json!({ "exists": true, "available": false }));

    let free: serde_json::Value = app
        .get("/api/users/check-username/someone")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(free, json!({ "exists": false, "available": true }));

    let email: serde_json::Value = app
        .get("/api/users/check-email/nicola@example.com")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(email, json!({ "exists": true, "available": false }));
}

#[tokio::test]
async fn test_create_workflow_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/workflows")
        .json(&json!({
            "name": "Nightly import",
            "description": "Pulls records from the CRM"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers().get("Location").unwrap().to_str().unwrap().to_string();

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Nightly import");
    assert_eq!(body["description"], "Pulls records from the CRM");
    assert_eq!(body["isActive"], true);
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert_eq!(location, format!("/api/workflows/{}", body["id"].as_str().unwrap()));
}

#[tokio::test]
async fn test_create_workflow_requires_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/workflows")
        .json(&json!({ "description": "No name" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["errors"]["name"].is_array());
}

#[tokio::test]
async fn test_workflow_lifecycle() {
    let app = TestApp::spawn().await;

    let created = app.create_workflow("Nightly import").await;
    let path = format!("/api/workflows/{}", created["id"].as_str().unwrap());

    let response = app
        .put(&path)
        .json(&json!({
            "name": "Weekly import",
            "isActive": false
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched: serde_json::Value = app
        .get(&path)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Weekly import");
    assert_eq!(fetched["isActive"], false);
    assert_eq!(fetched["createdAt"], created["createdAt"]);

    let listed: serde_json::Value = app
        .get("/api/workflows")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app
        .delete(&path)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&path).send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_workflow_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .put(&format!("/api/workflows/{}", uuid::Uuid::new_v4()))
        .json(&json!({ "name": "Anything" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_workflow_malformed_id() {
    let app = TestApp::spawn().await;

    let response = app
        .delete("/api/workflows/12345")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
