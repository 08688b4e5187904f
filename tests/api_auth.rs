//! Signup, login, and identity endpoint tests

mod common;

use common::*;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn hospital_signup_returns_token_and_summary() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/auth/signup",
            None,
            hospital_signup("City General", "RC1", "admin@city.example"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["name"], "City General");
    assert_eq!(body["user"]["role"], "hospital");
}

#[tokio::test]
async fn gov_signup_uses_fallback_display_name() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/auth/signup",
            None,
            gov_signup("officer@health.gov.example", "EMP007"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "Gov Official");
    assert_eq!(body["user"]["role"], "gov");
}

#[tokio::test]
async fn duplicate_worker_mobile_rejected() {
    let app = TestApp::spawn().await;

    signup_worker(&app, "Ravi Kumar", "9876543210").await;

    let (status, body) = app
        .post(
            "/api/auth/signup",
            None,
            worker_signup("Someone Else", "9876543210"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "A worker with this Mobile Number already exists."
    );
}

#[tokio::test]
async fn duplicate_email_rejected_across_roles() {
    let app = TestApp::spawn().await;

    signup_hospital(&app, "City General", "RC1", "shared@example.com").await;

    // A gov account with the same email hits the same uniqueness rule
    let (status, body) = app
        .post(
            "/api/auth/signup",
            None,
            gov_signup("shared@example.com", "EMP007"),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "An account with this Email already exists.");
}

#[tokio::test]
async fn signup_missing_required_field_rejected() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/auth/signup",
            None,
            json!({
                "role": "hospital",
                "hospitalName": "City General",
                "registrationNumber": "",
                "administratorEmail": "admin@city.example",
                "adminContact": "9999999999",
                "password": "hunter2hunter2"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "registrationNumber is required");
}

#[tokio::test]
async fn signup_unknown_role_rejected() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/auth/signup",
            None,
            json!({ "role": "admin", "password": "whatever123" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid role: admin");
}

#[tokio::test]
async fn hospital_login_roundtrip() {
    let app = TestApp::spawn().await;

    signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({
                "role": "hospital",
                "registrationNumber": "RC1",
                "password": "hunter2hunter2"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["role"], "hospital");

    // The issued token resolves to the account
    let token = body["token"].as_str().unwrap();
    let (status, me) = app.get("/api/auth/me", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["displayName"], "City General");
}

#[tokio::test]
async fn worker_login_uses_mobile_number() {
    let app = TestApp::spawn().await;

    signup_worker(&app, "Ravi Kumar", "9876543210").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({
                "role": "worker",
                "mobileNumber": "9876543210",
                "password": "workerpass1"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "worker");
}

#[tokio::test]
async fn gov_login_uses_employee_id() {
    let app = TestApp::spawn().await;

    let (status, _) = app
        .post(
            "/api/auth/signup",
            None,
            gov_signup("officer@health.gov.example", "EMP007"),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({
                "role": "gov",
                "employeeId": "EMP007",
                "password": "officialpass1"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "gov");
}

#[tokio::test]
async fn login_unknown_account_is_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({
                "role": "hospital",
                "registrationNumber": "RC-MISSING",
                "password": "hunter2hunter2"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn login_wrong_password_unauthorized() {
    let app = TestApp::spawn().await;

    signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({
                "role": "hospital",
                "registrationNumber": "RC1",
                "password": "not-the-password"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn me_returns_account_without_password_hash() {
    let app = TestApp::spawn().await;

    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (status, body) = app.get("/api/auth/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["displayName"], "City General");
    assert_eq!(body["role"], "hospital");
    assert_eq!(body["roleDetails"]["registrationNumber"], "RC1");
    assert!(body["id"].as_str().unwrap().starts_with("account:"));
    assert!(body.get("hashPass").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn me_requires_token() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");

    let (status, body) = app.get("/api/auth/me", Some("garbage.token.here")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}
