//! Staff record endpoint tests, plus the public alert feed and health probe

mod common;

use common::*;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn nurse_code_joins_initials_and_digits() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (status, body) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            staff_record("Nurse Devi", "Nurse"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_code(body["staffId"].as_str().unwrap(), "CG");
    assert_eq!(body["name"], "Nurse Devi");
    assert!(body["id"].as_str().unwrap().starts_with("staff:"));
}

#[tokio::test]
async fn doctor_code_uses_at_separator() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (_, body) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            staff_record("Dr. Rao", "Senior Doctor"),
        )
        .await;

    assert_code(body["staffId"].as_str().unwrap(), "CG@");
}

#[tokio::test]
async fn other_staff_roles_use_underscore_separator() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (_, body) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            staff_record("Anil Clerk", "Receptionist"),
        )
        .await;

    assert_code(body["staffId"].as_str().unwrap(), "CG_");
}

#[tokio::test]
async fn staff_and_worker_codes_use_different_name_sources() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    // Worker codes follow the payload's hospital name
    let (_, worker) = app
        .post(
            "/api/hospital/workers",
            Some(&token),
            worker_record("Ravi Kumar", "Metro Hope"),
        )
        .await;
    assert_code(worker["workerId"].as_str().unwrap(), "MH_");

    // Staff codes follow the account's display name
    let (_, staff) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            staff_record("Nurse Devi", "Nurse"),
        )
        .await;
    assert_code(staff["staffId"].as_str().unwrap(), "CG");
}

#[tokio::test]
async fn staff_create_requires_name_and_role() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (status, body) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            json!({ "name": "Nurse Devi", "role": "" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "role is required");
}

#[tokio::test]
async fn staff_list_scoped_and_newest_first() {
    let app = TestApp::spawn().await;
    let city = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;
    let metro = signup_hospital(&app, "Metro Hope", "RC2", "admin@metro.example").await;

    app.post(
        "/api/hospital/staff",
        Some(&city),
        staff_record("Dr. Rao", "Doctor"),
    )
    .await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    app.post(
        "/api/hospital/staff",
        Some(&city),
        staff_record("Nurse Devi", "Nurse"),
    )
    .await;
    app.post(
        "/api/hospital/staff",
        Some(&metro),
        staff_record("Dr. Iyer", "Doctor"),
    )
    .await;

    let (status, body) = app.get("/api/hospital/staff", Some(&city)).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Nurse Devi", "Dr. Rao"]);

    let (_, body) = app.get("/api/hospital/staff", Some(&metro)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn staff_routes_reject_non_hospital_roles() {
    let app = TestApp::spawn().await;
    let worker_token = signup_worker(&app, "Ravi Kumar", "9876543210").await;

    let (status, _) = app.get("/api/hospital/staff", Some(&worker_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_own_staff_member() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (_, created) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            staff_record("Nurse Devi", "Nurse"),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/hospital/staff/{id}"),
            Some(&token),
            json!({ "department": "Emergency" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "Emergency");
    // Codes never change after creation
    assert_eq!(body["staffId"], created["staffId"]);
}

#[tokio::test]
async fn foreign_staff_update_and_delete_report_not_found() {
    let app = TestApp::spawn().await;
    let city = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;
    let metro = signup_hospital(&app, "Metro Hope", "RC2", "admin@metro.example").await;

    let (_, created) = app
        .post(
            "/api/hospital/staff",
            Some(&city),
            staff_record("Nurse Devi", "Nurse"),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .put(
            &format!("/api/hospital/staff/{id}"),
            Some(&metro),
            json!({ "department": "Oncology" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Staff {id} not found"));

    let (status, _) = app
        .delete(&format!("/api/hospital/staff/{id}"), Some(&metro))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/api/hospital/staff", Some(&city)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_own_staff_member() {
    let app = TestApp::spawn().await;
    let token = signup_hospital(&app, "City General", "RC1", "admin@city.example").await;

    let (_, created) = app
        .post(
            "/api/hospital/staff",
            Some(&token),
            staff_record("Nurse Devi", "Nurse"),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .delete(&format!("/api/hospital/staff/{id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Staff deleted");

    let (_, body) = app.get("/api/hospital/staff", Some(&token)).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn alert_feed_is_public_and_fixed() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/hospital/alerts", None).await;

    assert_eq!(status, StatusCode::OK);
    let alerts = body.as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["id"], 1);
    assert_eq!(alerts[0]["title"], "High Fever Cluster");
    assert_eq!(alerts[0]["severity"], "Urgent");
    assert_eq!(alerts[1]["title"], "Vaccination Drive");
    assert_eq!(alerts[1]["content"], "New shipment arrived.");
}

#[tokio::test]
async fn health_probe_is_public() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(!body["version"].as_str().unwrap().is_empty());
}
