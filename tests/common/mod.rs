//! Shared test harness
//!
//! Builds the full application (middleware included) against a throwaway
//! database and drives it through tower's `oneshot` without binding a port.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use swasthya_server::api;
use swasthya_server::{Config, ServerState};

pub struct TestApp {
    pub app: Router,
    _tmp: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let tmp = TempDir::new().unwrap();
        let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
        let state = ServerState::initialize(&config).await.unwrap();
        let app = api::build_app(state);
        Self { app, _tmp: tmp }
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("GET", path, token, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request("PUT", path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("DELETE", path, token, None).await
    }
}

// ── Signup payload builders ─────────────────────────────────────────

pub fn hospital_signup(name: &str, registration_number: &str, email: &str) -> Value {
    json!({
        "role": "hospital",
        "hospitalName": name,
        "registrationNumber": registration_number,
        "administratorEmail": email,
        "adminContact": "9999999999",
        "password": "hunter2hunter2"
    })
}

pub fn worker_signup(name: &str, mobile: &str) -> Value {
    json!({
        "role": "worker",
        "name": name,
        "mobileNumber": mobile,
        "aadhaarNumber": "123412341234",
        "password": "workerpass1"
    })
}

pub fn gov_signup(email: &str, employee_id: &str) -> Value {
    json!({
        "role": "gov",
        "officialEmail": email,
        "employeeId": employee_id,
        "verificationCode": "VC-2025",
        "password": "officialpass1"
    })
}

pub fn worker_record(name: &str, hospital_name: &str) -> Value {
    json!({
        "name": name,
        "dob": "1990-04-01",
        "gender": "Male",
        "contact": "9876543210",
        "homeState": "Bihar",
        "idType": "Aadhaar",
        "idNumber": "123412341234",
        "hospitalName": hospital_name
    })
}

pub fn staff_record(name: &str, role: &str) -> Value {
    json!({
        "name": name,
        "role": role,
        "department": "General Medicine",
        "qualification": "MBBS",
        "contact": "9876543210",
        "email": "staff@example.com",
        "dateOfJoining": "2024-06-01"
    })
}

// ── Assertions ──────────────────────────────────────────────────────

/// Check a generated code: `prefix` followed by exactly three digits in 100..=999
pub fn assert_code(code: &str, prefix: &str) {
    let digits = code
        .strip_prefix(prefix)
        .unwrap_or_else(|| panic!("code {code:?} missing prefix {prefix:?}"));
    assert_eq!(digits.len(), 3, "code {code:?} suffix must be three digits");
    let n: u32 = digits
        .parse()
        .unwrap_or_else(|_| panic!("code {code:?} suffix must be numeric"));
    assert!((100..=999).contains(&n), "code {code:?} out of range");
}

// ── Account helpers ─────────────────────────────────────────────────

/// Sign up a hospital and return its token
pub async fn signup_hospital(app: &TestApp, name: &str, reg: &str, email: &str) -> String {
    let (status, body) = app
        .post("/api/auth/signup", None, hospital_signup(name, reg, email))
        .await;
    assert_eq!(status, StatusCode::CREATED, "hospital signup failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Sign up a worker account and return its token
pub async fn signup_worker(app: &TestApp, name: &str, mobile: &str) -> String {
    let (status, body) = app
        .post("/api/auth/signup", None, worker_signup(name, mobile))
        .await;
    assert_eq!(status, StatusCode::CREATED, "worker signup failed: {body}");
    body["token"].as_str().unwrap().to_string()
}
