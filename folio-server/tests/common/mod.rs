#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_server::{AppState, PhotoStore};

use folio_auth::{JwtValidator, TokenIssuer};
use folio_core::Role;
use folio_db::{CollectionBootstrap, connection};

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use tempfile::TempDir;
use uuid::Uuid;

const TEST_JWT_SECRET: &[u8] = b"test-secret-test-secret-test-secret!";

/// AppState plus the tempdir backing the photo store
pub struct TestContext {
    pub state: AppState,
    _photos_dir: TempDir,
}

/// Create AppState for testing, backed by in-memory SQLite
pub async fn create_test_context() -> TestContext {
    let pool = connection::connect_in_memory()
        .await
        .expect("Failed to create test database");

    let photos_dir = TempDir::new().expect("Failed to create photo dir");

    let state = AppState {
        pool: pool.clone(),
        bootstrap: Arc::new(CollectionBootstrap::new(pool)),
        issuer: Arc::new(TokenIssuer::with_hs256(TEST_JWT_SECRET, 3600)),
        validator: Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)),
        photos: Arc::new(PhotoStore::new(photos_dir.path().to_path_buf())),
        easy_auth_base: Some("https://myapp.example.net".to_string()),
    };

    TestContext {
        state,
        _photos_dir: photos_dir,
    }
}

/// Issue a session token the router will accept
pub fn issue_token(ctx: &TestContext, user_id: Uuid, role: Role) -> String {
    ctx.state
        .issuer
        .issue(user_id, role)
        .expect("Failed to issue test token")
}

/// Bearer-authenticated request with an optional JSON body
pub fn authed_request(method: &str, uri: &str, token: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token));

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Session-claims payload in the app-service array shape
pub fn easy_auth_payload(subject: &str, name: &str, email: &str) -> serde_json::Value {
    serde_json::json!([
        {
            "user_claims": [
                { "typ": "name", "val": name },
                { "typ": "preferred_username", "val": email },
                { "typ": "oid", "val": subject }
            ]
        }
    ])
}

/// A valid project create payload
pub fn project_form_json(title: &str) -> String {
    serde_json::json!({
        "title": title,
        "description": "Test project description",
        "techStack": ["Rust", "SQLite"],
        "startDate": 1_700_000_000,
    })
    .to_string()
}
