//! Integration tests for the dashboard summary API
mod common;

use crate::common::{authed_request, create_test_context, issue_token, project_form_json};

use folio_core::Role;
use folio_server::build_router;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_summary_empty_user_is_all_zeros() {
    let ctx = create_test_context().await;
    let app = build_router(ctx.state.clone());
    let token = issue_token(&ctx, Uuid::new_v4(), Role::Student);

    let response = app
        .oneshot(authed_request("GET", "/api/v1/summary", &token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    for key in [
        "projects",
        "education",
        "courses",
        "achievements",
        "skills",
        "positionsOfResponsibility",
        "certifications",
    ] {
        assert_eq!(json[key], 0, "expected zero count for {}", key);
    }
}

#[tokio::test]
async fn test_summary_counts_own_records_only() {
    let ctx = create_test_context().await;
    let app = build_router(ctx.state.clone());
    let asha = issue_token(&ctx, Uuid::new_v4(), Role::Student);
    let ravi = issue_token(&ctx, Uuid::new_v4(), Role::Student);

    for title in ["One", "Two"] {
        let create = app
            .clone()
            .oneshot(authed_request(
                "POST",
                "/api/v1/projects",
                &asha,
                Some(&project_form_json(title)),
            ))
            .await
            .unwrap();
        assert_eq!(create.status(), StatusCode::CREATED);
    }

    let achievement = serde_json::json!({
        "title": "Hackathon Winner",
        "description": "First place",
        "date": 1_700_000_000,
    })
    .to_string();
    let create = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/v1/achievements",
            &asha,
            Some(&achievement),
        ))
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/api/v1/summary", &asha, None))
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["projects"], 2);
    assert_eq!(json["achievements"], 1);
    assert_eq!(json["courses"], 0);

    // The other user's dashboard stays empty
    let other = app
        .oneshot(authed_request("GET", "/api/v1/summary", &ravi, None))
        .await
        .unwrap();
    let other_body = other.into_body().collect().await.unwrap().to_bytes();
    let other_json: serde_json::Value = serde_json::from_slice(&other_body).unwrap();
    assert_eq!(other_json["projects"], 0);
    assert_eq!(other_json["achievements"], 0);
}

#[tokio::test]
async fn test_summary_requires_auth() {
    let ctx = create_test_context().await;
    let app = build_router(ctx.state.clone());

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/summary")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
