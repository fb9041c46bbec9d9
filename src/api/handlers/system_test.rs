//! Tests for greeting, landing page and health-check endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    routes::create_router(AppState::new(db))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let response = test_app()
        .await
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test(flavor = "multi_thread")]
async fn root_returns_greeting() {
    let (status, content_type, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, "<p>Hello Flask</p>");
}

#[tokio::test(flavor = "multi_thread")]
async fn landing_page_returns_html() {
    let (status, content_type, body) = get("/api/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("/api/students"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_check_ok_returns_200() {
    let (status, content_type, body) = get("/api/health-check/ok").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "OK! Service is Available!");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_check_bad_always_returns_500() {
    let (status, _, body) = get("/api/health-check/bad").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_route_returns_404() {
    let (status, _, _) = get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn openapi_document_lists_student_routes() {
    use utoipa::OpenApi;

    let doc = routes::ApiDoc::openapi();
    let paths: Vec<&String> = doc.paths.paths.keys().collect();

    for expected in [
        "/api/students",
        "/api/students/get/{id}",
        "/api/students/add",
        "/api/students/modify/{id}",
        "/api/students/change/{id}",
        "/api/students/delete/{id}",
    ] {
        assert!(
            paths.iter().any(|p| *p == expected),
            "Missing path {} in {:?}",
            expected,
            paths
        );
    }
}
