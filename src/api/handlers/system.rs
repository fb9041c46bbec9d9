//! Greeting, landing page and health-check handlers.

use axum::{http::StatusCode, response::Html};
use tracing::{debug, instrument};

const LANDING_PAGE: &str = include_str!("../../../assets/index.html");

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/html")
    )
)]
#[instrument]
pub async fn root() -> Html<&'static str> {
    Html("<p>Hello Flask</p>")
}

/// API landing page
#[utoipa::path(
    get,
    path = "/api/",
    tag = "system",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    )
)]
#[instrument]
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Health check endpoint
///
/// Always reports the service as available.
#[utoipa::path(
    get,
    path = "/api/health-check/ok",
    tag = "system",
    responses(
        (status = 200, description = "Service is available", body = String, content_type = "text/plain")
    )
)]
#[instrument]
pub async fn health_ok() -> (StatusCode, &'static str) {
    debug!("Health check endpoint accessed");
    (StatusCode::OK, "OK! Service is Available!")
}

/// Failing health check
///
/// Always answers 500. Used to verify that monitoring notices failures.
#[utoipa::path(
    get,
    path = "/api/health-check/bad",
    tag = "system",
    responses(
        (status = 500, description = "Always fails", body = String, content_type = "text/plain")
    )
)]
#[instrument]
pub async fn health_bad() -> (StatusCode, &'static str) {
    debug!("Failing health check endpoint accessed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Error")
}
