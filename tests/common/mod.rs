//! Shared test harness: router driver and media fixtures.

pub mod app;
pub mod fixtures;

pub use app::{TestApp, TestResponse};
pub use fixtures::SiteFixture;

use axum::http::StatusCode;

/// Assert a response is a complete HTML page.
#[allow(dead_code)]
pub fn assert_html_page(response: &TestResponse) -> String {
    assert_eq!(response.status, StatusCode::OK);

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected text/html, got {content_type}"
    );

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"), "Not a full document");
    html
}
