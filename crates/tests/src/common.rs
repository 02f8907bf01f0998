use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use shared_types::{Directory, Session};
use tower::ServiceExt;

/// Every seeded login as (school code, email).
pub const SEED_LOGINS: &[(&str, &str)] = &[
    ("TOWN01", "admin@town.com"),
    ("TOWN01", "teacher@town.com"),
    ("TOWN01", "student@town.com"),
    ("TOWN01", "parent@town.com"),
    ("ELITE99", "admin@elite.com"),
    ("TOWN01", "sarah@town.com"),
    ("TOWN01", "kyle@town.com"),
];

/// Run both sign-in steps; panics if either is rejected.
pub fn sign_in(directory: &Directory, code: &str, email: &str) -> Session {
    let mut session = Session::new();
    session
        .verify_school(directory, code)
        .unwrap_or_else(|e| panic!("school code {code} rejected: {}", e.message));
    session
        .sign_in(directory, email, "any password")
        .unwrap_or_else(|e| panic!("{email} rejected: {}", e.message));
    session
}

/// Health route wrapped the way the app serves it.
pub fn test_app() -> Router {
    server::health::record_start_time();
    server::telemetry::with_request_ids(server::health::health_router())
}

/// GET with optional extra headers; returns (status, headers, body).
pub async fn get(app: &Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}
