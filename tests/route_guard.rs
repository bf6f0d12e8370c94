mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn dashboard_without_session_redirects_to_sign_in() {
    let context = TestContext::new().await;

    for path in ["/dashboard", "/dashboard/tccs", "/dashboard/users"] {
        let response = context.get(path, None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{}", path);
        assert_eq!(location(&response), Some("/auth/signin"));
    }
}

#[tokio::test]
async fn signed_in_visitor_is_sent_from_sign_in_to_dashboard() {
    let context = TestContext::new().await;

    for path in ["/auth/signin", "/auth/signup", "/"] {
        let response = context.get(path, Some("student")).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{}", path);
        assert_eq!(location(&response), Some("/dashboard"));
    }
}

#[tokio::test]
async fn valid_session_reaches_dashboard_unchanged() {
    let context = TestContext::new().await;

    let response = context.get("/dashboard", Some("student")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(location(&response).is_none());

    let body = body_json(response).await;
    assert_eq!(body["greeting"], "Olá, Ana");
}

#[tokio::test]
async fn anonymous_visitor_sees_public_pages() {
    let context = TestContext::new().await;

    let response = context.get("/auth/signin", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["page"], "signin");

    let response = context.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn forged_cookie_counts_as_signed_out() {
    let context = TestContext::new().await;
    let request = axum::http::Request::builder()
        .uri("/dashboard")
        .header("cookie", "session=eyJhbGciOiJIUzI1NiJ9.e30.invalid")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = context.send(request).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/auth/signin"));

    let request = axum::http::Request::builder()
        .uri("/auth/signin")
        .header("cookie", "session=garbage")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = context.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
}
