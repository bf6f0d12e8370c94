use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_cookies::{CookieManagerLayer, Cookies};

use tcc_portal::{crypto::session_token::SessionCodec, services::session::SessionStore};

async fn probe(State(codec): State<SessionCodec>, cookies: Cookies) -> String {
    let store = SessionStore::new(&cookies, &codec, false);
    let before = store.read().is_some();

    store.delete();
    store.delete();

    let after = store.read().is_some();
    format!("{}:{}", before, after)
}

async fn sign(State(codec): State<SessionCodec>, cookies: Cookies) -> String {
    let store = SessionStore::new(&cookies, &codec, true);
    store.create("user-7", "api-token").unwrap();

    store
        .current()
        .map(|payload| payload.data.user_id)
        .unwrap_or_default()
}

fn app() -> Router {
    Router::new()
        .route("/probe", get(probe))
        .route("/sign", get(sign))
        .layer(CookieManagerLayer::new())
        .with_state(SessionCodec::new(b"session-store-secret"))
}

async fn text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn delete_then_read_is_absent() {
    let request = Request::builder()
        .uri("/probe")
        .header("cookie", "session=whatever")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, "true:false");
}

#[tokio::test]
async fn delete_without_cookie_is_not_an_error() {
    let request = Request::builder().uri("/probe").body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text(response).await, "false:false");
}

#[tokio::test]
async fn create_sets_a_strict_http_only_cookie() {
    let request = Request::builder().uri("/sign").body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();
    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();

    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert_eq!(text(response).await, "user-7");
}
