use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use garde::Validate;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;
use uuid::Uuid;

use crate::{
    crypto::auth_token::generate_auth_token,
    error::Result,
    middleware_layer::route_guard::SIGN_IN_PATH,
    services::{auth as auth_service, session::SessionStore},
    state::AppState,
    validation::auth::*,
};

/// The request payload for signing in.
#[derive(Deserialize, Debug, Validate)]
pub struct SignInRequest {
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub password: String,
}

/// The request payload for signing up.
#[derive(Deserialize, Debug, Validate)]
pub struct SignUpRequest {
    #[garde(length(min = 1, max = 100))]
    pub first_name: String,
    #[garde(length(max = 150))]
    #[serde(default)]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub password: String,
    #[garde(skip)]
    #[serde(default)]
    pub organization_id: Option<Uuid>,
}

/// The response payload for authentication-related requests.
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub redirect_to: String,
}

/// A page offered to anonymous visitors.
#[derive(Serialize)]
pub struct PageResponse {
    pub page: &'static str,
    pub title: &'static str,
    pub links: Vec<&'static str>,
}

/// The landing page.
pub async fn home() -> Json<PageResponse> {
    Json(PageResponse {
        page: "home",
        title: "Gestão de TCC",
        links: vec!["/auth/signin", "/auth/signup"],
    })
}

/// The sign-in page.
pub async fn sign_in_page() -> Json<PageResponse> {
    Json(PageResponse {
        page: "signin",
        title: "Entrar",
        links: vec!["/auth/signup"],
    })
}

/// The sign-up page.
pub async fn sign_up_page() -> Json<PageResponse> {
    Json(PageResponse {
        page: "signup",
        title: "Criar conta",
        links: vec!["/auth/signin"],
    })
}

/// Handles signing in.
#[axum::debug_handler]
pub async fn sign_in(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<SignInRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Sign-in attempt: {}", payload.email);
    validate_payload(&payload)?;

    let user = auth_service::authenticate_user(&state.directory, &payload.email, &payload.password)
        .await?;

    let token = generate_auth_token();
    SessionStore::new(&cookies, &state.codec, state.config.production).create(&user.id, &token)?;

    tracing::info!("✅ User signed in: {}", user.id);

    let response = AuthResponse {
        success: true,
        message: format!("Bem-vindo, {}!", user.first_name),
        redirect_to: "/dashboard".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles signing up.
#[axum::debug_handler]
pub async fn sign_up(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<SignUpRequest>,
) -> Result<Response> {
    tracing::info!("📝 Sign-up attempt: {}", payload.email);
    validate_payload(&payload)?;
    validate_password(&payload.password)?;

    let user = auth_service::create_user(
        &state.directory,
        auth_service::NewUser {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            organization_id: payload.organization_id,
        },
    )
    .await?;

    let token = generate_auth_token();
    SessionStore::new(&cookies, &state.codec, state.config.production).create(&user.id, &token)?;

    let response = AuthResponse {
        success: true,
        message: "Registration successful. Welcome!".to_string(),
        redirect_to: "/dashboard".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Handles signing out. Always succeeds, even without a session.
#[axum::debug_handler]
pub async fn sign_out(State(state): State<AppState>, cookies: Cookies) -> Response {
    let store = SessionStore::new(&cookies, &state.codec, state.config.production);

    if let Some(session) = store.current() {
        tracing::info!("👋 Sign-out for user: {}", session.data.user_id);
    }
    store.delete();

    Redirect::to(SIGN_IN_PATH).into_response()
}
