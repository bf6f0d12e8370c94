use axum::{
    Router,
    routing::{get, post},
    middleware::from_fn_with_state,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use crate::{handlers, middleware_layer, state::AppState};

/// Builds the portal's router. Every request passes through the route guard.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/", get(handlers::auth::home))
        .route(
            "/auth/signin",
            get(handlers::auth::sign_in_page).post(handlers::auth::sign_in),
        )
        .route(
            "/auth/signup",
            get(handlers::auth::sign_up_page).post(handlers::auth::sign_up),
        )
        .route("/auth/signout", post(handlers::auth::sign_out));

    let dashboard_routes = Router::new()
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route(
            "/dashboard/tccs",
            get(handlers::tccs::list_tccs).post(handlers::tccs::create_tcc),
        )
        .route(
            "/dashboard/tccs/{tcc_id}",
            get(handlers::tccs::get_tcc)
                .patch(handlers::tccs::update_tcc)
                .delete(handlers::tccs::delete_tcc),
        )
        .route(
            "/dashboard/tccs/{tcc_id}/file",
            get(handlers::tccs::view_document),
        )
        .route(
            "/dashboard/organizations",
            get(handlers::organizations::list_organizations),
        )
        .route(
            "/dashboard/organizations/{organization_id}",
            get(handlers::organizations::get_organization),
        )
        .route("/dashboard/users", get(handlers::users::list_users));

    Router::new()
        .merge(auth_routes)
        .merge(dashboard_routes)
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(from_fn_with_state(
            state.clone(),
            middleware_layer::route_guard::route_guard,
        ))
        .layer(CookieManagerLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false))
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .with_state(state)
}
