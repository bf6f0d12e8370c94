use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;

use crate::{
    crypto::session_token::SessionCodec,
    models::session::{SESSION_COOKIE, SessionPayload},
    state::AppState,
};

/// The sign-in page unauthenticated visitors are sent to. This is the
/// `/auth/signin` page itself, not the `/auth/sign-in` spelling some clients use.
pub const SIGN_IN_PATH: &str = "/auth/signin";

/// Where a request should go after the guard has looked at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Protected prefixes and anonymous-only routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    protected_prefixes: Vec<String>,
    redirect_routes: Vec<(String, String)>,
    sign_in_path: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/dashboard".to_string()],
            redirect_routes: vec![
                ("/auth/signin".to_string(), "/dashboard".to_string()),
                ("/auth/signup".to_string(), "/dashboard".to_string()),
                ("/".to_string(), "/dashboard".to_string()),
            ],
            sign_in_path: SIGN_IN_PATH.to_string(),
        }
    }
}

impl RouteTable {
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// The target an authenticated visitor of `path` is redirected to.
    pub fn redirect_target(&self, path: &str) -> Option<&str> {
        self.redirect_routes
            .iter()
            .find(|(route, _)| route == path)
            .map(|(_, target)| target.as_str())
    }

    /// Decides a request from its path and raw session cookie.
    ///
    /// The protected check runs first, so a path listed in both sets sends
    /// unauthenticated visitors to sign-in.
    pub fn decide(&self, path: &str, cookie: Option<&str>, codec: &SessionCodec) -> GuardDecision {
        let protected = self.is_protected(path);

        let Some(cookie) = cookie else {
            if protected {
                return GuardDecision::Redirect(self.sign_in_path.clone());
            }
            return GuardDecision::Proceed;
        };

        let session = codec.decode(Some(cookie));
        let user_id = session.as_ref().and_then(SessionPayload::user_id);

        if protected && user_id.is_none() {
            return GuardDecision::Redirect(self.sign_in_path.clone());
        }

        if let (Some(target), Some(_)) = (self.redirect_target(path), user_id) {
            return GuardDecision::Redirect(target.to_string());
        }

        GuardDecision::Proceed
    }
}

/// Redirects requests by route classification and session validity.
///
/// The request is never rejected with an error: a bad session only ever
/// counts as "signed out".
pub async fn route_guard(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let cookie = cookies.get(SESSION_COOKIE).map(|c| c.value().to_string());

    match state.routes.decide(&path, cookie.as_deref(), &state.codec) {
        GuardDecision::Proceed => {
            tracing::debug!("✅ Route guard: proceeding to {}", path);
            next.run(request).await
        }
        GuardDecision::Redirect(target) => {
            tracing::debug!("🔀 Route guard: redirecting {} to {}", path, target);
            Redirect::temporary(&target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn codec() -> SessionCodec {
        SessionCodec::new(b"route-guard-secret")
    }

    fn valid_cookie() -> String {
        codec().encode(&SessionPayload::new("user-1", "api-token")).unwrap()
    }

    fn redirect(target: &str) -> GuardDecision {
        GuardDecision::Redirect(target.to_string())
    }

    #[test]
    fn dashboard_without_cookie_goes_to_sign_in() {
        let table = RouteTable::default();

        for path in ["/dashboard", "/dashboard/tccs", "/dashboard/organizations/42"] {
            assert_eq!(table.decide(path, None, &codec()), redirect(SIGN_IN_PATH));
        }
    }

    #[test]
    fn anonymous_routes_without_cookie_proceed() {
        let table = RouteTable::default();

        assert_eq!(table.decide("/", None, &codec()), GuardDecision::Proceed);
        assert_eq!(table.decide("/auth/signin", None, &codec()), GuardDecision::Proceed);
        assert_eq!(table.decide("/about", None, &codec()), GuardDecision::Proceed);
    }

    #[test]
    fn signed_in_visitors_leave_anonymous_routes() {
        let table = RouteTable::default();
        let cookie = valid_cookie();

        for path in ["/", "/auth/signin", "/auth/signup"] {
            assert_eq!(table.decide(path, Some(&cookie), &codec()), redirect("/dashboard"));
        }
    }

    #[test]
    fn redirect_routes_match_exactly() {
        let table = RouteTable::default();
        let cookie = valid_cookie();

        assert_eq!(
            table.decide("/auth/signin/help", Some(&cookie), &codec()),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn valid_session_reaches_dashboard() {
        let table = RouteTable::default();
        let cookie = valid_cookie();

        assert_eq!(table.decide("/dashboard", Some(&cookie), &codec()), GuardDecision::Proceed);
    }

    #[test]
    fn invalid_sessions_count_as_signed_out() {
        let table = RouteTable::default();
        let foreign = SessionCodec::new(b"other")
            .encode(&SessionPayload::new("user-1", "api-token"))
            .unwrap();
        let expired = codec()
            .encode(&SessionPayload::issued_at(Utc::now() - Duration::days(10), "user-1", "t"))
            .unwrap();
        let anonymous = codec().encode(&SessionPayload::new("", "t")).unwrap();

        for cookie in [foreign.as_str(), expired.as_str(), anonymous.as_str(), "garbage"] {
            assert_eq!(table.decide("/dashboard", Some(cookie), &codec()), redirect(SIGN_IN_PATH));
            assert_eq!(table.decide("/auth/signin", Some(cookie), &codec()), GuardDecision::Proceed);
        }
    }

    #[test]
    fn protected_check_wins_over_redirect_routes() {
        let table = RouteTable {
            protected_prefixes: vec!["/dashboard".to_string()],
            redirect_routes: vec![("/dashboard".to_string(), "/elsewhere".to_string())],
            sign_in_path: SIGN_IN_PATH.to_string(),
        };

        assert_eq!(table.decide("/dashboard", None, &codec()), redirect(SIGN_IN_PATH));
        assert_eq!(table.decide("/dashboard", Some("garbage"), &codec()), redirect(SIGN_IN_PATH));
    }
}
