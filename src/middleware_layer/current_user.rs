use axum::{extract::FromRequestParts, http::request::Parts};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    models::{session::SessionPayload, user::User},
    permissions::Permissions,
    services::session::SessionStore,
    state::AppState,
};

/// The signed-in user, resolved from the session cookie.
///
/// Resolves to `None` for anonymous visitors and for sessions naming a user
/// the directory does not know.
pub struct CurrentUser {
    pub session: Option<SessionPayload>,
    pub user: Option<User>,
}

impl CurrentUser {
    pub fn permissions(&self) -> Permissions<'_> {
        Permissions::for_user(self.user.as_ref())
    }

    /// The user, or an authentication error for anonymous visitors.
    pub fn require(&self) -> Result<&User, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AppError::Authentication("Sign in required".to_string()))
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;

        let session = SessionStore::new(&cookies, &state.codec, state.config.production).current();

        let user = match session.as_ref().and_then(SessionPayload::user_id) {
            Some(user_id) => {
                let user = state.directory.users.find_by_id(user_id).await;
                if user.is_none() {
                    tracing::warn!("❌ Session names unknown user: {}", user_id);
                }
                user
            }
            None => None,
        };

        Ok(Self { session, user })
    }
}
