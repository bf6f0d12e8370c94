use tower_cookies::cookie::time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use crate::crypto::session_token::SessionCodec;
use crate::error::Result;
use crate::models::session::{SESSION_COOKIE, SESSION_DURATION_DAYS, SessionPayload};

/// Keeps the signed session token in the `session` cookie.
pub struct SessionStore<'a> {
    cookies: &'a Cookies,
    codec: &'a SessionCodec,
    secure: bool,
}

impl<'a> SessionStore<'a> {
    pub fn new(cookies: &'a Cookies, codec: &'a SessionCodec, secure: bool) -> Self {
        Self {
            cookies,
            codec,
            secure,
        }
    }

    fn session_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, value);
        cookie.set_http_only(true);
        cookie.set_secure(self.secure);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_path("/");
        cookie
    }

    /// Signs a seven-day session for the user and stores it in the cookie.
    pub fn create(&self, user_id: &str, token: &str) -> Result<SessionPayload> {
        let payload = SessionPayload::new(user_id, token);
        let signed = self.codec.encode(&payload)?;

        let mut cookie = self.session_cookie(signed);
        cookie.set_max_age(Duration::days(SESSION_DURATION_DAYS));
        self.cookies.add(cookie);

        tracing::info!("✅ Session cookie added for user: {}", user_id);
        Ok(payload)
    }

    /// Returns the raw session token, if the cookie is present.
    pub fn read(&self) -> Option<String> {
        self.cookies
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Reads and verifies the current session.
    pub fn current(&self) -> Option<SessionPayload> {
        self.codec.decode(self.read().as_deref())
    }

    /// Removes the session cookie. Removing an absent cookie is a no-op.
    pub fn delete(&self) {
        let mut cookie = self.session_cookie(String::new());
        cookie.set_max_age(Duration::seconds(0));
        self.cookies.remove(cookie);
        tracing::debug!("Session cookie removed");
    }
}
