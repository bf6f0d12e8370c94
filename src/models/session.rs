use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session";

/// How long a session stays valid after sign-in.
pub const SESSION_DURATION_DAYS: i64 = 7;

/// The identity carried by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// The ID of the signed-in user.
    pub user_id: String,
    /// The auth token issued at sign-in.
    pub token: String,
}

/// Represents a user session as embedded in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub data: SessionData,
    /// The timestamp when the session expires.
    pub expires_at: DateTime<Utc>,
}

impl SessionPayload {
    /// Creates a payload that expires seven days from now.
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::issued_at(Utc::now(), user_id, token)
    }

    /// Creates a payload issued at `now`.
    pub fn issued_at(now: DateTime<Utc>, user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            data: SessionData {
                user_id: user_id.into(),
                token: token.into(),
            },
            expires_at: now + Duration::days(SESSION_DURATION_DAYS),
        }
    }

    /// The signed-in user's ID, if the payload names one.
    pub fn user_id(&self) -> Option<&str> {
        Some(self.data.user_id.as_str()).filter(|id| !id.trim().is_empty())
    }
}

/// JWT claims wrapping a [`SessionPayload`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    #[serde(flatten)]
    pub payload: SessionPayload,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(payload: SessionPayload, issued_at: DateTime<Utc>) -> Self {
        Self {
            iat: issued_at.timestamp(),
            exp: payload.expires_at.timestamp(),
            payload,
        }
    }
}
