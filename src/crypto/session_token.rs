use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::Result;
use crate::models::session::{SessionClaims, SessionPayload};

/// Signs and verifies session tokens (HS256 JWTs).
#[derive(Clone)]
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);
        validation
    }

    /// Signs the payload. `exp` mirrors the payload's `expiresAt`.
    pub fn encode(&self, payload: &SessionPayload) -> Result<String> {
        let claims = SessionClaims::new(payload.clone(), Utc::now());
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verifies the token and returns its payload.
    ///
    /// Missing, malformed, tampered and expired tokens all yield `None`.
    pub fn decode(&self, token: Option<&str>) -> Option<SessionPayload> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            tracing::debug!("No session token to verify");
            return None;
        };

        match jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &Self::validation()) {
            Ok(data) => Some(data.claims.payload),
            Err(e) => {
                tracing::warn!("❌ Failed to verify session: {}", e);
                None
            }
        }
    }
}
