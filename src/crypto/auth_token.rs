use rand::RngCore;
use rand::rngs::OsRng;
use base64::{Engine as _, engine::general_purpose};

/// The size of the auth token in bytes.
const AUTH_TOKEN_SIZE: usize = 32;

/// Generates a new random auth token for a signed-in user.
///
/// # Returns
///
/// A URL-safe base64-encoded token.
pub fn generate_auth_token() -> String {
    let mut token = [0u8; AUTH_TOKEN_SIZE];
    OsRng.fill_bytes(&mut token);

    general_purpose::URL_SAFE_NO_PAD.encode(token)
}
