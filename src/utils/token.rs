//! Session token generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 32;

/// Generates a cryptographically secure random session token.
///
/// Encodes 32 random bytes as URL-safe base64 without padding, producing a
/// 43-character token. Only the HMAC of the token is ever stored.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
