//! Studio session tokens and password verification.
//!
//! Sessions are HS256-signed JWTs carried in an HttpOnly cookie. Signing
//! and expiry replace the static shared-secret cookie such a gate is often
//! built on: a leaked cookie value stops working at expiry, and cookie
//! values cannot be forged without the signing secret.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::StudioConfig;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "studio_session";

/// Fixed subject claim; there is a single studio identity.
const SESSION_SUBJECT: &str = "studio";

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- always the studio identity.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit logging.
    pub jti: String,
}

/// Generate a signed session token with the configured expiry.
pub fn issue_session_token(
    config: &StudioConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.session_expiry_hours * 3600;

    let claims = SessionClaims {
        sub: SESSION_SUBJECT.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded claims.
///
/// Validates the signature and expiration automatically.
pub fn validate_session_token(
    token: &str,
    config: &StudioConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.session_secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Compare a login attempt against the configured studio password.
///
/// Comparison happens over fixed-length SHA-256 digests rather than the
/// raw strings, so timing does not depend on where the inputs diverge.
pub fn verify_password(candidate: &str, expected: &str) -> bool {
    let a = Sha256::digest(candidate.as_bytes());
    let b = Sha256::digest(expected.as_bytes());

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
