//! Session token issuance and verification.
//!
//! Tokens are signed with the secret carried by [`JwtConfig`]; nothing here
//! reads ambient configuration. Verification uses zero leeway, so a token is
//! rejected as soon as its `exp` has passed.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use unilink_config::JwtConfig;
use unilink_core::{AppError, UserRole};

use crate::claims::Claims;

/// Why a token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
}

/// Creates a session token for the given identity, valid for
/// `jwt_config.access_token_expiry` seconds.
///
/// # Errors
///
/// Returns a bad-request error if encoding fails.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: UserRole,
    admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_token_with_ttl(
        user_id,
        email,
        role,
        admin,
        jwt_config.access_token_expiry,
        jwt_config,
    )
}

/// Same as [`create_access_token`] with an explicit lifetime in seconds.
pub fn create_token_with_ttl(
    user_id: Uuid,
    email: &str,
    role: UserRole,
    admin: bool,
    ttl_seconds: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + ttl_seconds).max(0);

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        admin,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::bad_request(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a session token and returns its claims.
///
/// There is no revocation list: any well-formed, correctly signed token whose
/// `exp` lies in the future is accepted.
///
/// # Errors
///
/// - [`TokenError::Expired`] if the token is past its expiry
/// - [`TokenError::Invalid`] for a bad signature, malformed token, or unknown claims
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
