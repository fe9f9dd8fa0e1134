use std::env;

/// Session tokens live for four hours unless `JWT_ACCESS_EXPIRY` says otherwise.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 4 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,
    #[error("JWT_ACCESS_EXPIRY must be a positive number of seconds, got {0:?}")]
    InvalidExpiry(String),
}

/// Signing configuration for session tokens.
///
/// The secret is used symmetrically to sign and verify. It is always injected,
/// either from the environment or by the caller constructing the struct.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidExpiry(raw))?,
            Err(_) => DEFAULT_ACCESS_TOKEN_EXPIRY,
        };

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}

// The secret never ends up in logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
