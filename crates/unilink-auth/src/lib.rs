//! # Unilink Auth
//!
//! Session token claims and JWT utilities for the Unilink API.
//!
//! - [`claims`]: The claims embedded in a session token
//! - [`jwt`]: Token issuance and verification
//!
//! Session tokens are HS256 JWTs signed with the server secret from
//! [`unilink_config::JwtConfig`]. They are stateless: a token is valid as long
//! as its signature checks out and it has not expired. Claims are readable by
//! anyone holding the token, so nothing secret is ever embedded.
//!
//! # Example
//!
//! ```ignore
//! use unilink_auth::{create_access_token, verify_token};
//! use unilink_config::JwtConfig;
//! use unilink_core::UserRole;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token(user_id, "ada@uni.edu", UserRole::Professor, false, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, UserRole::Professor);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, create_access_token, create_token_with_ttl, verify_token};
