//! # Unilink Config
//!
//! Configuration types for the Unilink API, loaded from environment variables.
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use unilink_config::{CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::{ConfigError, DEFAULT_ACCESS_TOKEN_EXPIRY, JwtConfig};
