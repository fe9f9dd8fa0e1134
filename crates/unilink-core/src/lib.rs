//! # Unilink Core
//!
//! Core types, errors, and utilities shared by every Unilink crate.
//!
//! - [`errors`]: The application error taxonomy with HTTP response conversion
//! - [`password`]: Salted one-way password hashing and verification
//! - [`role`]: The closed set of account roles (`student`, `professor`)
//!
//! # Example
//!
//! ```ignore
//! use unilink_core::{AppError, UserRole, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse battery staple")?;
//! assert!(verify_password("correct horse battery staple", &hash)?);
//!
//! let role: UserRole = "professor".parse()?;
//! let err = AppError::forbidden(anyhow::anyhow!("Unauthorized access denied!"));
//! ```

pub mod errors;
pub mod password;
pub mod role;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{
    PASSWORD_HASH_COST, hash_password, hash_password_async, verify_password,
    verify_password_async,
};
pub use role::{ParseRoleError, UserRole};
