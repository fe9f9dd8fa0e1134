//! # Unilink Models
//!
//! Domain models and DTOs for the Unilink API.
//!
//! # Modules
//!
//! - [`auth`]: Registration, login, and session DTOs
//! - [`profiles`]: Student and professor profile records
//! - [`users`]: The user record, its LinkedIn identity, and the client projection
//!
//! # Example
//!
//! ```ignore
//! use unilink_models::{RoleProfile, User};
//!
//! // Every new user gets an empty profile matching its role
//! let profile = RoleProfile::empty_for(&user);
//! ```

pub mod auth;
pub mod profiles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    Claims, LoginRequest, LoginResponse, RegisterOutcome, RegisterRequest, SessionResponse,
};
pub use profiles::{ProfessorProfile, RoleProfile, StudentProfile};
pub use users::{ClientUser, LinkedInIdentity, NewUser, User};
pub use unilink_core::UserRole;
