//! Request extractors for authenticated routes.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser), the verified session claims
//! - [`role`]: Extractors that additionally require a specific role
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::role::RequireProfessor;
//!
//! // Any valid session
//! async fn whoami(auth_user: AuthUser) -> String {
//!     auth_user.email().to_string()
//! }
//!
//! // Professors only; students get 403
//! async fn grading(RequireProfessor(auth_user): RequireProfessor) { /* ... */ }
//! ```

pub mod auth;
pub mod role;
