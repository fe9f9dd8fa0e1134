//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use unilink_core::UserRole;

use crate::users::ClientUser;

// Re-export the token claims so handlers only need this crate
pub use unilink_auth::Claims;

/// Email/password registration. `userType` is accepted for `role`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Email must be a valid address"))]
    #[schema(example = "ada@uni.edu")]
    pub email: String,
    #[serde(alias = "userType")]
    pub role: UserRole,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Login with email, password, and the role the client is signing in as.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[serde(alias = "userType")]
    pub role: UserRole,
    #[validate(length(min = 1, message = "Password is required!"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Successful login: the session token plus the client projection of the user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: ClientUser,
}

/// The user a session token resolves to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: ClientUser,
}

/// How a registration was satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new user and its empty role profile were created.
    Created(ClientUser),
    /// An existing LinkedIn-only account received its first password.
    LinkedSocialAccount(ClientUser),
}

impl RegisterOutcome {
    pub fn user(&self) -> &ClientUser {
        match self {
            RegisterOutcome::Created(user) | RegisterOutcome::LinkedSocialAccount(user) => user,
        }
    }
}
