//! Role-gated extractors.
//!
//! Each extractor first authenticates the request through [`AuthUser`] and
//! then rejects tokens issued for any other role with 403.

use axum::{extract::FromRequestParts, http::request::Parts};

use unilink_core::{AppError, UserRole};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fails with 403 unless the session belongs to `required`.
pub fn ensure_role(auth_user: &AuthUser, required: UserRole) -> Result<(), AppError> {
    if auth_user.role() != required {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Unauthorized access denied! This resource requires the {} role",
            required
        )));
    }
    Ok(())
}

macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = AuthUser::from_request_parts(parts, state).await?;
                ensure_role(&auth_user, $role)?;
                Ok($name(auth_user))
            }
        }
    };
}

require_role!(RequireStudent, UserRole::Student);
require_role!(RequireProfessor, UserRole::Professor);
