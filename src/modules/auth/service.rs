use anyhow::anyhow;
use tracing::{info, instrument, warn};

use unilink_auth::{TokenError, create_access_token, verify_token};
use unilink_config::JwtConfig;
use unilink_core::{AppError, hash_password_async, verify_password_async};
use unilink_db::{AccountStore, StoreError};
use unilink_models::{
    Claims, ClientUser, LoginRequest, LoginResponse, NewUser, RegisterOutcome, RegisterRequest,
    RoleProfile, User,
};

pub struct AuthService;

impl AuthService {
    /// Registers an email/password account.
    ///
    /// An existing LinkedIn-only account with the same role is claimed by
    /// setting its password. Any other existing account is a conflict.
    #[instrument(skip_all, fields(email = %dto.email, role = %dto.role))]
    pub async fn register_user(
        store: &dyn AccountStore,
        dto: RegisterRequest,
    ) -> Result<RegisterOutcome, AppError> {
        let existing = store
            .find_by_email(&dto.email)
            .await
            .map_err(StoreError::into_app_error)?;

        match existing {
            Some(user) if user.has_linkedin_profile() => {
                Self::claim_social_account(store, user, dto).await
            }
            Some(_) => Err(AppError::conflict(anyhow!("User already exists!"))),
            None => Self::create_account(store, dto).await,
        }
    }

    async fn claim_social_account(
        store: &dyn AccountStore,
        user: User,
        dto: RegisterRequest,
    ) -> Result<RegisterOutcome, AppError> {
        if !user.can_be_claimed_as(dto.role) {
            let reason = if user.role != dto.role {
                format!("User already exists as a {}!", user.role)
            } else if user.has_password() {
                "User already exists!".to_string()
            } else {
                "LinkedIn account is not fully linked!".to_string()
            };
            warn!(user_id = %user.id, %reason, "Refusing to link LinkedIn account");
            return Err(AppError::conflict(anyhow!(reason)));
        }

        let hash = hash_password_async(dto.password).await?;

        // Another registration may have claimed the account while hashing.
        let updated = store
            .update_password(&user.email, &hash)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "LinkedIn account was claimed concurrently");
                AppError::conflict(anyhow!("User already exists!"))
            })?;

        info!(user_id = %updated.id, "Linked password to LinkedIn account");
        Ok(RegisterOutcome::LinkedSocialAccount(ClientUser::from(updated)))
    }

    async fn create_account(
        store: &dyn AccountStore,
        dto: RegisterRequest,
    ) -> Result<RegisterOutcome, AppError> {
        let hash = hash_password_async(dto.password).await?;

        let user = store
            .insert_user(NewUser::with_password(dto.email, dto.role, hash))
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => AppError::conflict(anyhow!("User already exists!")),
                other => other.into_app_error(),
            })?;

        store
            .insert_profile(&RoleProfile::empty_for(&user))
            .await
            .map_err(StoreError::into_app_error)?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(RegisterOutcome::Created(ClientUser::from(user)))
    }

    /// Checks credentials for the requested role and issues a session token.
    #[instrument(skip_all, fields(email = %dto.email, role = %dto.role))]
    pub async fn login_user(
        store: &dyn AccountStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = store
            .find_by_email(&dto.email)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(|| AppError::unauthorized(anyhow!("User not found!")))?;

        if user.role != dto.role {
            warn!(user_id = %user.id, stored_role = %user.role, "Login with mismatched role");
            return Err(AppError::forbidden(anyhow!("Unauthorized access denied!")));
        }

        // Social-only accounts have nothing to verify against.
        let Some(hash) = user.password.clone().filter(|p| !p.is_empty()) else {
            warn!(user_id = %user.id, "Password login for account without password");
            return Err(AppError::unauthorized(anyhow!("Incorrect password!")));
        };

        if !verify_password_async(dto.password, hash).await? {
            warn!(user_id = %user.id, "Incorrect password");
            return Err(AppError::unauthorized(anyhow!("Incorrect password!")));
        }

        let access_token =
            create_access_token(user.id, &user.email, user.role, user.admin, jwt_config)?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse {
            access_token,
            user: ClientUser::from(user),
        })
    }
}

/// Resolves session tokens back to users.
pub struct SessionService;

impl SessionService {
    /// Pulls the token out of an `Authorization` header value, accepting both
    /// `Bearer <token>` and a bare token.
    pub fn token_from_header(header: Option<&str>) -> Result<&str, AppError> {
        let raw = header.map(str::trim).unwrap_or_default();
        let token = match raw.get(..6) {
            Some(scheme)
                if scheme.eq_ignore_ascii_case("bearer")
                    && raw[6..].chars().next().is_none_or(char::is_whitespace) =>
            {
                raw[6..].trim()
            }
            _ => raw,
        };

        if token.is_empty() {
            return Err(AppError::unauthorized(anyhow!("No token provided!")));
        }
        Ok(token)
    }

    pub fn claims_from_header(
        header: Option<&str>,
        jwt_config: &JwtConfig,
    ) -> Result<Claims, AppError> {
        let token = Self::token_from_header(header)?;
        verify_token(token, jwt_config).map_err(|e: TokenError| {
            warn!(reason = %e, "Rejected session token");
            AppError::unauthorized(e)
        })
    }

    /// Verifies the token in `header` and loads the user it was issued to.
    #[instrument(skip_all)]
    pub async fn resolve_user(
        store: &dyn AccountStore,
        header: Option<&str>,
        jwt_config: &JwtConfig,
    ) -> Result<User, AppError> {
        let claims = Self::claims_from_header(header, jwt_config)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid user ID in token")))?;

        store
            .find_by_id(user_id)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(|| {
                warn!(%user_id, "Session token for a user that no longer exists");
                AppError::not_found(anyhow!("User not found!"))
            })
    }
}
