use async_trait::async_trait;
use uuid::Uuid;

use unilink_core::{AppError, UserRole};
use unilink_models::{NewUser, RoleProfile, User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("A user with email {0} already exists")]
    Duplicate(String),
    #[error("No user {0} owns this profile")]
    MissingOwner(Uuid),
    #[error("User {0} already has a profile")]
    ProfileExists(Uuid),
    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Duplicates become conflicts; every other store failure is reported as
    /// a bad request.
    pub fn into_app_error(self) -> AppError {
        match self {
            StoreError::Duplicate(_) | StoreError::ProfileExists(_) => AppError::conflict(self),
            _ => AppError::bad_request(self),
        }
    }
}

/// Persistence for user records and their role profiles.
///
/// Each call is a single read or write; flows never need a transaction
/// spanning several calls. Email uniqueness is enforced by the store and
/// reported as [`StoreError::Duplicate`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Fails with [`StoreError::ProfileExists`] if the owner already has one.
    async fn insert_profile(&self, profile: &RoleProfile) -> Result<(), StoreError>;

    /// Sets the password hash of the user with `email`, but only while the
    /// account has no password yet. The check and the write are one atomic
    /// step. Returns `None` if no such user exists or a password is already
    /// set.
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError>;

    async fn find_profile(
        &self,
        role: UserRole,
        user_id: Uuid,
    ) -> Result<Option<RoleProfile>, StoreError>;

    async fn set_admin(&self, email: &str, admin: bool) -> Result<Option<User>, StoreError>;
}
