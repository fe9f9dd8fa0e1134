//! Administrative commands for Unilink that are not exposed over HTTP.

use thiserror::Error;
use unilink_db::{AccountStore, StoreError};
use unilink_models::User;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("no user with email {0}")]
    UnknownUser(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Grants (or with `admin = false`, revokes) the admin flag on the account
/// registered under `email`.
pub async fn set_admin(
    store: &dyn AccountStore,
    email: &str,
    admin: bool,
) -> Result<User, AdminError> {
    store
        .set_admin(email, admin)
        .await?
        .ok_or_else(|| AdminError::UnknownUser(email.to_string()))
}
