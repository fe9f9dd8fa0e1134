//! Password hashing and verification with bcrypt.
//!
//! Hashes are salted per call and use a fixed cost of [`PASSWORD_HASH_COST`].
//! The `_async` variants move the work onto tokio's blocking pool so a
//! request handler suspends while bcrypt runs.

use anyhow::anyhow;
use bcrypt::{hash, verify};

use crate::errors::AppError;

pub const PASSWORD_HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, PASSWORD_HASH_COST)
        .map_err(|e| AppError::bad_request(anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::bad_request(anyhow!("Failed to verify password: {}", e)))
}

pub async fn hash_password_async(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::bad_request(anyhow!("Password hashing task failed: {}", e)))?
}

pub async fn verify_password_async(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::bad_request(anyhow!("Password verification task failed: {}", e)))?
}
