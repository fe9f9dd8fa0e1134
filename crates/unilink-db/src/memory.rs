//! In-memory account store.
//!
//! Behaves like [`PgAccountStore`](crate::PgAccountStore), including the
//! email uniqueness constraint, but keeps everything in process. Used by the
//! test suite and by `ACCOUNT_STORE=memory` for local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use unilink_core::UserRole;
use unilink_models::{NewUser, RoleProfile, User};

use crate::store::{AccountStore, StoreError};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    profiles: HashMap<(UserRole, Uuid), RoleProfile>,
}

#[derive(Default)]
pub struct InMemoryAccountStore {
    tables: RwLock<Tables>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn profile_count(&self) -> usize {
        self.tables.read().await.profiles.len()
    }

    /// Deletes a user and its profiles, as the account deletion flow would.
    pub async fn remove_user(&self, id: Uuid) -> Option<User> {
        let mut tables = self.tables.write().await;
        tables.profiles.retain(|(_, user_id), _| *user_id != id);
        tables.users.remove(&id)
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(user.email));
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            email: user.email,
            password: user.password,
            role: user.role,
            admin: user.admin,
            linkedin: user.linkedin,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn insert_profile(&self, profile: &RoleProfile) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let user_id = profile.user_id();
        if !tables.users.contains_key(&user_id) {
            return Err(StoreError::MissingOwner(user_id));
        }
        // One profile per user, as the UNIQUE (user_id) columns enforce.
        if tables.profiles.keys().any(|(_, owner)| *owner == user_id) {
            return Err(StoreError::ProfileExists(user_id));
        }
        tables
            .profiles
            .insert((profile.role(), user_id), profile.clone());
        Ok(())
    }

    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .users
            .values_mut()
            .find(|u| u.email == email && !u.has_password())
            .map(|user| {
                user.password = Some(password_hash.to_string());
                user.updated_at = Utc::now();
                user.clone()
            }))
    }

    async fn find_profile(
        &self,
        role: UserRole,
        user_id: Uuid,
    ) -> Result<Option<RoleProfile>, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .profiles
            .get(&(role, user_id))
            .cloned())
    }

    async fn set_admin(&self, email: &str, admin: bool) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .users
            .values_mut()
            .find(|u| u.email == email)
            .map(|user| {
                user.admin = admin;
                user.updated_at = Utc::now();
                user.clone()
            }))
    }
}
