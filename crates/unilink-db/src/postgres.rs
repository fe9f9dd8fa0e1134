//! PostgreSQL account store.
//!
//! Queries are checked at runtime (`query_as`), so building the crate does not
//! need a live database. Schema lives in `migrations/`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use unilink_core::UserRole;
use unilink_models::{LinkedInIdentity, NewUser, ProfessorProfile, RoleProfile, StudentProfile, User};

use crate::store::{AccountStore, StoreError};

const USER_COLUMNS: &str = "id, email, password, role, admin, linkedin_profile_url, \
                            linkedin_access_token, created_at, updated_at";

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password: Option<String>,
    role: String,
    admin: bool,
    linkedin_profile_url: Option<String>,
    linkedin_access_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<UserRole>()
            .map_err(|e| StoreError::Corrupt(format!("user {}: {}", row.id, e)))?;

        let linkedin = if row.linkedin_profile_url.is_some() || row.linkedin_access_token.is_some() {
            Some(LinkedInIdentity {
                profile_url: row.linkedin_profile_url,
                access_token: row.linkedin_access_token,
            })
        } else {
            None
        };

        Ok(User {
            id: row.id,
            email: row.email,
            password: row.password,
            role,
            admin: row.admin,
            linkedin,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_user(row: Option<UserRow>) -> Result<Option<User>, StoreError> {
    row.map(User::try_from).transpose()
}

#[derive(Clone, Debug)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        into_user(row)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        into_user(row)
    }

    #[instrument(skip(self, user), fields(email = %user.email, role = %user.role))]
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let (profile_url, access_token) = match user.linkedin {
            Some(linkedin) => (linkedin.profile_url, linkedin.access_token),
            None => (None, None),
        };

        let result = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (id, email, password, role, admin, linkedin_profile_url, linkedin_access_token) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.as_str())
        .bind(user.admin)
        .bind(profile_url)
        .bind(access_token)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => User::try_from(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Duplicate(user.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, profile), fields(role = %profile.role(), user_id = %profile.user_id()))]
    async fn insert_profile(&self, profile: &RoleProfile) -> Result<(), StoreError> {
        let table = match profile {
            RoleProfile::Student(_) => "student_profiles",
            RoleProfile::Professor(_) => "professor_profiles",
        };
        let (id, user_id, email, created_at, updated_at) = match profile {
            RoleProfile::Student(p) => (p.id, p.user_id, &p.email, p.created_at, p.updated_at),
            RoleProfile::Professor(p) => (p.id, p.user_id, &p.email, p.created_at, p.updated_at),
        };

        let result = sqlx::query(&format!(
            "INSERT INTO {table} (id, user_id, email, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5)"
        ))
        .bind(id)
        .bind(user_id)
        .bind(email)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(StoreError::MissingOwner(user_id))
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::ProfileExists(user_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET password = $1, updated_at = NOW() \
             WHERE email = $2 AND (password IS NULL OR password = '') \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(password_hash)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        into_user(row)
    }

    #[instrument(skip(self))]
    async fn find_profile(
        &self,
        role: UserRole,
        user_id: Uuid,
    ) -> Result<Option<RoleProfile>, StoreError> {
        const PROFILE_COLUMNS: &str = "id, user_id, email, created_at, updated_at";

        let profile = match role {
            UserRole::Student => sqlx::query_as::<_, StudentProfile>(&format!(
                "SELECT {PROFILE_COLUMNS} FROM student_profiles WHERE user_id = $1"
            ))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(RoleProfile::Student),
            UserRole::Professor => sqlx::query_as::<_, ProfessorProfile>(&format!(
                "SELECT {PROFILE_COLUMNS} FROM professor_profiles WHERE user_id = $1"
            ))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .map(RoleProfile::Professor),
        };

        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn set_admin(&self, email: &str, admin: bool) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET admin = $1, updated_at = NOW() WHERE email = $2 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(admin)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        into_user(row)
    }
}
