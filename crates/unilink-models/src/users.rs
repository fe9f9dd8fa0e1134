//! User domain models.
//!
//! A [`User`] is keyed by its email. Accounts created through LinkedIn carry a
//! [`LinkedInIdentity`] and no password until the owner registers with email
//! and password, which links the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use unilink_core::UserRole;

/// What the LinkedIn sign-in flow recorded for an account.
///
/// Both fields are optional because the OAuth flow may have stored only part
/// of the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInIdentity {
    pub profile_url: Option<String>,
    pub access_token: Option<String>,
}

impl LinkedInIdentity {
    pub fn has_profile_url(&self) -> bool {
        self.profile_url.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.has_profile_url() && self.has_access_token()
    }
}

/// A user record as stored. Holds the password hash, so it never leaves the
/// server as-is; see [`ClientUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: Option<String>,
    pub role: UserRole,
    pub admin: bool,
    pub linkedin: Option<LinkedInIdentity>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// True when a LinkedIn profile URL was recorded for this account.
    pub fn has_linkedin_profile(&self) -> bool {
        self.linkedin
            .as_ref()
            .is_some_and(LinkedInIdentity::has_profile_url)
    }

    /// A LinkedIn account with both federated fields and no password.
    pub fn is_social_only(&self) -> bool {
        !self.has_password()
            && self
                .linkedin
                .as_ref()
                .is_some_and(LinkedInIdentity::is_complete)
    }

    /// Whether an email/password registration for `role` may take over this
    /// social-only account by setting its password.
    pub fn can_be_claimed_as(&self, role: UserRole) -> bool {
        self.role == role && self.is_social_only()
    }
}

/// Fields needed to insert a user; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: Option<String>,
    pub role: UserRole,
    pub admin: bool,
    pub linkedin: Option<LinkedInIdentity>,
}

impl NewUser {
    pub fn with_password(email: impl Into<String>, role: UserRole, hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(hash.into()),
            role,
            admin: false,
            linkedin: None,
        }
    }

    /// An account as the LinkedIn sign-in flow would have created it.
    pub fn social(
        email: impl Into<String>,
        role: UserRole,
        profile_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: None,
            role,
            admin: false,
            linkedin: Some(LinkedInIdentity {
                profile_url: Some(profile_url.into()),
                access_token: Some(access_token.into()),
            }),
        }
    }
}

/// Client-safe projection of a [`User`]: no password hash, no LinkedIn
/// access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub admin: bool,
    pub has_password: bool,
    pub linkedin_profile_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for ClientUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            admin: user.admin,
            has_password: user.has_password(),
            linkedin_profile_url: user.linkedin.as_ref().and_then(|l| l.profile_url.clone()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for ClientUser {
    fn from(user: User) -> Self {
        ClientUser::from(&user)
    }
}
