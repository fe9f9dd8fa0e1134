//! Role-specific profile records.
//!
//! Every user owns exactly one profile matching its role. The profile is
//! created empty at registration and filled in later by the profile editing
//! flows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use unilink_core::UserRole;

use crate::users::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProfessorProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A profile tagged with the role it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Student(StudentProfile),
    Professor(ProfessorProfile),
}

impl RoleProfile {
    /// The empty profile a freshly registered `user` starts with.
    pub fn empty_for(user: &User) -> Self {
        let now = Utc::now();
        let id = Uuid::new_v4();
        match user.role {
            UserRole::Student => RoleProfile::Student(StudentProfile {
                id,
                user_id: user.id,
                email: user.email.clone(),
                created_at: now,
                updated_at: now,
            }),
            UserRole::Professor => RoleProfile::Professor(ProfessorProfile {
                id,
                user_id: user.id,
                email: user.email.clone(),
                created_at: now,
                updated_at: now,
            }),
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Student(_) => UserRole::Student,
            RoleProfile::Professor(_) => UserRole::Professor,
        }
    }

    pub fn user_id(&self) -> Uuid {
        match self {
            RoleProfile::Student(p) => p.user_id,
            RoleProfile::Professor(p) => p.user_id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            RoleProfile::Student(p) => &p.email,
            RoleProfile::Professor(p) => &p.email,
        }
    }
}
