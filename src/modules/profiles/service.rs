use anyhow::anyhow;
use tracing::instrument;
use uuid::Uuid;

use unilink_core::{AppError, UserRole};
use unilink_db::{AccountStore, StoreError};
use unilink_models::{ProfessorProfile, RoleProfile, StudentProfile};

pub struct ProfileService;

impl ProfileService {
    /// Loads the profile `user_id` owns for `role`.
    #[instrument(skip(store))]
    pub async fn find_profile(
        store: &dyn AccountStore,
        role: UserRole,
        user_id: Uuid,
    ) -> Result<RoleProfile, AppError> {
        store
            .find_profile(role, user_id)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(|| AppError::not_found(anyhow!("Profile not found")))
    }

    pub async fn professor_profile(
        store: &dyn AccountStore,
        user_id: Uuid,
    ) -> Result<ProfessorProfile, AppError> {
        match Self::find_profile(store, UserRole::Professor, user_id).await? {
            RoleProfile::Professor(profile) => Ok(profile),
            RoleProfile::Student(_) => Err(AppError::not_found(anyhow!("Profile not found"))),
        }
    }

    pub async fn student_profile(
        store: &dyn AccountStore,
        user_id: Uuid,
    ) -> Result<StudentProfile, AppError> {
        match Self::find_profile(store, UserRole::Student, user_id).await? {
            RoleProfile::Student(profile) => Ok(profile),
            RoleProfile::Professor(_) => Err(AppError::not_found(anyhow!("Profile not found"))),
        }
    }
}
