use axum::Json;
use axum::extract::State;
use tracing::instrument;

use unilink_core::AppError;
use unilink_models::{ProfessorProfile, RoleProfile, StudentProfile};

use super::service::ProfileService;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireProfessor, RequireStudent};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// Get the role profile of the authenticated user
#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Student or professor profile, tagged with `role`"),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip_all, fields(user = %auth_user.email()))]
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<RoleProfile>, AppError> {
    let profile =
        ProfileService::find_profile(state.store.as_ref(), auth_user.role(), auth_user.user_id()?)
            .await?;
    Ok(Json(profile))
}

/// Get the professor profile of the authenticated professor
#[utoipa::path(
    get,
    path = "/api/professors/profile",
    responses(
        (status = 200, description = "Professor profile", body = ProfessorProfile),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse),
        (status = 403, description = "Token was not issued to a professor", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip_all, fields(user = %auth_user.email()))]
pub async fn get_professor_profile(
    State(state): State<AppState>,
    RequireProfessor(auth_user): RequireProfessor,
) -> Result<Json<ProfessorProfile>, AppError> {
    let profile =
        ProfileService::professor_profile(state.store.as_ref(), auth_user.user_id()?).await?;
    Ok(Json(profile))
}

/// Get the student profile of the authenticated student
#[utoipa::path(
    get,
    path = "/api/students/profile",
    responses(
        (status = 200, description = "Student profile", body = StudentProfile),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse),
        (status = 403, description = "Token was not issued to a student", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Profiles"
)]
#[instrument(skip_all, fields(user = %auth_user.email()))]
pub async fn get_student_profile(
    State(state): State<AppState>,
    RequireStudent(auth_user): RequireStudent,
) -> Result<Json<StudentProfile>, AppError> {
    let profile =
        ProfileService::student_profile(state.store.as_ref(), auth_user.user_id()?).await?;
    Ok(Json(profile))
}
