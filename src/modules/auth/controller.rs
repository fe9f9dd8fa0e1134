use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use tracing::instrument;
use utoipa::ToSchema;

use unilink_core::AppError;
use unilink_models::{
    ClientUser, LoginRequest, LoginResponse, RegisterOutcome, RegisterRequest, SessionResponse,
};

use super::service::{AuthService, SessionService};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register with email and password, or set the password of a LinkedIn account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ClientUser),
        (status = 200, description = "Password added to an existing LinkedIn account", body = ClientUser),
        (status = 400, description = "Bad request - malformed body, hashing or store failure", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ClientUser>), AppError> {
    match AuthService::register_user(state.store.as_ref(), dto).await? {
        RegisterOutcome::Created(user) => Ok((StatusCode::CREATED, Json(user))),
        RegisterOutcome::LinkedSocialAccount(user) => Ok((StatusCode::OK, Json(user))),
    }
}

/// Login and receive a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "User not found or incorrect password", body = ErrorResponse),
        (status = 403, description = "Role does not match the account", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(state.store.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Resolve the session token to the user it was issued to
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The authenticated user", body = SessionResponse),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorResponse),
        (status = 404, description = "The token's user no longer exists", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn get_session_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let user =
        SessionService::resolve_user(state.store.as_ref(), auth_header, &state.jwt_config).await?;

    Ok(Json(SessionResponse {
        user: ClientUser::from(user),
    }))
}
