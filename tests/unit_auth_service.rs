mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use uuid::Uuid;

use common::{create_social_user, create_test_user, generate_unique_email, test_jwt_config};
use unilink::modules::auth::service::{AuthService, SessionService};
use unilink::modules::profiles::service::ProfileService;
use unilink_auth::{create_access_token, create_token_with_ttl, verify_token};
use unilink_core::{UserRole, verify_password};
use unilink_db::{AccountStore, InMemoryAccountStore, StoreError};
use unilink_models::{LoginRequest, NewUser, RegisterOutcome, RegisterRequest, RoleProfile, User};

fn register_request(email: &str, role: UserRole, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        role,
        password: password.to_string(),
    }
}

fn login_request(email: &str, role: UserRole, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        role,
        password: password.to_string(),
    }
}

/// Store whose every call fails like an unreachable database.
struct UnavailableStore;

#[async_trait]
impl AccountStore for UnavailableStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert_profile(&self, _profile: &RoleProfile) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update_password(
        &self,
        _email: &str,
        _password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_profile(
        &self,
        _role: UserRole,
        _user_id: Uuid,
    ) -> Result<Option<RoleProfile>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn set_admin(&self, _email: &str, _admin: bool) -> Result<Option<User>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[tokio::test]
async fn test_register_creates_user_and_profile() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();

    let outcome =
        AuthService::register_user(&store, register_request(&email, UserRole::Professor, "password123"))
            .await
            .unwrap();

    let RegisterOutcome::Created(client) = outcome else {
        panic!("expected a new account");
    };
    assert_eq!(client.email, email);
    assert_eq!(client.role, UserRole::Professor);
    assert!(client.has_password);
    assert!(!client.admin);

    assert_eq!(store.user_count().await, 1);
    assert_eq!(store.profile_count().await, 1);

    let profile = ProfileService::find_profile(&store, UserRole::Professor, client.id)
        .await
        .unwrap();
    assert!(matches!(profile, RoleProfile::Professor(_)));
    assert_eq!(profile.user_id(), client.id);
    assert_eq!(profile.email(), email);

    let stored = store.find_by_email(&email).await.unwrap().unwrap();
    let hash = stored.password.unwrap();
    assert_ne!(hash, "password123");
    assert!(verify_password("password123", &hash).unwrap());
}

#[tokio::test]
async fn test_register_student_creates_student_profile() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();

    let outcome =
        AuthService::register_user(&store, register_request(&email, UserRole::Student, "password123"))
            .await
            .unwrap();

    let student = ProfileService::student_profile(&store, outcome.user().id)
        .await
        .unwrap();
    assert_eq!(student.email, email);

    let err = ProfileService::professor_profile(&store, outcome.user().id)
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();

    AuthService::register_user(&store, register_request(&email, UserRole::Student, "password123"))
        .await
        .unwrap();

    let err =
        AuthService::register_user(&store, register_request(&email, UserRole::Student, "otherpass123"))
            .await
            .unwrap_err();

    assert_eq!(err.status, StatusCode::CONFLICT);
    assert_eq!(err.message(), "User already exists!");
    assert_eq!(store.user_count().await, 1);
    assert_eq!(store.profile_count().await, 1);
}

#[tokio::test]
async fn test_register_claims_social_account_then_login() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    let social = create_social_user(&store, &email, UserRole::Student).await;

    let outcome =
        AuthService::register_user(&store, register_request(&email, UserRole::Student, "newpassword1"))
            .await
            .unwrap();

    let RegisterOutcome::LinkedSocialAccount(client) = outcome else {
        panic!("expected the LinkedIn account to be claimed");
    };
    assert_eq!(client.id, social.id);
    assert!(client.has_password);
    assert_eq!(
        client.linkedin_profile_url.as_deref(),
        Some("https://www.linkedin.com/in/test-user")
    );
    assert_eq!(store.user_count().await, 1);

    let response = AuthService::login_user(
        &store,
        login_request(&email, UserRole::Student, "newpassword1"),
        &test_jwt_config(),
    )
    .await
    .unwrap();
    assert_eq!(response.user.id, social.id);
}

#[tokio::test]
async fn test_register_social_account_with_other_role_conflicts() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    create_social_user(&store, &email, UserRole::Professor).await;

    let err =
        AuthService::register_user(&store, register_request(&email, UserRole::Student, "password123"))
            .await
            .unwrap_err();

    assert_eq!(err.status, StatusCode::CONFLICT);
    assert_eq!(err.message(), "User already exists as a professor!");

    let stored = store.find_by_email(&email).await.unwrap().unwrap();
    assert!(!stored.has_password());
}

#[tokio::test]
async fn test_register_claimed_social_account_twice_conflicts() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    create_social_user(&store, &email, UserRole::Student).await;

    AuthService::register_user(&store, register_request(&email, UserRole::Student, "password123"))
        .await
        .unwrap();

    let err =
        AuthService::register_user(&store, register_request(&email, UserRole::Student, "hijacked123"))
            .await
            .unwrap_err();
    assert_eq!(err.status, StatusCode::CONFLICT);

    // The first password still works.
    AuthService::login_user(
        &store,
        login_request(&email, UserRole::Student, "password123"),
        &test_jwt_config(),
    )
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_claims_of_social_account_only_one_wins() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    create_social_user(&store, &email, UserRole::Student).await;

    let (first, second) = tokio::join!(
        AuthService::register_user(
            &store,
            register_request(&email, UserRole::Student, "owner-password1")
        ),
        AuthService::register_user(
            &store,
            register_request(&email, UserRole::Student, "rival-password1")
        ),
    );

    let (winner_password, loser) = match (first, second) {
        (Ok(RegisterOutcome::LinkedSocialAccount(_)), Err(err)) => ("owner-password1", err),
        (Err(err), Ok(RegisterOutcome::LinkedSocialAccount(_))) => ("rival-password1", err),
        (first, second) => panic!("expected exactly one claim to succeed: {first:?} / {second:?}"),
    };
    assert_eq!(loser.status, StatusCode::CONFLICT);

    let stored = store.find_by_email(&email).await.unwrap().unwrap();
    assert!(verify_password(winner_password, stored.password.as_deref().unwrap()).unwrap());
}

#[tokio::test]
async fn test_register_store_failure_is_bad_request() {
    let err = AuthService::register_user(
        &UnavailableStore,
        register_request("ada@uni.edu", UserRole::Student, "password123"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_returns_token_and_client_user() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    let user = create_test_user(&store, &email, "password123", UserRole::Professor).await;
    let jwt_config = test_jwt_config();

    let response = AuthService::login_user(
        &store,
        login_request(&email, UserRole::Professor, "password123"),
        &jwt_config,
    )
    .await
    .unwrap();

    let claims = verify_token(&response.access_token, &jwt_config).unwrap();
    assert_eq!(claims.user_id(), Some(user.id));
    assert_eq!(claims.email, email);
    assert_eq!(claims.role, UserRole::Professor);
    assert!(!claims.admin);
    assert_eq!(claims.exp - claims.iat, 14400);

    let body = serde_json::to_value(&response.user).unwrap();
    assert!(body.get("password").is_none());
    assert!(body.get("linkedin_access_token").is_none());
    assert_eq!(body["email"], email);
}

#[tokio::test]
async fn test_login_unknown_email_is_unauthorized() {
    let store = InMemoryAccountStore::new();

    let err = AuthService::login_user(
        &store,
        login_request("nobody@uni.edu", UserRole::Student, "password123"),
        &test_jwt_config(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message(), "User not found!");
}

#[tokio::test]
async fn test_login_role_mismatch_is_forbidden() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    create_test_user(&store, &email, "password123", UserRole::Student).await;

    let err = AuthService::login_user(
        &store,
        login_request(&email, UserRole::Professor, "password123"),
        &test_jwt_config(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status, StatusCode::FORBIDDEN);
    assert_eq!(err.message(), "Unauthorized access denied!");
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    create_test_user(&store, &email, "password123", UserRole::Student).await;

    let err = AuthService::login_user(
        &store,
        login_request(&email, UserRole::Student, "wrongpassword"),
        &test_jwt_config(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message(), "Incorrect password!");
}

#[tokio::test]
async fn test_login_social_only_account_is_unauthorized() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    create_social_user(&store, &email, UserRole::Student).await;

    let err = AuthService::login_user(
        &store,
        login_request(&email, UserRole::Student, "password123"),
        &test_jwt_config(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_without_header_is_unauthorized() {
    let store = InMemoryAccountStore::new();

    let err = SessionService::resolve_user(&store, None, &test_jwt_config())
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message(), "No token provided!");
}

#[tokio::test]
async fn test_session_expired_token_is_unauthorized() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    let user = create_test_user(&store, &email, "password123", UserRole::Student).await;
    let jwt_config = test_jwt_config();

    let token =
        create_token_with_ttl(user.id, &email, UserRole::Student, false, -60, &jwt_config).unwrap();
    let header = format!("Bearer {token}");

    let err = SessionService::resolve_user(&store, Some(&header), &jwt_config)
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_deleted_user_is_not_found() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    let user = create_test_user(&store, &email, "password123", UserRole::Professor).await;
    let jwt_config = test_jwt_config();

    let token =
        create_access_token(user.id, &email, UserRole::Professor, false, &jwt_config).unwrap();
    store.remove_user(user.id).await;

    let err = SessionService::resolve_user(&store, Some(&token), &jwt_config)
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_resolves_user_with_raw_and_bearer_token() {
    let store = InMemoryAccountStore::new();
    let email = generate_unique_email();
    let user = create_test_user(&store, &email, "password123", UserRole::Student).await;
    let jwt_config = test_jwt_config();

    let token =
        create_access_token(user.id, &email, UserRole::Student, false, &jwt_config).unwrap();

    for header in [token.clone(), format!("Bearer {token}")] {
        let resolved = SessionService::resolve_user(&store, Some(&header), &jwt_config)
            .await
            .unwrap();
        assert_eq!(resolved.id, user.id);
    }
}
