use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use unilink::router::init_router;
use unilink::state::AppState;
use unilink_config::{CorsConfig, JwtConfig};
use unilink_core::{UserRole, hash_password};
use unilink_db::{AccountStore, InMemoryAccountStore};
use unilink_models::{NewUser, RoleProfile, User};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

/// Unique per call; `SafeEmail` alone repeats within a test run.
#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    let email: String = SafeEmail().fake();
    format!("{}.{}", Uuid::new_v4().simple(), email)
}

#[allow(dead_code)]
pub fn setup_test_app() -> (Router, Arc<InMemoryAccountStore>) {
    let store = Arc::new(InMemoryAccountStore::new());
    let state = AppState::new(
        store.clone(),
        test_jwt_config(),
        CorsConfig::parse("http://localhost:5173"),
    );
    (init_router(state), store)
}

/// Inserts an account with a password and its empty role profile.
#[allow(dead_code)]
pub async fn create_test_user(
    store: &InMemoryAccountStore,
    email: &str,
    password: &str,
    role: UserRole,
) -> User {
    let hashed = hash_password(password).unwrap();
    let user = store
        .insert_user(NewUser::with_password(email, role, hashed))
        .await
        .unwrap();
    store
        .insert_profile(&RoleProfile::empty_for(&user))
        .await
        .unwrap();
    user
}

/// Inserts an account the LinkedIn sign-in flow would have produced.
#[allow(dead_code)]
pub async fn create_social_user(store: &InMemoryAccountStore, email: &str, role: UserRole) -> User {
    let user = store
        .insert_user(NewUser::social(
            email,
            role,
            "https://www.linkedin.com/in/test-user",
            "linkedin-access-token",
        ))
        .await
        .unwrap();
    store
        .insert_profile(&RoleProfile::empty_for(&user))
        .await
        .unwrap();
    user
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty or non-JSON body).
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
