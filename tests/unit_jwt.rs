mod common;

use common::test_jwt_config;
use unilink_auth::{TokenError, create_access_token, create_token_with_ttl, verify_token};
use unilink_config::{DEFAULT_ACCESS_TOKEN_EXPIRY, JwtConfig};
use unilink_core::UserRole;
use uuid::Uuid;

#[test]
fn test_create_access_token_success() {
    let token = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        false,
        &test_jwt_config(),
    )
    .unwrap();

    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_verify_token_returns_original_claims() {
    let jwt_config = test_jwt_config();
    let user_id = Uuid::new_v4();

    for role in UserRole::ALL {
        let token =
            create_access_token(user_id, "test@example.com", role, true, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id(), Some(user_id));
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, role);
        assert!(claims.admin);
    }
}

#[test]
fn test_token_lifetime_defaults_to_four_hours() {
    let jwt_config = test_jwt_config();
    assert_eq!(jwt_config.access_token_expiry, 14400);
    assert_eq!(DEFAULT_ACCESS_TOKEN_EXPIRY, 14400);

    let token = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Professor,
        false,
        &jwt_config,
    )
    .unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.exp - claims.iat, 14400);
}

#[test]
fn test_verify_token_wrong_secret() {
    let token = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        false,
        &test_jwt_config(),
    )
    .unwrap();

    let other = JwtConfig::new("a_completely_different_secret");
    assert_eq!(verify_token(&token, &other).unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = test_jwt_config();
    let token = create_token_with_ttl(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        false,
        -60,
        &jwt_config,
    )
    .unwrap();

    assert_eq!(verify_token(&token, &jwt_config).unwrap_err(), TokenError::Expired);
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = test_jwt_config();

    for token in ["", "invalid.token.here", "not-a-jwt"] {
        assert_eq!(verify_token(token, &jwt_config).unwrap_err(), TokenError::Invalid);
    }
}

#[test]
fn test_verify_token_tampered_payload() {
    let jwt_config = test_jwt_config();
    let token = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Student,
        false,
        &jwt_config,
    )
    .unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    let forged = create_access_token(
        Uuid::new_v4(),
        "test@example.com",
        UserRole::Professor,
        true,
        &JwtConfig::new("attacker"),
    )
    .unwrap();
    let forged_payload = forged.split('.').nth(1).unwrap().to_string();
    parts[1] = &forged_payload;

    assert_eq!(
        verify_token(&parts.join("."), &jwt_config).unwrap_err(),
        TokenError::Invalid
    );
}
