//! Unit tests for the authentication gateway.

use std::sync::Arc;

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::{Claims, Subject};
use crate::domain::entities::NewUser;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::token::{TokenConfig, TokenService};

const TEST_SECRET: &str = "auth-test-secret";
// Minimum bcrypt cost; production cost would dominate test runtime.
const TEST_BCRYPT_COST: u32 = 4;

fn service() -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    service_with_ttl(60)
}

fn service_with_ttl(ttl_secs: i64) -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenConfig {
        secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: ttl_secs,
    }));
    (AuthService::new(Arc::clone(&users), tokens), users)
}

async fn register(users: &MockUserRepository, email: &str, password: &str) -> i64 {
    let user = users
        .create(NewUser {
            email: email.to_string(),
            password_hash: bcrypt::hash(password, TEST_BCRYPT_COST).unwrap(),
        })
        .await
        .unwrap();
    user.id
}

#[tokio::test]
async fn login_then_authorize_yields_the_same_user() {
    let (auth, users) = service();
    let user_id = register(&users, "a@x.com", "p1").await;

    let response = auth.login("a@x.com", "p1").await.unwrap();
    let authenticated = auth.authorize(&response.access_token).await.unwrap();

    assert_eq!(authenticated.id, user_id);
    assert_eq!(authenticated.email, "a@x.com");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let (auth, users) = service();
    register(&users, "a@x.com", "p1").await;

    let err = auth.login("a@x.com", "wrong").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_with_unknown_email_fails_identically() {
    let (auth, _) = service();

    let err = auth.login("missing@x.com", "p1").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn authorize_rejects_expired_token() {
    let (auth, users) = service_with_ttl(-10);
    register(&users, "a@x.com", "p1").await;

    let response = auth.login("a@x.com", "p1").await.unwrap();
    let err = auth.authorize(&response.access_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Expired)));
}

#[tokio::test]
async fn authorize_rejects_tampered_token() {
    let (auth, users) = service();
    register(&users, "a@x.com", "p1").await;

    let response = auth.login("a@x.com", "p1").await.unwrap();
    let original = response.access_token;
    let mut tampered: String = original[..original.len() - 1].to_string();
    tampered.push(if original.ends_with('A') { 'B' } else { 'A' });

    let err = auth.authorize(&tampered).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidToken)));
}

#[tokio::test]
async fn authorize_fails_for_vanished_user() {
    let (auth, _) = service();
    // A valid token whose subject never existed in the store.
    let tokens = TokenService::new(TokenConfig {
        secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: 60,
    });
    let now = chrono::Utc::now();
    let ghost = crate::domain::entities::User {
        id: 999,
        email: "ghost@x.com".to_string(),
        password_hash: String::new(),
        chain_name: None,
        created_at: now,
        updated_at: now,
    };
    let token = tokens.issue(&ghost).unwrap();

    let err = auth.authorize(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn authorize_accepts_string_subject() {
    let (auth, users) = service();
    let user_id = register(&users, "a@x.com", "p1").await;

    let mut claims = Claims::new(user_id, "a@x.com", 60);
    claims.sub = Subject::Text(user_id.to_string());
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let authenticated = auth.authorize(&token).await.unwrap();
    assert_eq!(authenticated.id, user_id);
}

#[tokio::test]
async fn authorize_rejects_malformed_subjects() {
    let (auth, users) = service();
    register(&users, "a@x.com", "p1").await;

    for sub in [
        Subject::Text("abc".to_string()),
        Subject::Text("-1".to_string()),
        Subject::Id(0),
        Subject::Other(serde_json::json!({"id": 1})),
    ] {
        let mut claims = Claims::new(1, "a@x.com", 60);
        claims.sub = sub;
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let err = auth.authorize(&token).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::MalformedClaim)));
    }
}

#[tokio::test]
async fn authorized_user_carries_no_password_hash() {
    let (auth, users) = service();
    register(&users, "a@x.com", "p1").await;

    let response = auth.login("a@x.com", "p1").await.unwrap();
    let authenticated = auth.authorize(&response.access_token).await.unwrap();

    let json = serde_json::to_value(&authenticated).unwrap();
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}
