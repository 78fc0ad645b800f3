//! Unit tests for the token service.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::{Claims, Subject, JWT_ISSUER};
use crate::domain::entities::User;
use crate::errors::AuthError;
use crate::services::token::{TokenConfig, TokenService};

const TEST_SECRET: &str = "unit-test-secret";

fn test_user(id: i64) -> User {
    let now = Utc::now();
    User {
        id,
        email: format!("user{id}@example.com"),
        password_hash: "$2b$04$unused".to_string(),
        chain_name: None,
        created_at: now,
        updated_at: now,
    }
}

fn service_with_ttl(ttl_secs: i64) -> TokenService {
    TokenService::new(TokenConfig {
        secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: ttl_secs,
    })
}

/// Encode claims with the test secret, bypassing the service.
fn sign_raw(claims: &Claims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[test]
fn issue_then_verify_round_trips_the_claim() {
    let service = service_with_ttl(60);
    let user = test_user(42);

    let token = service.issue(&user).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, Subject::Id(42));
    assert_eq!(claims.sub.normalize(), Ok(42));
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.iss, JWT_ISSUER);
}

#[test]
fn expired_token_is_rejected_as_expired() {
    let service = service_with_ttl(-10);
    let token = service.issue(&test_user(1)).unwrap();

    assert_eq!(service.verify(&token), Err(AuthError::Expired));
}

#[test]
fn tampered_signature_is_rejected_as_invalid() {
    let service = service_with_ttl(60);
    let token = service.issue(&test_user(1)).unwrap();

    // Flip the last character of the signature segment.
    let mut tampered: String = token[..token.len() - 1].to_string();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

    assert_eq!(service.verify(&tampered), Err(AuthError::InvalidToken));
}

#[test]
fn garbage_is_rejected_as_invalid() {
    let service = service_with_ttl(60);
    assert_eq!(service.verify("not-a-token"), Err(AuthError::InvalidToken));
    assert_eq!(service.verify(""), Err(AuthError::InvalidToken));
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let service = service_with_ttl(60);
    let other = TokenService::new(TokenConfig {
        secret: "a-different-secret".to_string(),
        access_token_ttl_secs: 60,
    });

    let token = other.issue(&test_user(1)).unwrap();
    assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
}

#[test]
fn string_subject_verifies_and_normalizes() {
    let service = service_with_ttl(60);
    let mut claims = Claims::new(42, "a@x.com", 60);
    claims.sub = Subject::Text("42".to_string());

    let verified = service.verify(&sign_raw(&claims)).unwrap();
    assert_eq!(verified.sub.normalize(), Ok(42));
}

#[test]
fn non_numeric_subject_still_verifies_but_fails_normalization() {
    // Signature and expiry checks pass; the claim itself is malformed.
    let service = service_with_ttl(60);
    let mut claims = Claims::new(42, "a@x.com", 60);
    claims.sub = Subject::Text("forty-two".to_string());

    let verified = service.verify(&sign_raw(&claims)).unwrap();
    assert_eq!(verified.sub.normalize(), Err(AuthError::MalformedClaim));
}
