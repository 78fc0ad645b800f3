//! Shared helpers for API integration tests: mock-backed application
//! state and raw multipart bodies.

use std::sync::Arc;

use actix_web::web;

use hotelier_api::middleware::Authorizer;
use hotelier_api::AppState;
use hotelier_core::repositories::{MockPropertyRepository, MockUserRepository};
use hotelier_core::services::storage::MockImageStore;
use hotelier_core::services::{
    AuthService, PropertyService, TokenConfig, TokenService, UserService,
};
use hotelier_shared::config::StorageConfig;

pub type TestState = AppState<MockUserRepository, MockPropertyRepository, MockImageStore>;

pub const TEST_SECRET: &str = "api-test-secret";
// Minimum bcrypt cost keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;
pub const TEST_MAX_IMAGE_BYTES: usize = 64 * 1024;

pub fn test_state() -> (web::Data<TestState>, web::Data<Arc<dyn Authorizer>>) {
    test_state_with_ttl(3600)
}

pub fn test_state_with_ttl(
    ttl_secs: i64,
) -> (web::Data<TestState>, web::Data<Arc<dyn Authorizer>>) {
    let users = Arc::new(MockUserRepository::new());
    let properties = Arc::new(MockPropertyRepository::new());
    let image_store = Arc::new(MockImageStore::new());

    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: TEST_SECRET.to_string(),
        access_token_ttl_secs: ttl_secs,
    }));
    let auth_service = Arc::new(AuthService::new(Arc::clone(&users), token_service));
    let user_service = Arc::new(UserService::new(Arc::clone(&users), TEST_BCRYPT_COST));
    let property_service = Arc::new(PropertyService::new(properties, Arc::clone(&users)));

    let state = web::Data::new(AppState {
        auth_service: Arc::clone(&auth_service),
        user_service,
        property_service,
        image_store,
        storage: StorageConfig {
            upload_dir: "uploads".to_string(),
            max_image_bytes: TEST_MAX_IMAGE_BYTES,
            max_images_per_property: 5,
        },
    });
    let authorizer: Arc<dyn Authorizer> = auth_service;
    (state, web::Data::new(authorizer))
}

pub const BOUNDARY: &str = "X-HOTELIER-TEST-BOUNDARY";

pub fn multipart_content_type() -> (&'static str, String) {
    (
        "content-type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}

/// Assemble a raw multipart body from text fields and PNG file parts.
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The text fields of a valid hotel creation form.
pub fn hotel_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("type", "hotel"),
        ("name", "Central"),
        ("address", "Calle 1"),
        ("city", "Bogotá"),
        ("employees", "10"),
        ("logoUrl", "http://x/logo.png"),
        ("location", r#"{"type":"Point","coordinates":[-74.07,4.71]}"#),
    ]
}

/// The text fields of a valid non-hotel (casa) creation form.
pub fn casa_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("type", "casa"),
        ("name", "Refugio"),
        ("address", "Carrera 9"),
        ("city", "Medellín"),
        ("price", "250000"),
        ("location", r#"{"type":"Point","coordinates":[-75.56,6.24]}"#),
    ]
}
