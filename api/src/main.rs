use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hotelier_api::middleware::Authorizer;
use hotelier_api::{create_app, AppState};
use hotelier_core::services::{AuthService, PropertyService, TokenConfig, TokenService, UserService};
use hotelier_infra::database::{self, MySqlPropertyRepository, MySqlUserRepository};
use hotelier_infra::storage::LocalImageStore;
use hotelier_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(address = %config.server.bind_address(), "starting Hotelier API server");

    // Database pool and schema
    let pool = database::create_pool(&config.database)
        .await
        .context("failed to connect to MySQL")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    // Repositories and storage
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let property_repository = Arc::new(MySqlPropertyRepository::new(pool.clone()));
    let image_store = Arc::new(LocalImageStore::new(&config.storage.upload_dir));

    // Services
    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: config.auth.jwt_secret.clone(),
        access_token_ttl_secs: config.auth.access_token_ttl_secs,
    }));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        config.auth.bcrypt_cost,
    ));
    let property_service = Arc::new(PropertyService::new(
        Arc::clone(&property_repository),
        Arc::clone(&user_repository),
    ));

    let state = web::Data::new(AppState {
        auth_service: Arc::clone(&auth_service),
        user_service,
        property_service,
        image_store,
        storage: config.storage.clone(),
    });
    let authorizer: Arc<dyn Authorizer> = auth_service;
    let authorizer = web::Data::new(authorizer);

    let upload_dir = config.storage.upload_dir.clone();
    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), authorizer.clone(), upload_dir.clone())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    Ok(())
}
