//! # Auth Console
//!
//! Wires the in-memory adapters into the login and register views and runs
//! a scripted session against the mock backend.

use std::sync::Arc;

use ubik_core::AuthTokenStore;
use ubik_core::ports::Route;
use ubik_infra::{InMemoryKeyValueStore, MockGateway, RecordingNavigator};

mod config;
mod session;
mod telemetry;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(gateway = ?config.gateway, "Starting scripted session");

    let gateway = Arc::new(MockGateway::new(config.gateway.clone()));
    let navigator = Arc::new(RecordingNavigator::with_routes([
        Route::Home,
        Route::Register,
        Route::Login,
    ]));
    let tokens = AuthTokenStore::new(Arc::new(InMemoryKeyValueStore::new()));

    session::login(
        gateway.clone(),
        tokens.clone(),
        navigator.clone(),
        &config.demo_email,
        &config.demo_password,
    )
    .await;
    session::register_client(gateway.clone(), navigator.clone()).await;
    session::register_establishment(gateway, navigator.clone()).await;

    tokens.clear_auth_token().await?;

    tracing::info!(
        routes = ?navigator.history().await,
        authenticated = tokens.is_authenticated().await,
        "Session finished"
    );

    Ok(())
}
