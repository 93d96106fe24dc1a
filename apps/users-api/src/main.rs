use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::InMemoryUserRepository;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, UserStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let store = match &config.mongodb {
        Some(mongodb) => {
            info!("Connecting to MongoDB at {}", mongodb.url());

            let client =
                database::mongodb::connect_from_config_with_retry(mongodb, None).await?;
            let db = client.database(mongodb.database());

            info!(
                database = mongodb.database(),
                collection = %config.users_collection,
                "Successfully connected to MongoDB"
            );
            UserStore::Mongo { client, db }
        }
        None => {
            warn!("USERS_STORE=memory: users are kept in process memory only");
            UserStore::Memory(InMemoryUserRepository::new())
        }
    };

    let state = AppState { config, store };

    let api_routes = api::routes(&state);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.cors,
        &state.config.environment,
    )?;

    let app = router.merge(health_router(state.config.app));

    info!("Starting Users API with production-ready shutdown (30s timeout)");

    let store = state.store.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let UserStore::Mongo { client, .. } = store {
                info!("Shutting down: closing MongoDB connections");
                client.shutdown().await;
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
