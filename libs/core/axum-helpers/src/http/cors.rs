use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, Environment, cors::CorsConfig};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Creates a CORS layer restricted to `origins`.
///
/// The layer allows the methods the API serves (GET, POST, PATCH, DELETE,
/// OPTIONS), the Content-Type and Accept headers, and caches preflight for 1 hour.
pub fn create_cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build the CORS layer for `environment` from `config`.
///
/// Without configured origins, development falls back to a permissive layer
/// and production is rejected.
pub fn cors_layer_from_config(
    config: &CorsConfig,
    environment: &Environment,
) -> Result<CorsLayer, ConfigError> {
    if !config.is_configured() {
        if environment.is_production() {
            return Err(ConfigError::MissingEnvVar(
                "CORS_ALLOWED_ORIGIN".to_string(),
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin in development");
        return Ok(create_permissive_cors_layer());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "CORS_ALLOWED_ORIGIN".to_string(),
                    details: format!("{origin}: {e}"),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("CORS configured with allowed origins: {:?}", config.allowed_origins);
    Ok(create_cors_layer(origins))
}
