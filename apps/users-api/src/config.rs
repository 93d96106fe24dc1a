use core_config::{
    AppInfo, FromEnv, app_info, cors::CorsConfig, env_or_default, env_parse,
    server::ServerConfig,
};
use strum::{Display, EnumString};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Backing store for the users collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreKind {
    Mongodb,
    /// Process-local map, lost on restart
    Memory,
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub cors: CorsConfig,
    pub store: StoreKind,
    /// Present only when `store` is [`StoreKind::Mongodb`]
    pub mongodb: Option<MongoConfig>,
    pub users_collection: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let store: StoreKind = env_parse("USERS_STORE", "mongodb")?;

        let mongodb = match store {
            StoreKind::Mongodb => Some(MongoConfig::from_env()?.with_app_name(app_info!().name)),
            StoreKind::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            cors,
            store,
            mongodb,
            users_collection: env_or_default(
                "MONGODB_USERS_COLLECTION",
                domain_users::mongodb::DEFAULT_COLLECTION,
            ),
        })
    }
}
