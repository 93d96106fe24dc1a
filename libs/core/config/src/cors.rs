use crate::{ConfigError, FromEnv};

/// Allowed CORS origins for browser clients.
///
/// An empty list means "not configured"; callers decide whether that is
/// acceptable for the current [`Environment`](crate::Environment).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_configured(&self) -> bool {
        !self.allowed_origins.is_empty()
    }
}

impl FromEnv for CorsConfig {
    /// Reads the comma-separated `CORS_ALLOWED_ORIGIN`; unset yields an empty list.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_default();

        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { allowed_origins })
    }
}
