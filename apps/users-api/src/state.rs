//! Application state management.
//!
//! Shared state passed to the route builders: configuration plus the
//! selected user store.

use domain_users::InMemoryUserRepository;
use mongodb::{Client, Database};

/// Store selected at startup
#[derive(Clone)]
pub enum UserStore {
    Mongo {
        /// Cloneable, shares the underlying connection pool
        client: Client,
        db: Database,
    },
    Memory(InMemoryUserRepository),
}

/// Shared application state (cheap to clone).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: UserStore,
}
