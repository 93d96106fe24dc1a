//! Users API routes
//!
//! Wires the users domain to the store chosen at startup.

use axum::Router;
use domain_users::{MongoUserRepository, UserService, handlers};

use crate::state::{AppState, UserStore};

pub fn router(state: &AppState) -> Router {
    match &state.store {
        UserStore::Mongo { db, .. } => {
            let repository =
                MongoUserRepository::with_collection(db.clone(), &state.config.users_collection);
            handlers::router(UserService::new(repository))
        }
        UserStore::Memory(repository) => handlers::router(UserService::new(repository.clone())),
    }
}
