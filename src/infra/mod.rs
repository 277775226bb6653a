use secrecy::{ExposeSecret, SecretString};

use crate::{adapters::persistence::MongoPersistence, infra::config::AppConfig};

pub mod app;
pub mod config;
pub mod error;
pub mod page_cache;
pub mod setup;

/// Builds the store adapter. No connection is opened until the first query.
pub fn mongo_persistence(config: &AppConfig) -> MongoPersistence {
    MongoPersistence::new(
        SecretString::new(config.database_url.expose_secret().into()),
        &config.database_name,
        &config.waitlist_collection,
    )
}
