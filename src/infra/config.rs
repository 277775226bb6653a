use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_DATABASE_NAME: &str = "desi-bandhan";
pub const DEFAULT_WAITLIST_COLLECTION: &str = "waitlist";
const DEFAULT_SITE_ORIGIN: &str = "https://nexconnectt.com";

pub struct AppConfig {
    /// Connection string for the document store. Required; startup aborts without it.
    pub database_url: SecretString,
    pub database_name: String,
    pub waitlist_collection: String,
    pub bind_addr: SocketAddr,
    /// Public origin used for canonical URLs, OpenGraph tags and the sitemap.
    pub site_origin: Url,
    pub cors_origin: HeaderValue,
    /// File receiving the JSON log stream.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: SecretString = SecretString::new(get_env::<String>("DATABASE_URL").into());
        let database_name: String =
            get_env_default("DATABASE_NAME", DEFAULT_DATABASE_NAME.to_string());
        let waitlist_collection: String =
            get_env_default("WAITLIST_COLLECTION", DEFAULT_WAITLIST_COLLECTION.to_string());

        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3000".parse().unwrap());
        let site_origin: Url = get_env_default("SITE_ORIGIN", Url::parse(DEFAULT_SITE_ORIGIN).unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            database_url,
            database_name,
            waitlist_collection,
            bind_addr,
            site_origin,
            cors_origin,
            log_file,
        }
    }
}
