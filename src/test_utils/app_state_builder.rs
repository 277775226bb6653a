//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory mocks for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{PageRevalidator, WaitlistRepo, WaitlistUseCases},
    infra::{
        config::{AppConfig, DEFAULT_DATABASE_NAME, DEFAULT_WAITLIST_COLLECTION},
        page_cache::PageCache,
    },
    test_utils::InMemoryWaitlistRepo,
};

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: SecretString::new("mongodb://localhost:27017".into()),
        database_name: DEFAULT_DATABASE_NAME.to_string(),
        waitlist_collection: DEFAULT_WAITLIST_COLLECTION.to_string(),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        site_origin: Url::parse("https://nexconnectt.com").unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        log_file: "test.log".to_string(),
    }
}

/// Builder for an `AppState` backed by an in-memory waitlist.
#[derive(Default)]
pub struct TestAppStateBuilder {
    repo: Option<Arc<InMemoryWaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, repo: Arc<InMemoryWaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::new()));
        let page_cache = Arc::new(PageCache::new());

        let waitlist_use_cases = WaitlistUseCases::new(
            repo as Arc<dyn WaitlistRepo>,
            page_cache.clone() as Arc<dyn PageRevalidator>,
        );

        AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
            page_cache,
        }
    }
}
