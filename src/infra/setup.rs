use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, error::InfraError, mongo_persistence, page_cache::PageCache},
    use_cases::waitlist::{PageRevalidator, WaitlistRepo, WaitlistUseCases},
};
use std::fs::{File, OpenOptions};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> AppState {
    let persistence = Arc::new(mongo_persistence(&config));
    let page_cache = Arc::new(PageCache::new());

    let waitlist_use_cases = WaitlistUseCases::new(
        persistence as Arc<dyn WaitlistRepo>,
        page_cache.clone() as Arc<dyn PageRevalidator>,
    );

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        page_cache,
    }
}

pub fn init_tracing(log_file: &str) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bandhan_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = open_log_file(log_file)?;
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
    Ok(())
}

fn open_log_file(path: &str) -> Result<File, InfraError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| InfraError::LogFile {
            path: path.to_string(),
            source,
        })
}
