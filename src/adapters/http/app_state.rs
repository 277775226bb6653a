use std::sync::Arc;

use crate::{
    infra::{config::AppConfig, page_cache::PageCache},
    use_cases::waitlist::WaitlistUseCases,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub page_cache: Arc<PageCache>,
}
