//! Static marketing pages, sitemap and liveness probe.

use axum::{
    Router,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Utc;

use crate::{
    adapters::http::{
        app_state::AppState,
        views::{
            sitemap::sitemap_xml,
            templates::{PageMeta, landing_page},
        },
    },
    use_cases::waitlist::HOME_PATH,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(HOME_PATH, get(home))
        .route("/sitemap.xml", get(sitemap))
        .route("/health", get(health))
}

/// GET /
/// Served from the page cache; rebuilt after each new waitlist entry.
async fn home(State(app_state): State<AppState>) -> Html<String> {
    if let Some(html) = app_state.page_cache.get(HOME_PATH) {
        return Html(html);
    }

    let meta = PageMeta::home(&app_state.config.site_origin);
    let generation = app_state.page_cache.generation();

    match app_state.waitlist_use_cases.waitlist_size().await {
        Ok(size) => {
            let html = landing_page(&meta, Some(size));
            app_state.page_cache.put(HOME_PATH, html.clone(), generation);
            Html(html)
        }
        Err(err) => {
            // Not cached, so the counter comes back once the store does.
            tracing::warn!(error = %err, "Rendering home page without waitlist counter");
            Html(landing_page(&meta, None))
        }
    }
}

/// GET /sitemap.xml
async fn sitemap(State(app_state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/xml")],
        sitemap_xml(&app_state.config.site_origin, Utc::now()),
    )
}

async fn health() -> &'static str {
    "ok"
}
