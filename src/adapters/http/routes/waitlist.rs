//! Waitlist form and JSON submission routes.

use axum::{
    Form, Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    adapters::http::{
        app_state::AppState,
        views::{
            form::{WaitlistFormPresenter, WaitlistFormValues},
            templates::PageMeta,
        },
    },
    app_error::AppResult,
    use_cases::waitlist::{SubmissionResult, WaitlistSubmission},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", get(show_form).post(submit_form))
        .route("/api/waitlist", post(submit_json))
        .route("/api/waitlist/count", get(count))
}

/// GET /waitlist
async fn show_form(State(app_state): State<AppState>) -> Html<String> {
    let meta = PageMeta::waitlist(&app_state.config.site_origin);
    Html(WaitlistFormPresenter::new().render(&meta))
}

/// POST /waitlist
/// Browser form post. Answers with the re-rendered form (errors or failure
/// notice) or the confirmation view.
async fn submit_form(
    State(app_state): State<AppState>,
    Form(values): Form<WaitlistFormValues>,
) -> Html<String> {
    let meta = PageMeta::waitlist(&app_state.config.site_origin);
    let mut presenter = WaitlistFormPresenter::with_values(values);
    presenter.submit(&app_state.waitlist_use_cases).await;
    Html(presenter.render(&meta))
}

/// POST /api/waitlist
/// Business outcomes, including failures, come back as 200 with `success: false`.
async fn submit_json(
    State(app_state): State<AppState>,
    Json(payload): Json<WaitlistSubmission>,
) -> Json<SubmissionResult> {
    Json(app_state.waitlist_use_cases.submit(&payload).await)
}

#[derive(Serialize)]
struct CountResponse {
    count: u64,
}

/// GET /api/waitlist/count
async fn count(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = app_state.waitlist_use_cases.waitlist_size().await?;
    Ok(Json(CountResponse { count }))
}
