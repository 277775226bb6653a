use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const ALREADY_ON_WAITLIST: &str = "This email is already on the waitlist.";
pub const JOINED_WAITLIST: &str = "You're on the waitlist!";
pub const WRITE_NOT_ACKNOWLEDGED: &str = "Failed to add to waitlist. Please try again later.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";

/// Path of the page that renders the waitlist counter.
pub const HOME_PATH: &str = "/";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    /// Fails with `DuplicateEntry` on a unique index violation and with
    /// `Unacknowledged` when the store did not confirm the write.
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()>;
    async fn count(&self) -> AppResult<u64>;
}

/// Drops cached renderings of a page so the next request sees fresh data.
pub trait PageRevalidator: Send + Sync {
    fn revalidate(&self, path: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubmission {
    pub email: String,
    #[serde(alias = "fullName")]
    pub name: String,
    pub date_of_birth: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub looking_for: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    revalidator: Arc<dyn PageRevalidator>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, revalidator: Arc<dyn PageRevalidator>) -> Self {
        Self { repo, revalidator }
    }

    /// Adds a person to the waitlist. Every failure is folded into the result.
    #[instrument(skip_all)]
    pub async fn submit(&self, submission: &WaitlistSubmission) -> SubmissionResult {
        if let Err(message) = check_schema(submission) {
            return SubmissionResult::failed(message);
        }

        match self.add_entry(submission).await {
            Ok(()) => {
                self.revalidator.revalidate(HOME_PATH);
                tracing::info!("Waitlist entry created");
                SubmissionResult::ok(JOINED_WAITLIST)
            }
            Err(AppError::DuplicateEntry) => SubmissionResult::failed(ALREADY_ON_WAITLIST),
            Err(AppError::Unacknowledged) => {
                tracing::warn!("Waitlist insert was not acknowledged");
                SubmissionResult::failed(WRITE_NOT_ACKNOWLEDGED)
            }
            Err(err) => {
                tracing::error!(error = %err, "Waitlist submission failed");
                SubmissionResult::failed(SOMETHING_WENT_WRONG)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn waitlist_size(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    async fn add_entry(&self, submission: &WaitlistSubmission) -> AppResult<()> {
        let email = normalize_email(&submission.email);

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEntry);
        }

        let full_name = submission.name.trim().to_string();
        let (first_name, last_name) = split_full_name(&full_name);
        let now = Utc::now();

        let entry = WaitlistEntry {
            email,
            full_name,
            first_name,
            last_name,
            date_of_birth: submission.date_of_birth.trim().to_string(),
            city: submission.city.trim().to_string(),
            state: submission.state.trim().to_string(),
            gender: submission.gender.trim().to_string(),
            looking_for: submission.looking_for.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.repo.insert(&entry).await
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Splits a trimmed full name at its first space.
pub fn split_full_name(full_name: &str) -> (Option<String>, Option<String>) {
    let (first, rest) = full_name.split_once(' ').unwrap_or((full_name, ""));
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    (non_empty(first), non_empty(rest))
}

fn check_schema(submission: &WaitlistSubmission) -> Result<(), &'static str> {
    if !is_valid_email(&submission.email) {
        return Err("Invalid email address");
    }
    let required = [
        (&submission.name, "Name is required"),
        (&submission.date_of_birth, "Date of birth is required"),
        (&submission.city, "City is required"),
        (&submission.state, "State is required"),
        (&submission.gender, "Gender is required"),
        (&submission.looking_for, "Looking for is required"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            return Err(message);
        }
    }
    Ok(())
}
