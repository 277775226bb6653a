//! In-memory mock implementations for waitlist-related traits.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{PageRevalidator, WaitlistRepo},
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// How `InMemoryWaitlistRepo::insert` should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertFailure {
    Unacknowledged,
    Unavailable,
}

/// In-memory implementation of WaitlistRepo for testing.
///
/// Enforces the unique email index the same way the real collection does.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    skip_lookup: bool,
    insert_failure: Option<InsertFailure>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with existing entries.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Make `find_by_email` always miss, as if a concurrent insert landed
    /// between the lookup and the write.
    pub fn without_lookup(mut self) -> Self {
        self.skip_lookup = true;
        self
    }

    pub fn failing_inserts(mut self, failure: InsertFailure) -> Self {
        self.insert_failure = Some(failure);
        self
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        if self.skip_lookup {
            return Ok(None);
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        match self.insert_failure {
            Some(InsertFailure::Unacknowledged) => return Err(AppError::Unacknowledged),
            Some(InsertFailure::Unavailable) => {
                return Err(AppError::Database("connection refused".into()));
            }
            None => {}
        }

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::DuplicateEntry);
        }
        entries.push(entry.clone());
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.entries.lock().unwrap().len() as u64)
    }
}

/// Records every revalidated path.
#[derive(Default)]
pub struct RecordingRevalidator {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingRevalidator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl PageRevalidator for RecordingRevalidator {
    fn revalidate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}
