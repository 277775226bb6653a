use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::use_cases::waitlist::PageRevalidator;

/// Rendered HTML kept per path until something revalidates it.
///
/// Every revalidation bumps a generation counter. A render that started
/// before the bump is not stored, so a page built from stale data cannot
/// outlive the revalidation that raced it.
#[derive(Default)]
pub struct PageCache {
    pages: RwLock<HashMap<String, String>>,
    generation: AtomicU64,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.pages
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(path)
            .cloned()
    }

    /// Current generation; pass it back to `put` once rendering is done.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Stores a page unless a revalidation happened since `rendered_at`.
    pub fn put(&self, path: &str, html: String, rendered_at: u64) -> bool {
        let mut pages = self
            .pages
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.generation.load(Ordering::Acquire) != rendered_at {
            return false;
        }
        pages.insert(path.to_string(), html);
        true
    }
}

impl PageRevalidator for PageCache {
    fn revalidate(&self, path: &str) {
        let mut pages = self
            .pages
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.generation.fetch_add(1, Ordering::AcqRel);
        let removed = pages.remove(path).is_some();
        tracing::debug!(path, removed, "Revalidated page");
    }
}
