//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid submissions
//! - In-memory repository implementations for mocking persistence
//! - A builder for `AppState` wired to those mocks

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
