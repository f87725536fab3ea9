//! People directory library.
//!
//! Fetches one page of users from a DummyJSON-compatible endpoint, projects
//! each user to a display record with a positional avatar URL, and publishes
//! the list for searching and detail views.

pub mod config;
pub mod domain;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
