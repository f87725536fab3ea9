//! Published directory state observed by the presentation layer.

use crate::domain::display::DisplayRecord;
use crate::domain::error::LoadError;
use crate::domain::search::filter_by_name;
use crate::domain::user::UserId;

/// Progress of the most recent load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load has been started yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The latest load finished, successfully or not.
    Finished,
}

/// Snapshot of everything a subscriber renders.
///
/// `records` is only ever replaced wholesale by a successful load; failures
/// leave it untouched and set `last_error` instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryState {
    pub(super) records: Vec<DisplayRecord>,
    pub(super) query: String,
    pub(super) status: LoadStatus,
    pub(super) last_error: Option<LoadError>,
}

impl DirectoryState {
    /// The full published list in arrival order.
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// Current search text as entered.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Progress of the latest load.
    pub const fn status(&self) -> LoadStatus {
        self.status
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Error reported by the latest finished load, if it failed.
    pub const fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// Records matching the current query, borrowed from the published list.
    pub fn visible(&self) -> Vec<&DisplayRecord> {
        filter_by_name(&self.records, &self.query)
    }

    /// Look up a published record by id for selection.
    pub fn find(&self, id: UserId) -> Option<&DisplayRecord> {
        self.records.iter().find(|record| record.id() == id)
    }
}
