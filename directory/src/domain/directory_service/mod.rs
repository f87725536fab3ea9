//! Fetch orchestration and list publishing.
//!
//! The service owns the only mutable state in the core: the published
//! [`DirectoryState`]. A load fetches through the [`UsersSource`] port,
//! validates the status, decodes, projects and assigns images, then replaces
//! the published list in one step. Subscribers receive every change through a
//! `tokio::sync::watch` channel and render on their own context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

use super::display::{DisplayRecord, project_all};
use super::error::{HttpError, LoadError};
use super::image_url::ImageUrlAssigner;
use super::page::decode_page;
use super::ports::UsersSource;

mod state;

pub use state::{DirectoryState, LoadStatus};

/// Loads the users page and publishes the directory state.
pub struct DirectoryService {
    source: Arc<dyn UsersSource>,
    assigner: ImageUrlAssigner,
    state: watch::Sender<DirectoryState>,
    generation: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl DirectoryService {
    /// Build a service with an empty published list.
    pub fn new(source: Arc<dyn UsersSource>, assigner: ImageUrlAssigner) -> Self {
        let (state, _) = watch::channel(DirectoryState::default());
        Self {
            source,
            assigner,
            state,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Observe every published state, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    /// Replace the search text and republish.
    pub fn set_query(&self, query: impl Into<String>) {
        let text = query.into();
        self.state.send_modify(|state| state.query = text);
    }

    /// Fetch, decode and publish the users page once.
    ///
    /// On success the published list is replaced and the number of records is
    /// returned. On failure the list is left as it was and the error is both
    /// returned and published as `last_error`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the transport fails, the status is outside
    /// `200..=299`, the body does not decode, or a newer load superseded this
    /// one (in which case nothing is published).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use directory::domain::ports::FixtureUsersSource;
    /// use directory::domain::{DirectoryService, ImageUrlAssigner};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), directory::domain::LoadError> {
    /// let service = DirectoryService::new(
    ///     Arc::new(FixtureUsersSource::default()),
    ///     ImageUrlAssigner::default(),
    /// );
    /// let count = service.load().await?;
    /// assert_eq!(count, 0);
    /// assert!(service.snapshot().last_error().is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(&self) -> Result<usize, LoadError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state
            .send_modify(|state| state.status = LoadStatus::Loading);
        debug!(generation, "users load started");

        let outcome = self.fetch_records().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded users load");
            return Err(LoadError::Superseded);
        }

        match outcome {
            Ok(records) => {
                let count = records.len();
                for record in &records {
                    debug!(
                        id = record.id().get(),
                        name = record.full_name(),
                        location = %record.location_line(),
                        "fetched user"
                    );
                }
                self.state.send_modify(|state| {
                    state.records = records;
                    state.status = LoadStatus::Finished;
                    state.last_error = None;
                });
                info!(count, "users load finished");
                Ok(count)
            }
            Err(error) => {
                warn!(%error, "users load failed");
                let published = error.clone();
                self.state.send_modify(|state| {
                    state.status = LoadStatus::Finished;
                    state.last_error = Some(published);
                });
                Err(error)
            }
        }
    }

    /// Run [`Self::load`] on the runtime, aborting any refresh still in flight.
    pub fn refresh(self: &Arc<Self>) -> JoinHandle<Result<usize, LoadError>> {
        let service = Arc::clone(self);
        let handle = tokio::spawn(async move { service.load().await });
        let superseded = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle.abort_handle());
        if let Some(task) = superseded {
            task.abort();
        }
        handle
    }

    /// Abort the in-flight refresh and discard any load still running.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = in_flight {
            task.abort();
        }
        self.state.send_if_modified(|state| {
            if state.status == LoadStatus::Loading {
                state.status = LoadStatus::Finished;
                state.last_error = Some(LoadError::Superseded);
                true
            } else {
                false
            }
        });
    }

    async fn fetch_records(&self) -> Result<Vec<DisplayRecord>, LoadError> {
        let response = self.source.fetch_users().await?;
        if let Some(error) = HttpError::from_status(response.status) {
            return Err(error.into());
        }
        let page = decode_page(&response.body)?;
        debug!(
            total = page.total,
            skip = page.skip,
            limit = page.limit,
            "users page decoded"
        );
        Ok(self.assigner.assign(project_all(&page.users)))
    }
}
