//! View state controller.
//!
//! Owns the single [`ViewState`] and is the only thing that mutates it. UI
//! collaborators trigger operations and observe the result through snapshots
//! (`watch`) and one-shot notices (`broadcast`).
//!
//! The state lock is never held across an `.await`: a load takes a
//! [`LoadTicket`] under the lock, fetches without it, then reacquires it to
//! apply the response.

pub mod snapshot;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use marquee_model::{FilterSelection, ItemDetail, ItemId};
use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::catalog::CatalogProvider;
use crate::debounce::{DEFAULT_SEARCH_DEBOUNCE, Debouncer};
use crate::error::{FetchError, FilterParseError};

pub use snapshot::{EmptyState, Notice, PaginationStatus, ViewSnapshot};
pub use state::{LoadOutcome, LoadState, LoadTicket, PAGE_LOAD_FAILED, ViewState};

const NOTICE_CAPACITY: usize = 32;

/// Cheap to clone; clones share one state.
#[derive(Clone)]
pub struct ViewController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    provider: Arc<dyn CatalogProvider>,
    state: Mutex<ViewState>,
    snapshots: watch::Sender<ViewSnapshot>,
    notices: broadcast::Sender<Notice>,
    debouncer: Debouncer,
}

impl std::fmt::Debug for ViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("provider", &self.inner.provider.name())
            .field("state", &*self.inner.state.lock())
            .finish()
    }
}

impl ViewController {
    /// Controller with the default search debounce.
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self::with_debounce(provider, DEFAULT_SEARCH_DEBOUNCE)
    }

    /// Controller whose `search` waits `interval` of quiet.
    pub fn with_debounce(provider: Arc<dyn CatalogProvider>, interval: Duration) -> Self {
        let state = ViewState::new();
        let (snapshots, _) = watch::channel(state.snapshot());
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);

        Self {
            inner: Arc::new(ControllerInner {
                provider,
                state: Mutex::new(state),
                snapshots,
                notices,
                debouncer: Debouncer::new(interval),
            }),
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.snapshots.borrow().clone()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Receiver for one-shot notices published from now on.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.inner.notices.subscribe()
    }

    /// Run `f` against the current state without publishing.
    pub fn inspect<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.inner.state.lock())
    }

    /// Load `page` for the current search context.
    ///
    /// Returns [`LoadOutcome::Ignored`] without fetching when a load is
    /// already in flight. If a search was parked while this load ran, its
    /// page 1 is loaded before this returns and the outcome is
    /// [`LoadOutcome::Superseded`].
    pub async fn load_movies(&self, page: u32) -> LoadOutcome {
        let ticket = self.inner.state.lock().begin_load(page);
        let Some(ticket) = ticket else {
            debug!(page, "load already in flight, ignoring");
            return LoadOutcome::Ignored;
        };
        self.publish();
        self.drive(ticket).await
    }

    /// Load the next page, appending. No-op once the last page is held.
    pub async fn load_more(&self) -> LoadOutcome {
        let next = self.inner.state.lock().next_page();
        match next {
            Some(page) => self.load_movies(page).await,
            None => {
                debug!("no more pages to load");
                LoadOutcome::Exhausted
            }
        }
    }

    /// Debounced search: fires `term` once the quiet interval passes without
    /// another call. Must be called from within a tokio runtime.
    pub fn search(&self, term: impl Into<String>) {
        let controller = self.clone();
        let term = term.into();
        self.inner.debouncer.call(async move {
            controller.search_now(&term).await;
        });
    }

    /// Set the search context and load page 1 immediately.
    ///
    /// While a load is in flight the term is parked and
    /// [`LoadOutcome::Deferred`] is returned; the in-flight load picks it up.
    pub async fn search_now(&self, term: &str) -> LoadOutcome {
        let ticket = self.inner.state.lock().request_search(term);
        let Some(ticket) = ticket else {
            debug!(term, "load in flight, parking search");
            return LoadOutcome::Deferred;
        };
        info!(query = %ticket.query, "search fired");
        self.publish();
        self.drive(ticket).await
    }

    /// Project held items through `selection`. Never fetches.
    pub fn apply_filters(&self, selection: FilterSelection) {
        self.inner.state.lock().apply_filters(selection);
        self.publish();
    }

    /// Apply raw control values (`"all"`, genre id or name, year, sort key).
    pub fn apply_filter_controls(
        &self,
        genre: &str,
        year: &str,
        sort: &str,
    ) -> Result<(), FilterParseError> {
        let selection = FilterSelection::from_controls(genre, year, sort)?;
        self.apply_filters(selection);
        Ok(())
    }

    /// Reset the controls and show every held item by popularity.
    pub fn clear_filters(&self) {
        self.inner.state.lock().clear_filters();
        self.publish();
    }

    /// Fetch one detail record. Failures publish a notice and leave the grid
    /// as it was.
    pub async fn show_detail(&self, item_id: ItemId) -> Result<ItemDetail, FetchError> {
        match self.inner.provider.fetch_detail(item_id).await {
            Ok(detail) => Ok(detail),
            Err(error) => {
                warn!(item_id, %error, "detail load failed");
                self.notify(Notice::DetailLoadFailed {
                    item_id,
                    reason: error.reason().to_string(),
                });
                Err(error)
            }
        }
    }

    async fn drive(&self, mut ticket: LoadTicket) -> LoadOutcome {
        let mut first_outcome = None;
        loop {
            let result = self
                .inner
                .provider
                .fetch_page(&ticket.query, ticket.page)
                .await;

            let (applied, follow_up) = {
                let mut state = self.inner.state.lock();
                let applied = state.complete_load(&ticket, result);
                let follow_up = match applied {
                    LoadOutcome::Superseded => state.take_pending_search(),
                    _ => None,
                };
                (applied, follow_up)
            };

            match &applied {
                LoadOutcome::Loaded { page, received } => {
                    debug!(page, received, query = %ticket.query, "page applied");
                }
                LoadOutcome::Failed(error) => {
                    warn!(page = ticket.page, %error, "page load failed");
                    self.notify(Notice::PageLoadFailed {
                        page: ticket.page,
                        reason: error.reason().to_string(),
                    });
                }
                LoadOutcome::Superseded => {
                    debug!(page = ticket.page, "discarding stale response");
                }
                _ => {}
            }
            self.publish();

            // The first outcome is what this caller asked about.
            let outcome = first_outcome.get_or_insert(applied).clone();
            match follow_up {
                Some(next) => {
                    info!(query = %next.query, "loading superseding search");
                    ticket = next;
                }
                None => return outcome,
            }
        }
    }

    fn publish(&self) {
        let snapshot = self.inner.state.lock().snapshot();
        self.inner.snapshots.send_replace(snapshot);
    }

    fn notify(&self, notice: Notice) {
        // No subscribers is fine; notices are fire-and-forget.
        let _ = self.inner.notices.send(notice);
    }
}
