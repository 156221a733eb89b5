//! The owned view state and its load state machine.
//!
//! Everything here is synchronous; the async controller drives it through
//! [`ViewState::begin_load`] and [`ViewState::complete_load`] while holding
//! the lock only around those calls.

use marquee_model::{CatalogPage, FilterSelection, Item};

use super::snapshot::{EmptyState, PaginationStatus, ViewSnapshot};
use crate::error::FetchError;
use crate::query::apply_selection;

/// Banner text after a failed page load.
pub const PAGE_LOAD_FAILED: &str = "Failed to load movies";

/// At most one page fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No fetch running.
    #[default]
    Idle,
    /// Fetching `page`.
    Loading {
        /// Page being fetched.
        page: u32,
    },
}

impl LoadState {
    /// Whether a fetch is running.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }
}

/// Proof that a fetch was admitted by the state machine.
///
/// Carries the search context captured when the load started so the fetch
/// does not have to read shared state again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    /// Page to fetch.
    pub page: u32,
    /// Trimmed search term; empty for discovery.
    pub query: String,
}

/// What became of a load request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The page was applied; `received` items arrived with it.
    #[allow(missing_docs)]
    Loaded { page: u32, received: usize },
    /// The fetch failed; items were left as they were.
    Failed(FetchError),
    /// A load was already in flight, nothing happened.
    Ignored,
    /// `load_more` with no further pages.
    Exhausted,
    /// The response arrived after a newer search was requested and was
    /// dropped in favour of that search.
    Superseded,
    /// The search was parked until the in-flight load completes.
    Deferred,
}

/// The controller's single record of what is held and shown.
#[derive(Debug, Clone)]
pub struct ViewState {
    items: Vec<Item>,
    current_page: u32,
    total_pages: u32,
    load_state: LoadState,
    query: String,
    selection: FilterSelection,
    display: Vec<Item>,
    banner: Option<String>,
    pending_search: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            load_state: LoadState::Idle,
            query: String::new(),
            selection: FilterSelection::default(),
            display: Vec::new(),
            banner: None,
            pending_search: None,
        }
    }
}

impl ViewState {
    /// Idle, empty, on page 1 of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated items in arrival order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items currently shown.
    pub fn display(&self) -> &[Item] {
        &self.display
    }

    /// Last page applied.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Pages the last response reported.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Current load state.
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Search term of the current context.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Filter controls as last applied.
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Page-level error, cleared when the next load starts.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Search parked behind the in-flight load.
    pub fn pending_search(&self) -> Option<&str> {
        self.pending_search.as_deref()
    }

    /// Whether `load_more` would fetch.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page `load_more` would request, or `None` when exhausted.
    pub fn next_page(&self) -> Option<u32> {
        self.has_more().then(|| self.current_page.saturating_add(1))
    }

    /// Set the search context used by subsequent loads.
    pub fn set_query(&mut self, term: &str) {
        self.query = term.trim().to_string();
    }

    /// `Idle -> Loading`. Returns `None` if a load is already in flight.
    pub fn begin_load(&mut self, page: u32) -> Option<LoadTicket> {
        if self.load_state.is_loading() {
            return None;
        }
        self.load_state = LoadState::Loading { page };
        self.banner = None;
        Some(LoadTicket {
            page,
            query: self.query.clone(),
        })
    }

    /// Fire a search now, or park it if a load is in flight.
    ///
    /// Only the latest parked search survives.
    pub fn request_search(&mut self, term: &str) -> Option<LoadTicket> {
        if self.load_state.is_loading() {
            self.pending_search = Some(term.trim().to_string());
            return None;
        }
        self.set_query(term);
        self.begin_load(1)
    }

    /// `Loading -> Idle`, applying or discarding the response.
    pub fn complete_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<CatalogPage, FetchError>,
    ) -> LoadOutcome {
        self.load_state = LoadState::Idle;

        if self.pending_search.is_some() {
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(page) => {
                let received = page.results.len();
                if ticket.page == 1 {
                    self.items = page.results;
                } else {
                    self.items.extend(page.results);
                }
                self.current_page = page.page;
                self.total_pages = page.total_pages;
                self.display = self.items.clone();
                LoadOutcome::Loaded {
                    page: ticket.page,
                    received,
                }
            }
            Err(error) => {
                self.banner = Some(PAGE_LOAD_FAILED.to_string());
                LoadOutcome::Failed(error)
            }
        }
    }

    /// Start the parked search, if any. Call only while idle.
    pub fn take_pending_search(&mut self) -> Option<LoadTicket> {
        let term = self.pending_search.take()?;
        self.set_query(&term);
        self.begin_load(1)
    }

    /// Project the held items through `selection`; never touches `items`.
    pub fn apply_filters(&mut self, selection: FilterSelection) {
        self.display = apply_selection(&self.items, &selection);
        self.selection = selection;
    }

    /// Back to `all / all / popularity`.
    pub fn clear_filters(&mut self) {
        self.apply_filters(FilterSelection::default());
    }

    /// Immutable projection for renderers.
    pub fn snapshot(&self) -> ViewSnapshot {
        let empty_state = if !self.display.is_empty() {
            None
        } else if self.items.is_empty() {
            Some(EmptyState::NoMovies)
        } else {
            Some(EmptyState::NoMatches)
        };

        ViewSnapshot {
            display: self.display.clone(),
            pagination: PaginationStatus::new(self.current_page, self.total_pages),
            loading: self.load_state.is_loading(),
            banner: self.banner.clone(),
            empty_state,
            item_count: self.items.len(),
            selection: self.selection.clone(),
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_model::{GenreFilter, SortBy, YearFilter};

    fn item(id: u64, title: &str, rating: Option<f32>) -> Item {
        Item {
            id,
            title: title.to_string(),
            vote_average: rating,
            ..Item::default()
        }
    }

    fn page(results: Vec<Item>, page: u32, total_pages: u32) -> CatalogPage {
        CatalogPage {
            results,
            page,
            total_pages,
            total_results: None,
        }
    }

    #[test]
    fn starts_idle_on_page_one_of_one() {
        let state = ViewState::new();
        assert_eq!(state.load_state(), LoadState::Idle);
        assert_eq!((state.current_page(), state.total_pages()), (1, 1));
        assert!(state.next_page().is_none());
    }

    #[test]
    fn second_begin_while_loading_is_rejected() {
        let mut state = ViewState::new();
        assert!(state.begin_load(1).is_some());
        assert!(state.begin_load(1).is_none());
        assert_eq!(state.load_state(), LoadState::Loading { page: 1 });
    }

    #[test]
    fn later_pages_append_in_order() {
        let mut state = ViewState::new();
        let first = state.begin_load(1).unwrap();
        state.complete_load(&first, Ok(page(vec![item(1, "a", None), item(2, "b", None)], 1, 3)));

        let next = state.next_page().unwrap();
        let ticket = state.begin_load(next).unwrap();
        let outcome = state.complete_load(&ticket, Ok(page(vec![item(3, "c", None)], 2, 3)));

        assert_eq!(outcome, LoadOutcome::Loaded { page: 2, received: 1 });
        let ids: Vec<u64> = state.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.display(), state.items());
    }

    #[test]
    fn failure_keeps_items_and_sets_banner() {
        let mut state = ViewState::new();
        let ticket = state.begin_load(1).unwrap();
        let outcome =
            state.complete_load(&ticket, Err(FetchError::new("discover/movie", "offline")));

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(state.items().is_empty());
        assert_eq!(state.banner(), Some(PAGE_LOAD_FAILED));
        assert_eq!(state.load_state(), LoadState::Idle);

        // The banner clears as soon as the next load starts
        state.begin_load(1).unwrap();
        assert!(state.banner().is_none());
    }

    #[test]
    fn parked_search_supersedes_in_flight_response() {
        let mut state = ViewState::new();
        let stale = state.begin_load(1).unwrap();
        assert!(state.request_search("first").is_none());
        assert!(state.request_search(" second ").is_none());

        let outcome = state.complete_load(&stale, Ok(page(vec![item(9, "old", None)], 1, 1)));
        assert_eq!(outcome, LoadOutcome::Superseded);
        assert!(state.items().is_empty());

        let ticket = state.take_pending_search().unwrap();
        assert_eq!(ticket, LoadTicket { page: 1, query: "second".into() });
        assert!(state.pending_search().is_none());
    }

    #[test]
    fn filters_project_without_mutating_items() {
        let mut state = ViewState::new();
        let ticket = state.begin_load(1).unwrap();
        state.complete_load(
            &ticket,
            Ok(page(vec![item(1, "A", Some(5.0)), item(2, "B", Some(8.0))], 1, 1)),
        );

        let by_rating =
            FilterSelection::new(GenreFilter::All, YearFilter::All, SortBy::Rating);
        state.apply_filters(by_rating.clone());
        let first: Vec<String> = state.display().iter().map(|i| i.title.clone()).collect();
        state.apply_filters(by_rating);
        let second: Vec<String> = state.display().iter().map(|i| i.title.clone()).collect();

        assert_eq!(first, vec!["B", "A"]);
        assert_eq!(first, second);
        assert_eq!(state.items()[0].title, "A");
    }

    #[test]
    fn empty_states_distinguish_no_items_from_no_matches() {
        let mut state = ViewState::new();
        assert_eq!(state.snapshot().empty_state, Some(EmptyState::NoMovies));

        let ticket = state.begin_load(1).unwrap();
        state.complete_load(&ticket, Ok(page(vec![item(1, "A", None)], 1, 1)));
        state.apply_filters(FilterSelection::new(
            GenreFilter::All,
            YearFilter::Year("1999".into()),
            SortBy::Popularity,
        ));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.empty_state, Some(EmptyState::NoMatches));
        assert_eq!(snapshot.item_count, 1);
    }
}
