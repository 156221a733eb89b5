//! Immutable projections handed to whatever renders the view.

use std::fmt;

use marquee_model::{FilterSelection, Item, ItemId, load_more_label};

/// Where the working set stands in the remote listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationStatus {
    /// Last page applied.
    pub current_page: u32,
    /// Pages the API reported for this context.
    pub total_pages: u32,
    /// `current_page < total_pages`.
    pub has_more: bool,
}

impl PaginationStatus {
    /// Status for `current_page` of `total_pages`.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            has_more: current_page < total_pages,
        }
    }

    /// `"Load More (c/t)"` while more pages remain.
    pub fn load_more_label(&self) -> Option<String> {
        load_more_label(self.current_page, self.total_pages)
    }
}

/// Why the grid is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been loaded for the current context.
    NoMovies,
    /// Items are held but the active filters exclude all of them.
    NoMatches,
}

impl EmptyState {
    /// Text shown in place of the grid.
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoMovies => "No movies found",
            EmptyState::NoMatches => "No matching movies",
        }
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Items to show, in order.
    pub display: Vec<Item>,
    /// Pagination position and load-more availability.
    pub pagination: PaginationStatus,
    /// A page fetch is in flight.
    pub loading: bool,
    /// Page-level error that replaces the grid.
    pub banner: Option<String>,
    /// Set when `display` is empty.
    pub empty_state: Option<EmptyState>,
    /// Number of accumulated items, independent of filters.
    pub item_count: usize,
    /// Filter controls as last applied.
    pub selection: FilterSelection,
    /// Search term of the current context; empty for discovery.
    pub query: String,
}

/// One-shot, dismissable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A listing page could not be loaded.
    #[allow(missing_docs)]
    PageLoadFailed { page: u32, reason: String },
    /// A detail record could not be loaded.
    #[allow(missing_docs)]
    DetailLoadFailed { item_id: ItemId, reason: String },
}

impl Notice {
    /// User-facing text; the reason is for logs only.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PageLoadFailed { .. } => "Failed to load movies",
            Notice::DetailLoadFailed { .. } => "Failed to load movie details",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
