//! Fallback presentation for optional fields.

use crate::item::{Item, ItemDetail};

/// Image host used when none is configured.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Shown for any absent scalar field.
pub const NOT_AVAILABLE: &str = "N/A";
/// Shown when an item has no overview text.
pub const NO_OVERVIEW: &str = "No description available.";
/// Poster placeholder for grid cards.
pub const GRID_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/400x600/1f2937/ffffff?text=No+Image";
/// Larger poster placeholder for the detail view.
pub const DETAIL_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/500x750/1f2937/ffffff?text=No+Image";

/// One decimal place, e.g. `7.5`.
pub fn rating_label(vote_average: Option<f32>) -> String {
    vote_average
        .map(|rating| format!("{rating:.1}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// The release year or `N/A`.
pub fn year_label(release_year: Option<&str>) -> &str {
    release_year.unwrap_or(NOT_AVAILABLE)
}

/// `{h}h {m}m`; zero or absent runtimes are `N/A`.
pub fn runtime_label(runtime: Option<u32>) -> String {
    match runtime {
        Some(minutes) if minutes > 0 => {
            format!("{}h {}m", minutes / 60, minutes % 60)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// The overview, or a fixed message when it is blank.
pub fn overview_text(overview: Option<&str>) -> &str {
    overview
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(NO_OVERVIEW)
}

/// `None` once the last page is loaded.
pub fn load_more_label(current_page: u32, total_pages: u32) -> Option<String> {
    (current_page < total_pages)
        .then(|| format!("Load More ({current_page}/{total_pages})"))
}

/// Resolves poster paths against the image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String,
    grid_placeholder: String,
    detail_placeholder: String,
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageUrls {
    /// Resolver for `base` with the default placeholders.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            grid_placeholder: GRID_PLACEHOLDER_URL.to_string(),
            detail_placeholder: DETAIL_PLACEHOLDER_URL.to_string(),
        }
    }

    /// Replace the grid and detail placeholders.
    pub fn with_placeholders(
        mut self,
        grid: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        self.grid_placeholder = grid.into();
        self.detail_placeholder = detail.into();
        self
    }

    /// Image host prefix.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Grid poster URL for `item`.
    pub fn poster(&self, item: &Item) -> String {
        self.resolve(item.poster_path.as_deref(), &self.grid_placeholder)
    }

    /// Detail poster URL for `detail`.
    pub fn detail_poster(&self, detail: &ItemDetail) -> String {
        self.resolve(detail.poster_path.as_deref(), &self.detail_placeholder)
    }

    fn resolve(&self, path: Option<&str>, placeholder: &str) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}{}", self.base, path),
            None => placeholder.to_string(),
        }
    }
}
