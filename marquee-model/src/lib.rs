//! Core data model definitions shared across Marquee crates.

pub mod display;
/// Input interpretation errors.
pub mod error;
pub mod filter_types;
/// The TMDB movie genre table.
pub mod genres;
pub mod item;
/// Light/dark theme preference.
pub mod theme;

// Intentionally curated re-exports for downstream consumers.
pub use display::{
    DEFAULT_IMAGE_BASE_URL, DETAIL_PLACEHOLDER_URL, GRID_PLACEHOLDER_URL, ImageUrls, NOT_AVAILABLE,
    NO_OVERVIEW, load_more_label, overview_text, rating_label, runtime_label,
    year_label,
};
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{FilterSelection, GenreFilter, SortBy, YearFilter};
pub use genres::MovieGenre;
pub use item::{CatalogPage, GenreInfo, Item, ItemDetail, ItemId};
pub use theme::Theme;
