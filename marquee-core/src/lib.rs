//! # Marquee Core
//!
//! Core library for Marquee, a movie catalog browser backed by the TMDB API.
//!
//! ## Overview
//!
//! - **Catalog queries**: the [`CatalogProvider`] trait and its TMDB HTTP
//!   implementation, covering discovery, text search and detail lookups
//! - **View state**: a [`ViewController`] that owns the accumulated working
//!   set, pagination position and load state, and publishes immutable
//!   snapshots for rendering
//! - **Query engine**: client-side filtering and stable field sorting over
//!   the items already held
//! - **Debounce**: a cancellable delayed trigger for search-as-you-type
//! - **Preferences**: the persisted light/dark theme flag
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marquee_core::{TmdbCatalog, ViewController};
//!
//! # async fn run() {
//! let catalog = TmdbCatalog::default().with_api_key("secret");
//! let controller = ViewController::new(Arc::new(catalog));
//!
//! controller.load_movies(1).await;
//! controller.apply_filter_controls("Horror", "all", "rating").ok();
//!
//! for item in controller.snapshot().display {
//!     println!("{}", item.title);
//! }
//! # }
//! ```

pub mod catalog;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod preferences;
pub mod query;

pub use catalog::{CatalogProvider, TmdbCatalog};
pub use controller::{
    EmptyState, LoadOutcome, LoadState, Notice, PaginationStatus, ViewController,
    ViewSnapshot, ViewState,
};
pub use debounce::{DEFAULT_SEARCH_DEBOUNCE, Debouncer};
pub use error::{FetchError, FilterParseError, PreferenceError};
pub use preferences::PreferenceStore;

pub use marquee_model as model;
