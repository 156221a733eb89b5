//! Catalog query service: the only component that talks to the metadata API.

pub mod tmdb;

use async_trait::async_trait;
use marquee_model::{CatalogPage, ItemDetail, ItemId};

use crate::error::FetchError;

pub use tmdb::TmdbCatalog;

/// Source of listing pages and detail records.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch one page of listings.
    ///
    /// A non-empty (trimmed) `search_term` runs a text search, an empty one
    /// runs the popularity-ranked discovery listing. Pages start at 1.
    async fn fetch_page(
        &self,
        search_term: &str,
        page: u32,
    ) -> Result<CatalogPage, FetchError>;

    /// Fetch the full record for one item.
    async fn fetch_detail(&self, item_id: ItemId) -> Result<ItemDetail, FetchError>;

    /// Provider name used in logs.
    fn name(&self) -> &'static str;
}
