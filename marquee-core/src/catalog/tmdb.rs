//! TMDB v3 HTTP client.

use async_trait::async_trait;
use marquee_model::{CatalogPage, ItemDetail, ItemId};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::CatalogProvider;
use crate::error::FetchError;

/// Public TMDB v3 endpoint.
pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

const SEARCH_ENDPOINT: &str = "search/movie";
const DISCOVER_ENDPOINT: &str = "discover/movie";
const DISCOVER_SORT: &str = "popularity.desc";

/// HTTP client for the TMDB v3 movie endpoints.
///
/// Every call is a fresh round trip; nothing is cached and failures are
/// never retried.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Default for TmdbCatalog {
    fn default() -> Self {
        Self::new(TMDB_API_BASE)
    }
}

impl TmdbCatalog {
    /// Client for `base_url`; a trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    /// Send `api_key` with every request. An empty key sends none.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    /// Use a preconfigured `reqwest` client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Normalized API base.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, ?params, "TMDB request");

        let mut request = self.client.get(&url).query(params);
        if let Some(api_key) = &self.api_key {
            request = request.query(&[("api_key", api_key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::new(endpoint, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                endpoint,
                format!("TMDB API returned status: {status}"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(endpoint, format!("decode failed: {e}")))
    }
}

#[async_trait]
impl CatalogProvider for TmdbCatalog {
    async fn fetch_page(
        &self,
        search_term: &str,
        page: u32,
    ) -> Result<CatalogPage, FetchError> {
        let term = search_term.trim();
        let page_param = ("page", page.to_string());

        let result: Result<CatalogPage, FetchError> = if term.is_empty() {
            self.get_json(
                DISCOVER_ENDPOINT,
                &[("sort_by", DISCOVER_SORT.to_string()), page_param],
            )
            .await
        } else {
            self.get_json(SEARCH_ENDPOINT, &[("query", term.to_string()), page_param])
                .await
        };

        match &result {
            Ok(listing) => tracing::info!(
                term,
                page = listing.page,
                total_pages = listing.total_pages,
                results = listing.results.len(),
                "TMDB listing fetched"
            ),
            Err(e) => tracing::warn!(term, page, error = %e, "TMDB listing failed"),
        }
        result
    }

    async fn fetch_detail(&self, item_id: ItemId) -> Result<ItemDetail, FetchError> {
        let endpoint = format!("movie/{item_id}");
        let result: Result<ItemDetail, FetchError> = self.get_json(&endpoint, &[]).await;
        if let Err(e) = &result {
            tracing::warn!(item_id, error = %e, "TMDB detail fetch failed");
        }
        result
    }

    fn name(&self) -> &'static str {
        "TMDB"
    }
}
