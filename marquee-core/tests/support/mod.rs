#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use marquee_core::{CatalogProvider, FetchError};
use marquee_model::{CatalogPage, Item, ItemDetail, ItemId};
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// Scripted catalog: responses are keyed by `(query, page)`, every call is
/// recorded, and fetches can be held in flight until released.
#[derive(Default)]
pub struct StubCatalog {
    pages: Mutex<HashMap<(String, u32), Result<CatalogPage, FetchError>>>,
    details: Mutex<HashMap<ItemId, Result<ItemDetail, FetchError>>>,
    calls: Mutex<Vec<(String, u32)>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl StubCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, query: &str, page: u32, response: CatalogPage) {
        self.pages
            .lock()
            .insert((query.to_string(), page), Ok(response));
    }

    pub fn fail(&self, query: &str, page: u32) {
        self.pages.lock().insert(
            (query.to_string(), page),
            Err(FetchError::new("stub", "scripted failure")),
        );
    }

    pub fn respond_detail(&self, detail: ItemDetail) {
        self.details.lock().insert(detail.id, Ok(detail));
    }

    /// Hold every subsequent fetch until [`StubCatalog::release`].
    pub fn hold(&self) {
        *self.gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let `n` held fetches through.
    pub fn release(&self, n: usize) {
        if let Some(gate) = self.gate.lock().as_ref() {
            gate.add_permits(n);
        }
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Yield until `n` fetches have been issued.
    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..1_000 {
            if self.call_count() >= n {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {n} fetches, saw {:?}", self.calls());
    }
}

#[async_trait]
impl CatalogProvider for StubCatalog {
    async fn fetch_page(
        &self,
        search_term: &str,
        page: u32,
    ) -> Result<CatalogPage, FetchError> {
        let key = (search_term.trim().to_string(), page);
        self.calls.lock().push(key.clone());

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        self.pages
            .lock()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::new("stub", "no scripted response")))
    }

    async fn fetch_detail(&self, item_id: ItemId) -> Result<ItemDetail, FetchError> {
        self.details
            .lock()
            .get(&item_id)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::new(format!("movie/{item_id}"), "not found")))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn item(id: u64, title: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        ..Item::default()
    }
}

pub fn rated(id: u64, title: &str, rating: f32) -> Item {
    Item {
        vote_average: Some(rating),
        ..item(id, title)
    }
}

pub fn dated(id: u64, title: &str, date: &str) -> Item {
    Item {
        release_date: Some(date.to_string()),
        ..item(id, title)
    }
}

pub fn page(results: Vec<Item>, page: u32, total_pages: u32) -> CatalogPage {
    CatalogPage {
        total_results: Some(results.len() as u64),
        results,
        page,
        total_pages,
    }
}

pub fn titles(items: &[Item]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}
