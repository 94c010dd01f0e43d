//! Shared test utilities and mock page sources.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use todo_pager::fetch::{FetchError, PageSource};
use todo_pager::pager::{FetchOutcome, Item, ItemId, Page, PageNumber, PagerStore};
use tokio::sync::mpsc::UnboundedReceiver;

/// Builds the page a backend holding `total` items would serve.
pub fn make_page(page_number: PageNumber, total: u64, page_size: u64) -> Page {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let end = (start + page_size).min(total);
    let items = (start..end)
        .map(|idx| Item {
            id: ItemId::from(idx + 1),
            title: format!("todo #{}", idx + 1),
            completed: idx % 3 == 0,
        })
        .collect();
    Page {
        items,
        total,
        page_number,
        page_size,
    }
}

/// In-memory source with per-page delays and failures.
#[derive(Clone)]
pub struct ScriptedSource {
    total: u64,
    page_size: u64,
    delays: HashMap<PageNumber, Duration>,
    failing: HashSet<PageNumber>,
    calls: Arc<Mutex<Vec<PageNumber>>>,
}

impl ScriptedSource {
    pub fn new(total: u64, page_size: u64) -> Self {
        Self {
            total,
            page_size,
            delays: HashMap::new(),
            failing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn delay(mut self, page_number: PageNumber, delay: Duration) -> Self {
        self.delays.insert(page_number, delay);
        self
    }

    pub fn fail(mut self, page_number: PageNumber) -> Self {
        self.failing.insert(page_number);
        self
    }

    /// Shared log of requested page numbers, in call order.
    pub fn calls(&self) -> Arc<Mutex<Vec<PageNumber>>> {
        Arc::clone(&self.calls)
    }
}

impl PageSource for ScriptedSource {
    async fn get_page(&self, page_number: PageNumber) -> Result<Page, FetchError> {
        self.calls.lock().push(page_number);
        if let Some(delay) = self.delays.get(&page_number) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&page_number) {
            return Err(FetchError::Unavailable {
                page_number,
                reason: "scripted failure".to_string(),
            });
        }
        Ok(make_page(page_number, self.total, self.page_size))
    }
}

/// Feeds every outcome that arrives within `wait` into the store.
///
/// Returns how many outcomes were received.
pub async fn pump<S: PageSource>(
    store: &mut PagerStore<S>,
    outcomes: &mut UnboundedReceiver<FetchOutcome>,
    wait: Duration,
) -> usize {
    let mut received = 0;
    while let Ok(Some(outcome)) = tokio::time::timeout(wait, outcomes.recv()).await {
        store.resolve(outcome);
        received += 1;
    }
    received
}
