//! Observers that run after each accepted response.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::pager::model::{Page, PageNumber};
use crate::persist::KeyValueStore;

/// Key under which the current page number is persisted.
pub const PAGE_NUMBER_KEY: &str = "pageNumber";

/// Reaction to a newly accepted page.
///
/// Effects get a read-only view of the committed state; they cannot reach
/// back into the store.
pub trait ResponseEffect: Send {
    fn on_response(&mut self, page_number: PageNumber, page: &Page);
}

impl<F> ResponseEffect for F
where
    F: FnMut(PageNumber, &Page) + Send,
{
    fn on_response(&mut self, page_number: PageNumber, page: &Page) {
        self(page_number, page)
    }
}

/// Detaches a registered effect.
///
/// Dropping the handle does not release the effect; call [`release`].
///
/// [`release`]: EffectHandle::release
#[must_use = "an effect stays attached until its handle is released"]
#[derive(Debug, Clone)]
pub struct EffectHandle {
    id: u64,
    active: Arc<AtomicBool>,
}

impl EffectHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn release(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            tracing::debug!(effect = self.id, "Effect released");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

struct EffectEntry {
    handle: EffectHandle,
    effect: Box<dyn ResponseEffect>,
}

#[derive(Default)]
pub(crate) struct EffectRegistry {
    entries: Vec<EffectEntry>,
    next_id: u64,
}

impl EffectRegistry {
    pub(crate) fn subscribe(&mut self, effect: Box<dyn ResponseEffect>) -> EffectHandle {
        self.next_id += 1;
        let handle = EffectHandle {
            id: self.next_id,
            active: Arc::new(AtomicBool::new(true)),
        };
        self.entries.push(EffectEntry {
            handle: handle.clone(),
            effect,
        });
        handle
    }

    pub(crate) fn notify(&mut self, page_number: PageNumber, page: &Page) {
        self.entries.retain(|entry| entry.handle.is_active());
        for entry in &mut self.entries {
            // An earlier effect in this pass may have released a later one.
            if entry.handle.is_active() {
                entry.effect.on_response(page_number, page);
            }
        }
    }

    pub(crate) fn release_all(&mut self) {
        for entry in self.entries.drain(..) {
            entry.handle.release();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.handle.is_active())
            .count()
    }
}

/// Built-in effect: persist the page number and log the full response.
pub fn persist_and_log(store: Arc<dyn KeyValueStore>) -> impl ResponseEffect {
    move |page_number: PageNumber, page: &Page| {
        if let Err(err) = store.set_item(PAGE_NUMBER_KEY, &page_number.to_string()) {
            tracing::warn!("Failed to persist page number: {}", err);
        }
        tracing::info!(page_number, response = ?page, "Todo response");
    }
}
