//! The pagination store: state, fetch orchestration and effects.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::fetch::{FetchError, PageSource};
use crate::pager::effect::{EffectHandle, EffectRegistry, ResponseEffect};
use crate::pager::intent::PagerIntent;
use crate::pager::model::{Page, PageNumber};
use crate::pager::reducer::PagerReducer;
use crate::pager::state::PagerState;
use crate::ui::mvi::Reducer;

/// Result of one fetch task, tagged with the generation it was started under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub page_number: PageNumber,
    pub result: Result<Page, FetchError>,
}

/// Owns the page number and the last accepted page.
///
/// Every change of the page number starts a fetch through the [`PageSource`]
/// and supersedes the previous one: the old task is aborted and, should its
/// outcome still arrive, it is discarded by generation. Outcomes come back
/// over the channel handed to [`PagerStore::new`] and must be fed to
/// [`PagerStore::resolve`] by the owning event loop.
///
/// Must be used from within a tokio runtime.
pub struct PagerStore<S: PageSource> {
    state: PagerState,
    source: Arc<S>,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
    in_flight: Option<JoinHandle<()>>,
    effects: EffectRegistry,
    torn_down: bool,
}

impl<S: PageSource> PagerStore<S> {
    pub fn new(source: S, outcomes: mpsc::UnboundedSender<FetchOutcome>) -> Self {
        Self {
            state: PagerState::default(),
            source: Arc::new(source),
            outcomes,
            in_flight: None,
            effects: EffectRegistry::default(),
            torn_down: false,
        }
    }

    /// Creates a store together with the receiving end of its outcome channel.
    pub fn with_channel(source: S) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(source, tx), rx)
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn page_number(&self) -> PageNumber {
        self.state.page_number()
    }

    /// Registers an effect that runs after every accepted page.
    pub fn subscribe<E>(&mut self, effect: E) -> EffectHandle
    where
        E: ResponseEffect + 'static,
    {
        self.effects.subscribe(Box::new(effect))
    }

    /// Number of effects still attached.
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Issues the initial fetch for the current page.
    pub fn start(&mut self) {
        self.dispatch(PagerIntent::Refresh);
    }

    pub fn go_to_page(&mut self, page_number: PageNumber) {
        self.dispatch(PagerIntent::GoToPage { page_number });
    }

    pub fn next_page(&mut self) {
        self.dispatch(PagerIntent::NextPage);
    }

    pub fn prev_page(&mut self) {
        self.dispatch(PagerIntent::PrevPage);
    }

    pub fn first_page(&mut self) {
        self.dispatch(PagerIntent::FirstPage);
    }

    pub fn last_page(&mut self) {
        self.dispatch(PagerIntent::LastPage);
    }

    pub fn refresh(&mut self) {
        self.dispatch(PagerIntent::Refresh);
    }

    /// Applies a fetch outcome. Returns true if it became the current page.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> bool {
        if self.torn_down {
            tracing::trace!(page_number = outcome.page_number, "Outcome after teardown dropped");
            return false;
        }
        if outcome.generation != self.state.generation() {
            tracing::debug!(
                page_number = outcome.page_number,
                generation = outcome.generation,
                current = self.state.generation(),
                "Stale fetch outcome discarded"
            );
            return false;
        }

        self.in_flight = None;
        let generation = outcome.generation;
        match outcome.result {
            Ok(page) => {
                self.dispatch(PagerIntent::FetchSucceeded { generation, page });
                self.effects
                    .notify(self.state.page_number(), self.state.page());
                true
            }
            Err(err) => {
                tracing::warn!(page_number = outcome.page_number, "Fetch failed: {}", err);
                self.dispatch(PagerIntent::FetchFailed {
                    generation,
                    error: err.to_string(),
                });
                false
            }
        }
    }

    /// Releases every effect and cancels the outstanding fetch.
    ///
    /// Navigation and late outcomes are ignored afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        self.effects.release_all();
        tracing::debug!("Pager store torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn dispatch(&mut self, intent: PagerIntent) {
        if self.torn_down {
            return;
        }
        let before = self.state.generation();
        self.state = PagerReducer::reduce(std::mem::take(&mut self.state), intent);
        if self.state.generation() != before {
            self.spawn_fetch();
        }
    }

    fn spawn_fetch(&mut self) {
        if let Some(stale) = self.in_flight.take() {
            stale.abort();
        }

        let generation = self.state.generation();
        let page_number = self.state.page_number();
        let source = Arc::clone(&self.source);
        let outcomes = self.outcomes.clone();
        tracing::debug!(page_number, generation, "Fetching page");

        self.in_flight = Some(tokio::spawn(async move {
            let result = source.get_page(page_number).await;
            // Receiver gone means the event loop has exited.
            let _ = outcomes.send(FetchOutcome {
                generation,
                page_number,
                result,
            });
        }));
    }
}

impl<S: PageSource> Drop for PagerStore<S> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
