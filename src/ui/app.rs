use crate::fetch::PageSource;
use crate::pager::{EffectHandle, FetchOutcome, PagerStore, ResponseEffect};
use crate::ui::view::PagerView;

/// Navigation requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
    Refresh,
}

/// UI-side owner of the pager store.
pub struct App<S: PageSource> {
    should_quit: bool,
    store: PagerStore<S>,
    /// Persistence/logging effect registered at creation.
    effect: Option<EffectHandle>,
}

impl<S: PageSource> App<S> {
    pub fn new(store: PagerStore<S>) -> Self {
        Self {
            should_quit: false,
            store,
            effect: None,
        }
    }

    /// Registers the response effect and issues the first fetch.
    pub fn start<E>(&mut self, effect: E)
    where
        E: ResponseEffect + 'static,
    {
        self.effect = Some(self.store.subscribe(effect));
        self.store.start();
    }

    pub fn store(&self) -> &PagerStore<S> {
        &self.store
    }

    pub fn view(&self) -> PagerView {
        PagerView::from_state(self.store.state())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_nav(&mut self, action: NavAction) {
        match action {
            NavAction::First => self.store.first_page(),
            NavAction::Prev => self.store.prev_page(),
            NavAction::Next => self.store.next_page(),
            NavAction::Last => self.store.last_page(),
            NavAction::Refresh => self.store.refresh(),
        }
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        self.store.resolve(outcome);
    }

    /// Releases the effect and tears the store down.
    pub fn shutdown(&mut self) {
        if let Some(effect) = self.effect.take() {
            effect.release();
        }
        self.store.teardown();
    }
}
