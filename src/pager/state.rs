//! State for the pagination store.

use crate::pager::model::{Item, Page, PageNumber};
use crate::ui::mvi::UiState;

/// Whether a fetch for the current generation is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching { target: PageNumber },
}

/// Committed pagination state.
///
/// Only `page_number` and the last accepted `Page` are stored; everything the
/// view needs is derived from them on each read.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerState {
    pub(super) page_number: PageNumber,
    pub(super) page: Page,
    /// Bumped on every page change; fetch results carry the value they
    /// were started with.
    pub(super) generation: u64,
    pub(super) status: FetchStatus,
    pub(super) last_error: Option<String>,
}

impl Default for PagerState {
    fn default() -> Self {
        Self {
            page_number: 1,
            page: Page::empty(),
            generation: 0,
            status: FetchStatus::Idle,
            last_error: None,
        }
    }
}

impl UiState for PagerState {}

impl PagerState {
    pub fn page_number(&self) -> PageNumber {
        self.page_number
    }

    /// Last accepted response (the empty placeholder before the first one).
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn items(&self) -> &[Item] {
        &self.page.items
    }

    pub fn total(&self) -> u64 {
        self.page.total
    }

    pub fn page_size(&self) -> u64 {
        self.page.page_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.status, FetchStatus::Fetching { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `ceil(total / page_size)`, or 0 while the page size is unknown.
    pub fn total_pages(&self) -> u64 {
        match self.page.page_size {
            0 => 0,
            size => self.page.total.div_ceil(size),
        }
    }

    pub fn can_go_prev_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn can_go_next_page(&self) -> bool {
        self.page_number.saturating_mul(self.page.page_size) < self.page.total
    }

    pub fn can_go_first_page(&self) -> bool {
        self.page_number != 1
    }

    pub fn can_go_last_page(&self) -> bool {
        let last = self.total_pages();
        last >= 1 && self.page_number != last
    }
}
