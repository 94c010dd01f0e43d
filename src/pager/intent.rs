//! Intents for the pagination store.

use crate::pager::model::{Page, PageNumber};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the pager reducer.
#[derive(Debug, Clone)]
pub enum PagerIntent {
    /// Jump to an arbitrary page. Not bounds-checked.
    GoToPage { page_number: PageNumber },

    /// Step forward if the last response says there is more.
    NextPage,

    /// Step back if not already on page 1.
    PrevPage,

    FirstPage,

    /// Jump to `ceil(total / page_size)`; no-op while that is unknown.
    LastPage,

    /// Fetch the current page again.
    Refresh,

    /// A fetch started under `generation` resolved.
    FetchSucceeded { generation: u64, page: Page },

    /// A fetch started under `generation` failed.
    FetchFailed { generation: u64, error: String },
}

impl Intent for PagerIntent {}
