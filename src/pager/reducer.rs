//! Reducer for the pagination store.

use crate::pager::model::PageNumber;
use crate::ui::mvi::Reducer;

use super::intent::PagerIntent;
use super::state::{FetchStatus, PagerState};

/// Pure state transitions for pagination.
///
/// A navigation intent that changes the page number (or a refresh) opens a
/// new generation and moves to `Fetching`. Starting the actual request is the
/// caller's job: it compares generations before and after dispatch.
pub struct PagerReducer;

impl Reducer for PagerReducer {
    type State = PagerState;
    type Intent = PagerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PagerIntent::GoToPage { page_number } => set_page(state, page_number),

            PagerIntent::NextPage => {
                if state.can_go_next_page() {
                    let next = state.page_number + 1;
                    set_page(state, next)
                } else {
                    state
                }
            }

            PagerIntent::PrevPage => {
                if state.can_go_prev_page() {
                    let prev = state.page_number - 1;
                    set_page(state, prev)
                } else {
                    state
                }
            }

            PagerIntent::FirstPage => set_page(state, 1),

            PagerIntent::LastPage => match state.total_pages() {
                0 => state,
                last => set_page(state, last),
            },

            PagerIntent::Refresh => begin_fetch(state),

            PagerIntent::FetchSucceeded { generation, page } => {
                if generation != state.generation {
                    return state;
                }
                PagerState {
                    page,
                    status: FetchStatus::Idle,
                    last_error: None,
                    ..state
                }
            }

            PagerIntent::FetchFailed { generation, error } => {
                if generation != state.generation {
                    return state;
                }
                // Keep the stale page on screen.
                PagerState {
                    status: FetchStatus::Idle,
                    last_error: Some(error),
                    ..state
                }
            }
        }
    }
}

fn set_page(state: PagerState, page_number: PageNumber) -> PagerState {
    if state.page_number == page_number {
        return state;
    }
    begin_fetch(PagerState {
        page_number,
        ..state
    })
}

fn begin_fetch(state: PagerState) -> PagerState {
    PagerState {
        generation: state.generation + 1,
        status: FetchStatus::Fetching {
            target: state.page_number,
        },
        ..state
    }
}
