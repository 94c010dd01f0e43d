//! Pagination state store.
//!
//! The page number is the single source of truth. Everything the view shows
//! is derived from it and from the last accepted [`Page`]:
//!
//! ```text
//! go_to_page / next / prev ──→ PagerReducer ──→ PagerState ──→ PagerView
//!                                   │  ↑
//!                       new generation  FetchOutcome
//!                                   ↓  │
//!                              PageSource task
//! ```
//!
//! - `state.rs` - committed state and derived reads
//! - `intent.rs` - navigation and fetch-result intents
//! - `reducer.rs` - pure transitions
//! - `store.rs` - fetch orchestration (switch-to-latest) and effects
//! - `effect.rs` - response observers and their explicit release

mod effect;
mod intent;
mod model;
mod reducer;
mod state;
mod store;

pub use effect::{persist_and_log, EffectHandle, ResponseEffect, PAGE_NUMBER_KEY};
pub use intent::PagerIntent;
pub use model::{Item, ItemId, Page, PageNumber};
pub use reducer::PagerReducer;
pub use state::{FetchStatus, PagerState};
pub use store::{FetchOutcome, PagerStore};
