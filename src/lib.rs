//! Terminal viewer that pages through a remote to-do list.
//!
//! The interesting part lives in [`pager`]: a small state store that keeps the
//! current page number, derives navigation flags from the last fetched page and
//! drives the fetch bridge with switch-to-latest semantics.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod pager;
pub mod persist;
pub mod ui;
