//! Data fetch bridge: retrieves one page of to-do items at a time.

mod error;
mod http;

use std::future::Future;

use crate::pager::{Page, PageNumber};

pub use error::FetchError;
pub use http::HttpPageSource;

/// Asynchronous source of pages.
///
/// The pager store calls this once per page-number change and may abort the
/// returned future's task when a newer page is requested.
pub trait PageSource: Send + Sync + 'static {
    fn get_page(
        &self,
        page_number: PageNumber,
    ) -> impl Future<Output = Result<Page, FetchError>> + Send;
}
