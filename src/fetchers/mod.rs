pub mod http;

pub use http::HttpFetcher;

use crate::error::Result;

/// Performs GET requests for a page session and its image downloads.
///
/// Implementations should fail with [`crate::ScrapeError::Fetch`] on
/// connection failures and non-success responses.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch `url` and return the body decoded as text
    async fn get_text(&self, url: &str) -> Result<String>;

    /// Fetch `url` and return the raw body
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
