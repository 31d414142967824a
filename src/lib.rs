//! Fetch a single web page, pull out its title, links and image links, and
//! optionally save the images to a dated directory.
//!
//! ```no_run
//! use static_scrape::PageSession;
//!
//! # async fn run() -> Result<(), static_scrape::ScrapeError> {
//! let mut session = PageSession::new("https://www.rust-lang.org");
//! session.fetch_and_parse().await?;
//! println!("{}", session.title()?);
//! let images = session.all_image_links()?;
//! session.download_images(&images).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod report;
pub mod results;
pub mod session;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use fetchers::{Fetcher, HttpFetcher};
pub use parsers::{ParsedDocument, ParserKind};
pub use report::{LogReporter, Operation, Report, Reporter};
pub use results::{ImageDownloadBatch, LinkList, PageSummary};
pub use session::PageSession;
