use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by fetch failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while fetching, parsing or saving a page
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network, transport or HTTP status failure
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Missing title, or an extraction attempted before a document was parsed
    #[error("not found: {0}")]
    NotFound(String),

    /// The dated download directory was already created earlier
    #[error("directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    /// Filesystem failure while preparing directories or saving an image
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported parser: {0}")]
    UnsupportedParser(String),

    #[error("invalid tag selector: {0}")]
    InvalidSelector(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    pub fn fetch(url: &str, source: impl Into<BoxError>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn not_parsed() -> Self {
        Self::NotFound("no parsed document, call fetch_and_parse first".to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
