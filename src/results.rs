use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordered absolute links in document order, duplicates kept
pub type LinkList = Vec<String>;

/// Everything extracted from one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    /// URL of the page
    pub url: String,

    /// Title of the page (if available)
    pub title: Option<String>,

    /// Absolute `<a href>` links
    pub links: LinkList,

    /// Absolute `<img src>` links
    pub image_links: LinkList,
}

impl PageSummary {
    /// Create a new page summary
    pub fn new(url: String, title: Option<String>, links: LinkList, image_links: LinkList) -> Self {
        Self {
            url,
            title,
            links,
            image_links,
        }
    }
}

/// Outcome of one image download call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDownloadBatch {
    /// Dated directory the images were written into
    pub target_directory: PathBuf,

    /// Number of images written
    pub downloaded_count: usize,

    /// Paths of the written files, in download order
    pub files: Vec<PathBuf>,
}
