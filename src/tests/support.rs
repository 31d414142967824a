use crate::error::{Result, ScrapeError};
use crate::fetchers::Fetcher;
use crate::report::{Operation, Report, Reporter};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Serves bodies from memory; unknown URLs fail like a refused connection.
/// Clones share their pages and request log.
#[derive(Debug, Clone, Default)]
pub struct StubFetcher {
    pages: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.borrow_mut().insert(url.to_string(), body.into());
        self
    }

    /// Make later requests for `url` fail
    pub fn remove_page(&self, url: &str) {
        self.pages.borrow_mut().remove(url);
    }

    /// Handle to the list of requested URLs, in request order
    pub fn requests(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.requests)
    }
}

impl Fetcher for StubFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        let bytes = self.get_bytes(url).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::fetch(url, "connection refused"))
    }
}

/// Keeps every report so tests can inspect them after the session took ownership
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Rc<RefCell<Vec<Report>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    pub fn failures(&self) -> Vec<(Operation, String)> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|report| match report {
                Report::Failure { operation, message } => Some((*operation, message.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, report: &Report) {
        self.reports.borrow_mut().push(report.clone());
    }
}
