use std::fmt;
use std::path::PathBuf;

/// Public session operation a report refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAndParse,
    Title,
    Links,
    ImageLinks,
    AttributeLinks,
    DownloadImages,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::FetchAndParse => "fetch and parse",
            Operation::Title => "get title",
            Operation::Links => "get links",
            Operation::ImageLinks => "get image links",
            Operation::AttributeLinks => "extract attribute links",
            Operation::DownloadImages => "download images",
        };
        f.write_str(name)
    }
}

/// Diagnostic events emitted by a page session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Prettified form of a freshly parsed document
    Document(String),
    Title(String),
    Links {
        tag: String,
        attribute: String,
        links: Vec<String>,
    },
    ImagesSaved {
        count: usize,
        directory: PathBuf,
    },
    Failure {
        operation: Operation,
        message: String,
    },
}

/// Receives session reports. Computation and presentation stay separate:
/// operations return their values and also hand a report here.
pub trait Reporter {
    fn report(&self, report: &Report);
}

/// Default reporter writing every event to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, report: &Report) {
        match report {
            Report::Document(pretty) => ::log::debug!("Parsed document:\n{}", pretty),
            Report::Title(title) => ::log::info!("Title: {}", title),
            Report::Links {
                tag,
                attribute,
                links,
            } => {
                ::log::info!("Found {} <{} {}> links", links.len(), tag, attribute);
                for link in links {
                    ::log::debug!("  {}", link);
                }
            }
            Report::ImagesSaved { count, directory } => ::log::info!(
                "{} images downloaded successfully into '{}'",
                count,
                directory.display()
            ),
            Report::Failure { operation, message } => {
                ::log::error!("Failed to {}: {}", operation, message)
            }
        }
    }
}
