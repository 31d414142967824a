use crate::config::ScraperConfig;
use crate::download::ImageDownloader;
use crate::error::{Result, ScrapeError};
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::parsers::{ParsedDocument, ParserKind};
use crate::report::{LogReporter, Operation, Report, Reporter};
use crate::results::{ImageDownloadBatch, LinkList, PageSummary};
use chrono::NaiveDate;
use std::path::PathBuf;

/// A single page: its URL, the parsed document once fetched, and the
/// extraction and download operations that read it.
///
/// Every public operation returns its outcome and also hands a [`Report`] to
/// the session's reporter, including a [`Report::Failure`] before returning
/// an error.
pub struct PageSession<F: Fetcher = HttpFetcher> {
    url: String,
    parser: ParserKind,
    fetcher: F,
    reporter: Box<dyn Reporter>,
    output_dir: PathBuf,
    images_dir: String,
    download_date: Option<NaiveDate>,
    document: Option<ParsedDocument>,
    image_links: LinkList,
}

impl PageSession<HttpFetcher> {
    /// Create a session for `url` using the default parser and HTTP client
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_fetcher(url, HttpFetcher::new())
    }

    /// Create a session from a loaded configuration
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(config)?;
        Ok(Self::with_fetcher(config.url.clone(), fetcher)
            .with_parser_kind(config.parser)
            .with_output_dir(config.output_dir.clone())
            .with_images_dir(config.images_dir.clone()))
    }
}

impl<F: Fetcher> PageSession<F> {
    /// Create a session that fetches through `fetcher`
    pub fn with_fetcher(url: impl Into<String>, fetcher: F) -> Self {
        Self {
            url: url.into(),
            parser: ParserKind::default(),
            fetcher,
            reporter: Box::new(LogReporter),
            output_dir: PathBuf::from("."),
            images_dir: "images".to_string(),
            download_date: None,
            document: None,
            image_links: Vec::new(),
        }
    }

    /// Select the parser by name, e.g. `html.parser` or `fragment`
    pub fn with_parser(self, name: &str) -> Result<Self> {
        let kind = name.parse()?;
        Ok(self.with_parser_kind(kind))
    }

    pub fn with_parser_kind(mut self, parser: ParserKind) -> Self {
        self.parser = parser;
        self
    }

    /// Replace the default log reporter
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Root under which the images directory is created
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_images_dir(mut self, name: impl Into<String>) -> Self {
        self.images_dir = name.into();
        self
    }

    /// Pin the date used to name download directories
    pub fn with_download_date(mut self, date: NaiveDate) -> Self {
        self.download_date = Some(date);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parser(&self) -> ParserKind {
        self.parser
    }

    /// The parsed document, if a fetch has succeeded
    pub fn document(&self) -> Option<&ParsedDocument> {
        self.document.as_ref()
    }

    /// Links kept by the last call to [`PageSession::all_image_links`]
    pub fn image_links(&self) -> &[String] {
        &self.image_links
    }

    /// Fetches the page and parses it, replacing any earlier document.
    ///
    /// On failure the session is left without a document.
    pub async fn fetch_and_parse(&mut self) -> Result<&ParsedDocument> {
        ::log::info!("Fetching {}", self.url);
        self.document = None;

        let body = match self.fetcher.get_text(&self.url).await {
            Ok(body) => body,
            Err(e) => return Err(self.fail(Operation::FetchAndParse, e)),
        };

        let document = ParsedDocument::parse(&body, self.parser);
        self.reporter.report(&Report::Document(document.prettify()));
        Ok(&*self.document.insert(document))
    }

    /// Text of the page's `<title>` element
    pub fn title(&self) -> Result<String> {
        let title = self
            .parsed()
            .and_then(|doc| {
                doc.title()
                    .ok_or_else(|| ScrapeError::NotFound("<title> element".to_string()))
            })
            .map_err(|e| self.fail(Operation::Title, e))?;

        self.reporter.report(&Report::Title(title.clone()));
        Ok(title)
    }

    /// Absolute `<a href>` links in document order
    pub fn all_links(&self) -> Result<LinkList> {
        self.collect_links(Operation::Links, "a", "href")
    }

    /// Absolute `<img src>` links in document order. The result is also kept
    /// on the session.
    pub fn all_image_links(&mut self) -> Result<LinkList> {
        let links = self.collect_links(Operation::ImageLinks, "img", "src")?;
        self.image_links = links.clone();
        Ok(links)
    }

    /// Values of `attribute` on every `tag` element that look like absolute
    /// web addresses. Elements without the attribute are skipped.
    pub fn extract_attribute_links(&self, tag: &str, attribute: &str) -> Result<LinkList> {
        self.collect_links(Operation::AttributeLinks, tag, attribute)
    }

    /// Fetches every link in order and writes it under
    /// `<output_dir>/<images_dir>/<day-month-year_>/`.
    ///
    /// The reported count is the number of files written from `links`.
    pub async fn download_images(&self, links: &[String]) -> Result<ImageDownloadBatch> {
        let mut downloader = ImageDownloader::new(&self.fetcher, self.output_dir.clone())
            .with_images_dir(self.images_dir.clone());
        if let Some(date) = self.download_date {
            downloader = downloader.with_date(date);
        }

        match downloader.download(links).await {
            Ok(batch) => {
                self.reporter.report(&Report::ImagesSaved {
                    count: batch.downloaded_count,
                    directory: batch.target_directory.clone(),
                });
                Ok(batch)
            }
            Err(failure) => {
                self.reporter.report(&Report::Failure {
                    operation: Operation::DownloadImages,
                    message: format!(
                        "{} ({} of {} images saved)",
                        failure.error,
                        failure.written,
                        links.len()
                    ),
                });
                Err(failure.error)
            }
        }
    }

    /// Title, links and image links in one pass. A missing title is `None`
    /// rather than an error.
    pub fn summarize(&mut self) -> Result<PageSummary> {
        let title = match self.parsed() {
            Ok(doc) => doc.title(),
            Err(e) => return Err(self.fail(Operation::Title, e)),
        };
        if let Some(title) = &title {
            self.reporter.report(&Report::Title(title.clone()));
        }
        let links = self.all_links()?;
        let image_links = self.all_image_links()?;

        Ok(PageSummary::new(self.url.clone(), title, links, image_links))
    }

    fn collect_links(&self, operation: Operation, tag: &str, attribute: &str) -> Result<LinkList> {
        let links = self
            .parsed()
            .and_then(|doc| doc.attribute_links(tag, attribute))
            .map_err(|e| self.fail(operation, e))?;

        self.reporter.report(&Report::Links {
            tag: tag.to_string(),
            attribute: attribute.to_string(),
            links: links.clone(),
        });
        Ok(links)
    }

    fn parsed(&self) -> Result<&ParsedDocument> {
        self.document.as_ref().ok_or_else(ScrapeError::not_parsed)
    }

    /// Reports a failure and hands the error back for returning
    fn fail(&self, operation: Operation, error: ScrapeError) -> ScrapeError {
        self.reporter.report(&Report::Failure {
            operation,
            message: error.to_string(),
        });
        error
    }
}
