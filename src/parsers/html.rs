use crate::error::{Result, ScrapeError};
use crate::filter::looks_absolute;
use crate::parsers::{ParserKind, pretty};
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page that can be queried by tag and attribute
pub struct ParsedDocument {
    html: Html,
    kind: ParserKind,
}

impl ParsedDocument {
    /// Parses HTML text with the given parser kind
    pub fn parse(text: &str, kind: ParserKind) -> Self {
        let html = match kind {
            ParserKind::Document => Html::parse_document(text),
            ParserKind::Fragment => Html::parse_fragment(text),
        };

        if !html.errors.is_empty() {
            ::log::debug!("HTML parser recovered from {} errors", html.errors.len());
        }

        Self { html, kind }
    }

    /// Parser kind the document was built with
    pub fn kind(&self) -> ParserKind {
        self.kind
    }

    /// All elements named `tag`, in document order
    pub fn find_all(&self, tag: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = tag_selector(tag)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Text content of the first `<title>` element, if any
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|title| title.text().collect::<String>())
    }

    /// Values of `attribute` on every `tag` element, in document order.
    ///
    /// Elements that lack the attribute are skipped.
    pub fn attribute_values(&self, tag: &str, attribute: &str) -> Result<Vec<String>> {
        Ok(self
            .find_all(tag)?
            .into_iter()
            .filter_map(|element| element.value().attr(attribute))
            .map(|value| value.to_string())
            .collect())
    }

    /// Attribute values that look like absolute web addresses.
    ///
    /// Order and duplicates follow the document.
    pub fn attribute_links(&self, tag: &str, attribute: &str) -> Result<Vec<String>> {
        let links: Vec<String> = self
            .attribute_values(tag, attribute)?
            .into_iter()
            .filter(|value| looks_absolute(value))
            .collect();

        ::log::debug!("Found {} <{} {}> links", links.len(), tag, attribute);
        if !links.is_empty() {
            ::log::debug!(
                "First few links: {:?}",
                links.iter().take(5).collect::<Vec<_>>()
            );
        }

        Ok(links)
    }

    /// Re-indented, human-readable serialization of the document
    pub fn prettify(&self) -> String {
        pretty::prettify(&self.html)
    }
}

/// Builds a selector matching a single tag name
fn tag_selector(tag: &str) -> Result<Selector> {
    let tag = tag.trim();
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ScrapeError::InvalidSelector(tag.to_string()));
    }
    Selector::parse(tag).map_err(|_| ScrapeError::InvalidSelector(tag.to_string()))
}
