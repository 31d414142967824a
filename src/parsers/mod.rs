pub mod html;
pub mod pretty;

#[cfg(test)]
mod tests;

pub use html::ParsedDocument;

use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default parser name, matching the permissive full-document parser
pub const DEFAULT_PARSER: &str = "html.parser";

/// How raw HTML text is turned into a document tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParserKind {
    /// Full document parse; missing `<html>`, `<head>` and `<body>` are synthesized
    #[default]
    Document,
    /// Parse the input as a body fragment
    Fragment,
}

impl ParserKind {
    /// Canonical name of the parser
    pub fn name(&self) -> &'static str {
        match self {
            ParserKind::Document => DEFAULT_PARSER,
            ParserKind::Fragment => "fragment",
        }
    }
}

impl FromStr for ParserKind {
    type Err = ScrapeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            // Names other scraping tools use for a full-document parse
            "html.parser" | "html" | "document" | "html5lib" | "lxml" => {
                ::log::debug!("Using document parser for '{}'", name);
                Ok(ParserKind::Document)
            }
            "fragment" => Ok(ParserKind::Fragment),
            _ => Err(ScrapeError::UnsupportedParser(name.to_string())),
        }
    }
}

impl TryFrom<String> for ParserKind {
    type Error = ScrapeError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ParserKind> for String {
    fn from(kind: ParserKind) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
