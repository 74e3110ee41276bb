use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of source a document comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// A single quote, scraped from a quotes website.
    Quote,
    /// A long-form text (usually a Project Gutenberg book).
    BookDerived,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Quote => write!(f, "quote"),
            SourceType::BookDerived => write!(f, "book-derived"),
        }
    }
}

/// A fetched unit of text, along with its origin (URL or source tag) and its category.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    text: String,
    origin: String,
    source_type: SourceType,
}

impl RawDocument {
    pub fn new(text: String, origin: String, source_type: SourceType) -> Self {
        Self {
            text,
            origin,
            source_type,
        }
    }

    /// Get a reference to the document's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get a reference to the document's origin.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Replace the text, keeping provenance.
    pub(crate) fn with_text(self, text: String) -> Self {
        Self { text, ..self }
    }
}
