use serde::{Deserialize, Serialize};

use super::{RawDocument, SourceType};

/// A normalized sentence that passed admission, with its provenance.
///
/// Field names follow the exported column names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentenceRecord {
    #[serde(rename = "Sentence")]
    text: String,
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "SourceType")]
    source_type: SourceType,
}

impl SentenceRecord {
    pub fn new(text: String, source: String, source_type: SourceType) -> Self {
        Self {
            text,
            source,
            source_type,
        }
    }

    /// Create a record for a sentence extracted from `doc`.
    pub fn from_document(text: String, doc: &RawDocument) -> Self {
        Self::new(text, doc.origin().to_string(), doc.source_type())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }
}
