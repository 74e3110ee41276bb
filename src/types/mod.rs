//! Documents and sentence records.
mod document;
mod record;

pub use document::{RawDocument, SourceType};
pub use record::SentenceRecord;
