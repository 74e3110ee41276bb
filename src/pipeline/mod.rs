//! Pipelines.
//!
//! - [SentencePipeline] turns a single [crate::types::RawDocument] into sentence records,
//! - [Corpus] deduplicates, shuffles and truncates collected records,
//! - [Harvest] runs the whole thing over the quotes website and Gutenberg books.
//!
//! The module provides a light [pipeline::Pipeline] trait for whole runs.
mod corpus;
mod harvest;
pub mod pipeline;
mod sentences;

pub use corpus::{dedup, Corpus, CorpusStats};
pub use harvest::Harvest;
pub use pipeline::Pipeline;
pub use sentences::SentencePipeline;
