//! Sentence extraction pipeline.
//!
//! For a given document:
//! 1. Book-derived documents get their header/footer stripped ([Boundary]) and are split
//!    into sentence candidates ([Splitter]). Quotes are kept whole, as a single candidate.
//! 1. Each candidate is normalized ([Normalizer]).
//! 1. Normalized candidates that are not empty and pass the [Admission] filter
//!    become [SentenceRecord]s attributed to the document.
//!
//! Candidates of a document are processed in parallel, keeping their order.
use log::debug;
use rayon::prelude::*;

use crate::config::Config;
use crate::filtering::{Admission, Filter};
use crate::segmenters::Splitter;
use crate::transformers::{Boundary, Normalizer, Transform};
use crate::types::{RawDocument, SentenceRecord, SourceType};

#[derive(Default)]
pub struct SentencePipeline {
    boundary: Boundary,
    splitter: Splitter,
    normalizer: Normalizer,
    admission: Admission,
}

impl SentencePipeline {
    pub fn new(boundary: Boundary, splitter: Splitter, admission: Admission) -> Self {
        Self {
            boundary,
            splitter,
            normalizer: Normalizer,
            admission,
        }
    }

    /// Gutenberg markers, and segmenter/language identifier probed from the config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Boundary::gutenberg(),
            Splitter::probe(&config.splitter),
            Admission::from_config(config),
        )
    }

    /// Strip the header/footer of book-derived documents. Quotes are left untouched.
    pub fn frame(&self, doc: RawDocument) -> RawDocument {
        match doc.source_type() {
            SourceType::Quote => doc,
            SourceType::BookDerived => self.boundary.transform_own(doc),
        }
    }

    /// Get sentence candidates from a framed document.
    fn candidates(&self, doc: &RawDocument) -> Vec<String> {
        match doc.source_type() {
            SourceType::Quote => vec![doc.text().to_string()],
            SourceType::BookDerived => self.splitter.split(doc.text()),
        }
    }

    /// Normalize a candidate, returning it if it is admitted.
    pub fn admit(&self, candidate: String) -> Option<String> {
        let sentence = self.normalizer.transform_own(candidate);
        if !sentence.is_empty() && self.admission.detect(&sentence) {
            Some(sentence)
        } else {
            None
        }
    }

    /// Extract admitted sentences from a document.
    pub fn process(&self, doc: RawDocument) -> Vec<SentenceRecord> {
        let doc = self.frame(doc);
        let candidates = self.candidates(&doc);
        let nb_candidates = candidates.len();

        let records: Vec<SentenceRecord> = candidates
            .into_par_iter()
            .filter_map(|candidate| self.admit(candidate))
            .map(|sentence| SentenceRecord::from_document(sentence, &doc))
            .collect();

        debug!(
            "{}: kept {}/{} candidates",
            doc.origin(),
            records.len(),
            nb_candidates
        );
        records
    }
}
