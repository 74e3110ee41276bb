/*!
# Gleaner

Builds a corpus of short English sentences from a quotes website and Project Gutenberg books.

Documents go through a sentence pipeline ([pipeline::SentencePipeline]):
1. Gutenberg header and footer stripping ([transformers::Boundary]),
1. Sentence splitting ([segmenters::Splitter]), statistical when Punkt parameters are available, regex-based otherwise,
1. Normalization ([transformers::Normalizer]),
1. Admission ([filtering::Admission]) on word count, length, forbidden characters and optionally language.

Sentences are then deduplicated, shuffled and truncated into a [pipeline::Corpus] by [pipeline::Harvest].
!*/
pub mod capability;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod pipeline;
pub mod robots;
pub mod segmenters;
pub mod sources;
pub mod transformers;
pub mod types;
