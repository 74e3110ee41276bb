/*! Filtering utilities

Filters operate on normalized sentences and implement [filter::Filter]:
- [sentence::WordCount], [sentence::Length] and [sentence::ForbiddenChars] are simple heuristics,
- [language::LanguageGate] relies on an optional language identifier,
- [admission::Admission] chains all of them and decides if a sentence enters the corpus.

Filters are stateless and deterministic for a given input and configuration.
! */
mod admission;
mod filter;
mod language;
mod sentence;

pub use admission::Admission;
pub use filter::Filter;
pub use language::{BoxedIdentifier, LanguageGate};
pub use sentence::{ForbiddenChars, Length, WordCount};
