//! Regex segmenter.
//!
//! Splits wherever a `.`, `?` or `!` is followed by whitespace, then by an
//! upper-case letter, a quotation mark or an opening bracket.
//!
//! This is a heuristic: it splits after abbreviations (`Mr. Smith`) and misses
//! boundaries followed by lower-case words.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

use super::Segment;

lazy_static! {
    static ref BOUNDARY: Regex =
        Regex::new(r#"[.?!](\s+)["'(\[\u{201C}\u{2018}A-Z]"#).unwrap();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSegmenter;

impl RegexSegmenter {
    /// Infallible segmentation. Newlines are turned into spaces beforehand.
    pub fn split(&self, text: &str) -> Vec<String> {
        let cleaned = text.replace(|c: char| c == '\n' || c == '\r', " ");
        let cleaned = cleaned.trim();

        let mut sentences = Vec::new();
        let mut last = 0;
        for caps in BOUNDARY.captures_iter(cleaned) {
            // the sentence ends right after the punctuation,
            // and the next one starts after the whitespace run.
            if let Some(ws) = caps.get(1) {
                sentences.push(&cleaned[last..ws.start()]);
                last = ws.end();
            }
        }
        sentences.push(&cleaned[last..]);

        sentences
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Segment for RegexSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, Error> {
        Ok(self.split(text))
    }
}
