/*! Punkt-style statistical segmenter.

Candidate boundaries come from Unicode sentence boundaries (UAX #29), which are then
refined with pretrained Punkt parameters, as distributed in NLTK's `punkt_tab` resource.
A parameter directory holds:
- `abbrev_types.txt`: one abbreviation type per line (`mr`, `dr`, `u.s`). **Mandatory**.
- `collocations.tab`: `first\tsecond` pairs that are never separated. Optional.
- `sent_starters.txt`: words that frequently start a sentence. Optional.

All types are lowercase and have no trailing period. Numbers are stored as `##number##`.

A candidate boundary after a period is discarded when:
- the word before the period is a known abbreviation or a single letter (initial),
  unless the following word is a capitalized frequent sentence starter,
- the word before the period and the following word form a collocation,
- the period is part of an ellipsis, unless the following word is a sentence starter.
!*/
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

use super::Segment;

const ABBREV_TYPES: &str = "abbrev_types.txt";
const COLLOCATIONS: &str = "collocations.tab";
const SENT_STARTERS: &str = "sent_starters.txt";
const NUMBER: &str = "##number##";

/// Pretrained parameters.
#[derive(Debug, Default, Clone)]
pub struct PunktParams {
    abbrev_types: HashSet<String>,
    collocations: HashSet<(String, String)>,
    sent_starters: HashSet<String>,
}

impl PunktParams {
    /// Load parameters from a `punkt_tab`-like directory.
    ///
    /// # Errors
    /// Returns an error if `abbrev_types.txt` can't be read.
    /// Missing optional files are ignored.
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        let abbrev_types = fs::read_to_string(dir.join(ABBREV_TYPES))?;
        let mut params = Self::default().with_abbreviations(abbrev_types.lines());

        match fs::read_to_string(dir.join(COLLOCATIONS)) {
            Ok(collocations) => {
                let pairs = collocations
                    .lines()
                    .filter_map(|line| line.split_once('\t'));
                params = params.with_collocations(pairs);
            }
            Err(e) => debug!("no collocations in {:?}: {}", dir, e),
        }

        match fs::read_to_string(dir.join(SENT_STARTERS)) {
            Ok(starters) => params = params.with_sent_starters(starters.lines()),
            Err(e) => debug!("no sentence starters in {:?}: {}", dir, e),
        }

        info!(
            "loaded punkt parameters from {:?}: {} abbreviations, {} collocations, {} sentence starters",
            dir,
            params.abbrev_types.len(),
            params.collocations.len(),
            params.sent_starters.len()
        );
        Ok(params)
    }

    pub fn with_abbreviations<'a>(mut self, abbrevs: impl IntoIterator<Item = &'a str>) -> Self {
        self.abbrev_types.extend(
            abbrevs
                .into_iter()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_lowercase),
        );
        self
    }

    pub fn with_collocations<'a>(
        mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.collocations.extend(
            pairs
                .into_iter()
                .map(|(a, b)| (a.trim().to_lowercase(), b.trim().to_lowercase())),
        );
        self
    }

    pub fn with_sent_starters<'a>(mut self, starters: impl IntoIterator<Item = &'a str>) -> Self {
        self.sent_starters.extend(
            starters
                .into_iter()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        );
        self
    }

    /// Checks if a candidate boundary between `prev` (trailing whitespace removed) and `next` should be discarded.
    fn continues(&self, prev: &str, next: &str) -> bool {
        if !prev.ends_with('.') {
            return false;
        }

        let last_word = prev.rsplit(char::is_whitespace).next().unwrap_or_default();
        let typ = token_type(
            last_word
                .trim_end_matches('.')
                .trim_start_matches(|c: char| !c.is_alphanumeric()),
        );

        let next_word = next.split_whitespace().next().unwrap_or_default();
        let next_typ = next_word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        let next_starts_sentence = self.sent_starters.contains(&next_typ)
            && next_word
                .chars()
                .find(|c| c.is_alphabetic())
                .map_or(false, char::is_uppercase);

        if self.collocations.contains(&(typ.clone(), next_typ)) {
            return true;
        }

        let is_initial = {
            let mut chars = typ.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        };

        if is_initial || self.abbrev_types.contains(&typ) || last_word.ends_with("...") {
            return !next_starts_sentence;
        }

        false
    }
}

/// Lowercased type of a token, numbers being `##number##` as in punkt parameter files.
fn token_type(token: &str) -> String {
    let is_number = token.starts_with(|c: char| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'));
    if is_number {
        NUMBER.to_string()
    } else {
        token.to_lowercase()
    }
}

pub struct PunktSegmenter {
    params: PunktParams,
}

impl PunktSegmenter {
    pub fn new(params: PunktParams) -> Self {
        Self { params }
    }
}

impl Segment for PunktSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, Error> {
        let text = text.replace(|c: char| c == '\n' || c == '\r', " ");

        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut bounds = text.split_sentence_bounds().peekable();

        while let Some(bound) = bounds.next() {
            current.push_str(bound);
            let split_here = match bounds.peek() {
                Some(next) => !self.params.continues(current.trim_end(), next),
                None => true,
            };

            if split_here {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                current.clear();
            }
        }

        Ok(sentences)
    }
}
