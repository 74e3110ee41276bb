//! Admission filter.
//!
//! Decides whether a normalized sentence enters the corpus.
//! A sentence is rejected if any of the following holds:
//! - it has too few or too many words,
//! - it is too short (in characters),
//! - it contains a forbidden character (`@`, `#` by default),
//! - language filtering is enabled and the sentence is not identified as the target language.
use crate::config::{Config, Thresholds};

use super::{Filter, ForbiddenChars, LanguageGate, Length, WordCount};

#[derive(Default)]
pub struct Admission {
    word_count: WordCount,
    length: Length,
    forbidden: ForbiddenChars,
    language: Option<LanguageGate>,
}

impl Admission {
    /// Build heuristic filters from thresholds, without language filtering.
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            word_count: WordCount::new(thresholds.min_words, thresholds.max_words),
            length: Length::with_min_size(thresholds.min_length),
            forbidden: ForbiddenChars::new(thresholds.forbidden.clone()),
            language: None,
        }
    }

    /// Build from the whole config, probing for the language identifier if enabled.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.thresholds).with_language(LanguageGate::probe(&config.language))
    }

    pub fn with_language(mut self, language: Option<LanguageGate>) -> Self {
        self.language = language;
        self
    }
}

impl Filter<&str> for Admission {
    fn detect(&self, sentence: &str) -> bool {
        // cheap checks first, identification last.
        self.word_count.detect(sentence)
            && self.length.detect(sentence)
            && self.forbidden.detect(sentence)
            && self
                .language
                .as_ref()
                .map_or(true, |gate| gate.detect(sentence))
    }
}

#[cfg(test)]
mod tests {
    use crate::capability::Capability;

    use super::*;

    #[test]
    fn boundaries() {
        let f = Admission::default();
        assert!(!f.detect("Ok."));
        assert!(f.detect("The quick brown fox jumps over the lazy dog today"));
        assert!(!f.detect(&vec!["word"; 41].join(" ")));
        assert!(!f.detect("Email me at test@example.com please"));
    }

    #[test]
    fn enough_words_but_too_short() {
        let f = Admission::default();
        // 3 words, 7 chars
        assert!(!f.detect("a b cde"));
    }

    #[test]
    fn total() {
        let f = Admission::default();
        for s in ["", " ", "\u{0}", "#", "@@@ @@@ @@@ @@@"] {
            assert!(!f.detect(s));
        }
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = Thresholds {
            min_words: 1,
            max_words: 2,
            min_length: 2,
            forbidden: vec!['!'],
        };
        let f = Admission::new(&thresholds);
        assert!(f.detect("Ok."));
        assert!(!f.detect("Ok!"));
        assert!(!f.detect("one two three"));
        // '@' is no longer forbidden
        assert!(f.detect("me@home"));
    }

    #[test]
    fn unavailable_language_rejects() {
        let gate = LanguageGate::new(
            "en".to_string(),
            Capability::Unavailable("no model".to_string()),
        );
        let f = Admission::default().with_language(Some(gate));
        assert!(!f.detect("The quick brown fox jumps over the lazy dog today"));
    }

    #[test]
    fn deterministic() {
        let f = Admission::default();
        let s = "It was the best of times, it was the worst of times.";
        assert_eq!(f.detect(s), f.detect(s));
        assert!(f.detect(s));
    }
}
