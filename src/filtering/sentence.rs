//! sentence-level filtering
use super::Filter;

/// Word count filter.
/// Returns `false` if the number of whitespace-separated words is outside `[min, max]`.
///
/// Bounds are 3 and 40 by default.
pub struct WordCount {
    min: usize,
    max: usize,
}

impl WordCount {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, sentence: &str) -> bool {
        let count = sentence.split_whitespace().count();
        self.min <= count && count <= self.max
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self::new(3, 40)
    }
}

/// Simple length filter.
/// Returns `false` if provided sentence is less than [Length::min_size] unicode codepoints.
///
/// [Length::min_size] is 10 by default.
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().count() >= self.min_size
    }
}

impl Default for Length {
    fn default() -> Self {
        Length { min_size: 10 }
    }
}

/// Rejects sentences containing any of the provided characters.
///
/// Catches e-mail addresses, mentions and hashtags with the default `@` and `#`.
/// Other punctuation-heavy noise is not looked for.
pub struct ForbiddenChars {
    chars: Vec<char>,
}

impl ForbiddenChars {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl Filter<&str> for ForbiddenChars {
    fn detect(&self, sentence: &str) -> bool {
        !sentence.contains(&self.chars[..])
    }
}

impl Default for ForbiddenChars {
    fn default() -> Self {
        Self::new(vec!['@', '#'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_default() {
        let f = WordCount::default();
        assert!(!f.detect("two words"));
        assert!(f.detect("three words here"));
        assert!(f.detect(&vec!["word"; 40].join(" ")));
        assert!(!f.detect(&vec!["word"; 41].join(" ")));
        assert!(!f.detect(""));
    }

    #[test]
    fn word_count_whitespace() {
        let f = WordCount::new(3, 3);
        assert!(f.detect("  one\ttwo\nthree  "));
    }

    #[test]
    fn length_default() {
        let f = Length::default();
        assert_eq!(f.min_size(), &10);
        assert!(f.detect("0123456789"));
        assert!(!f.detect("012345678"));
    }

    #[test]
    fn length_counts_chars() {
        let f = Length::with_min_size(3);
        // 3 codepoints, 6 bytes
        assert!(f.detect("\u{e9}\u{e9}\u{e9}"));
        assert!(!f.detect("\u{e9}\u{e9}"));
    }

    #[test]
    fn forbidden_default() {
        let f = ForbiddenChars::default();
        assert!(!f.detect("Email me at test@example.com please"));
        assert!(!f.detect("What a #blessed day it is"));
        assert!(f.detect("Nothing to see (really) here [ok] <b>"));
    }

    #[test]
    fn forbidden_empty() {
        let f = ForbiddenChars::new(vec![]);
        assert!(f.detect("test@example.com #tag"));
    }
}
