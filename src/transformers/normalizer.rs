/*! Sentence normalization

Cleans a single sentence candidate. Steps are applied in order:
1. trim surrounding whitespace,
2. remove URL-like tokens (`http…`/`www.…` up to the next whitespace),
3. replace each run of characters outside printable ASCII with a single space,
4. collapse whitespace runs into a single space,
5. strip surrounding quotes (`"`, `'`, `` ` ``) and whitespace.

Step 3 is lossy: accented letters, typographic quotes and dashes, and non-Latin scripts are dropped.

The result may be empty, meaning that no sentence was produced.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

lazy_static! {
    static ref URL: Regex = Regex::new(r"http\S+|www\.\S+").unwrap();
    static ref NON_PRINTABLE: Regex = Regex::new(r"[^\x20-\x7E]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Characters stripped from both ends at the last step.
const SURROUNDING: [char; 4] = [' ', '"', '\'', '`'];

#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    pub fn normalize(&self, sentence: &str) -> String {
        let s = sentence.trim();
        let s = URL.replace_all(s, "");
        let s = NON_PRINTABLE.replace_all(&s, " ");
        let s = WHITESPACE.replace_all(&s, " ");
        s.trim_matches(&SURROUNDING[..]).trim().to_string()
    }
}

impl Transform<String> for Normalizer {
    fn transform_own(&self, sentence: String) -> String {
        self.normalize(&sentence)
    }
}
