/*! Header/Footer stripping

Long-form texts (Project Gutenberg books) are framed by a license header and footer,
delimited by lines such as

```text
*** START OF THE PROJECT GUTENBERG EBOOK ALICE'S ADVENTURES IN WONDERLAND ***
...
*** END OF THE PROJECT GUTENBERG EBOOK ALICE'S ADVENTURES IN WONDERLAND ***
```

[Boundary] keeps what lies between the two markers.
If only the start marker is found, everything after it is kept.
If there is no start marker, the text is kept untouched.
!*/
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};

use crate::error::Error;
use crate::types::RawDocument;

use super::Transform;

lazy_static! {
    static ref GUTENBERG_START: Regex =
        RegexBuilder::new(r"\*\*\*\s*START OF (THE|THIS) PROJECT GUTENBERG.*\*\*\*")
            .case_insensitive(true)
            .build()
            .unwrap();
    static ref GUTENBERG_END: Regex =
        RegexBuilder::new(r"\*\*\*\s*END OF (THE|THIS) PROJECT GUTENBERG.*\*\*\*")
            .case_insensitive(true)
            .build()
            .unwrap();
}

#[derive(Debug, Clone)]
pub struct Boundary {
    start: Regex,
    end: Regex,
}

impl Boundary {
    /// Use custom start/end markers.
    /// Markers are matched case-insensitively.
    ///
    /// # Errors
    /// Returns an error if one of the patterns is not a valid regex.
    pub fn new(start: &str, end: &str) -> Result<Self, Error> {
        Ok(Self {
            start: RegexBuilder::new(start).case_insensitive(true).build()?,
            end: RegexBuilder::new(end).case_insensitive(true).build()?,
        })
    }

    /// Project Gutenberg markers.
    pub fn gutenberg() -> Self {
        Self {
            start: GUTENBERG_START.clone(),
            end: GUTENBERG_END.clone(),
        }
    }

    /// Returns the content-bearing part of `text`.
    ///
    /// The end marker is only looked for after the start marker.
    pub fn extract<'a>(&self, text: &'a str) -> &'a str {
        let start = match self.start.find(text) {
            Some(m) => m.end(),
            None => {
                debug!("no start marker found, keeping whole text");
                return text;
            }
        };

        match self.end.find_at(text, start) {
            Some(end) => &text[start..end.start()],
            None => {
                debug!("no end marker found, keeping text after start marker");
                &text[start..]
            }
        }
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::gutenberg()
    }
}

impl Transform<RawDocument> for Boundary {
    fn transform_own(&self, doc: RawDocument) -> RawDocument {
        let body = self.extract(doc.text()).to_string();
        doc.with_text(body)
    }
}
