/*! Sentence segmentation

Holds a [Segment] trait for implementing segmenters, and the [Splitter] that picks one.

Two segmenters are available:
- [PunktSegmenter], which needs pretrained parameters on disk,
- [RegexSegmenter], a dependency-free fallback that is always available.

The [Splitter] probes the Punkt parameters once, at construction.
If they are unavailable, or if segmentation fails on a given text, the regex segmenter is used.
!*/
mod heuristic;
mod punkt;

pub use self::heuristic::RegexSegmenter;
pub use self::punkt::{PunktParams, PunktSegmenter};

use log::{debug, info, warn};

use crate::capability::Capability;
use crate::config::SplitterConfig;
use crate::error::Error;

pub trait Segment {
    /// Segments `text` into sentence candidates, preserving wording.
    fn segment(&self, text: &str) -> Result<Vec<String>, Error>;
}

pub type BoxedSegment = Box<dyn Segment + Send + Sync>;

pub struct Splitter {
    primary: Capability<BoxedSegment>,
    fallback: RegexSegmenter,
}

impl Splitter {
    pub fn new(primary: Capability<BoxedSegment>) -> Self {
        Self {
            primary,
            fallback: RegexSegmenter,
        }
    }

    /// Only use the regex segmenter.
    pub fn regex_only() -> Self {
        Self::new(Capability::Unavailable(
            "regex segmentation requested".to_string(),
        ))
    }

    /// Probe for Punkt parameters and build the splitter accordingly.
    pub fn probe(config: &SplitterConfig) -> Self {
        let primary = match &config.punkt_dir {
            Some(dir) => Capability::probe(PunktParams::from_dir(dir))
                .map(|params| Box::new(PunktSegmenter::new(params)) as BoxedSegment),
            None => Capability::Unavailable("no punkt parameters configured".to_string()),
        };

        match (&primary, &config.punkt_dir) {
            (Capability::Available(_), _) => info!("using punkt segmenter"),
            (Capability::Unavailable(reason), Some(_)) => {
                warn!("punkt segmenter unavailable ({}), using regex segmenter", reason)
            }
            (Capability::Unavailable(reason), None) => {
                info!("{}, using regex segmenter", reason)
            }
        }

        Self::new(primary)
    }

    /// Is the statistical segmenter in use?
    pub fn is_statistical(&self) -> bool {
        self.primary.is_available()
    }

    /// Splits `text` into sentence candidates. Never fails.
    pub fn split(&self, text: &str) -> Vec<String> {
        if let Some(primary) = self.primary.available() {
            match primary.segment(text) {
                Ok(sentences) => return sentences,
                Err(e) => debug!("segmentation failed ({:?}), using regex segmenter", e),
            }
        }

        self.fallback.split(text)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::regex_only()
    }
}
