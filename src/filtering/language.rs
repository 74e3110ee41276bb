//! Language filtering.
use log::{debug, info, warn};

use crate::capability::Capability;
use crate::config::LanguageConfig;
use crate::identifiers::{FastText, Identifier};

use super::Filter;

pub type BoxedIdentifier = Box<dyn Identifier + Send + Sync>;

/// Keeps sentences identified as the target language.
///
/// The gate is conservative: sentences are rejected when the identifier
/// is unavailable, errors, or does not give a reliable identification.
pub struct LanguageGate {
    target: String,
    identifier: Capability<BoxedIdentifier>,
}

impl LanguageGate {
    pub fn new(target: String, identifier: Capability<BoxedIdentifier>) -> Self {
        Self { target, identifier }
    }

    /// Load the fastText model from the config.
    ///
    /// Returns [None] if language filtering is disabled.
    pub fn probe(config: &LanguageConfig) -> Option<Self> {
        if !config.enabled {
            debug!("language filtering disabled");
            return None;
        }

        let identifier = Capability::probe(FastText::new(&config.model, config.threshold))
            .map(|ft| Box::new(ft) as BoxedIdentifier);

        match &identifier {
            Capability::Available(_) => {
                info!("language filtering on {} using {:?}", config.target, config.model)
            }
            Capability::Unavailable(reason) => warn!(
                "language identifier unavailable ({}): every sentence will be rejected",
                reason
            ),
        }

        Some(Self::new(config.target.clone(), identifier))
    }
}

impl Filter<&str> for LanguageGate {
    fn detect(&self, sentence: &str) -> bool {
        let identifier = match self.identifier.available() {
            Some(identifier) => identifier,
            None => return false,
        };

        match identifier.identify(sentence) {
            Ok(Some(id)) => id.is(&self.target),
            Ok(None) => false,
            Err(e) => {
                debug!("identification failed on {:?}: {:?}", sentence, e);
                false
            }
        }
    }
}

impl Default for LanguageGate {
    /// English gate without identifier, rejecting everything.
    fn default() -> Self {
        Self::new(
            "en".to_string(),
            Capability::Unavailable("no identifier".to_string()),
        )
    }
}
