/*! Identification type

Pairs a BCP47 language tag with the probability of the prediction.
!*/
use std::convert::TryFrom;

use fasttext::Prediction;
use oxilangtag::{LanguageTag, LanguageTagParseError};

#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    label: LanguageTag<String>,
    prob: f32,
}

impl Identification {
    pub fn new(label: LanguageTag<String>, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &LanguageTag<String> {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }

    /// Checks if the identified primary language is `lang` (case-insensitive).
    pub fn is(&self, lang: &str) -> bool {
        self.label.primary_language().eq_ignore_ascii_case(lang)
    }
}

impl TryFrom<Prediction> for Identification {
    type Error = LanguageTagParseError;
    fn try_from(prediction: Prediction) -> Result<Self, LanguageTagParseError> {
        // skip __label__
        let label = prediction.label.chars().skip(9).collect::<String>();

        //convert to valid bcp47
        let label = label.replace('_', "-");

        Ok(Self::new(
            LanguageTag::parse_and_normalize(&label)?,
            prediction.prob,
        ))
    }
}
