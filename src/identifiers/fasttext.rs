//! Fasttext identifier
use std::convert::TryFrom;
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::debug;

use crate::error::Error;

use super::{Identification, Identifier};

/// Holds a [fasttext::FastText] instance and its prediction threshold.
pub struct FastText {
    predictor: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file.
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] errors.
    pub fn new(filename: &Path, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename_str = filename.to_str();
        match filename_str {
            None => Err(Error::Custom(format!(
                "invalid filepath for lid: {:?}",
                filename
            ))),
            Some(filename) => {
                predictor.load_model(filename)?;
                Ok(Self {
                    predictor,
                    threshold,
                })
            }
        }
    }
}

impl Identifier for FastText {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        let prediction = self
            .predictor
            .predict(sentence, 1, self.threshold)
            .map_err(Error::FastText)?;

        match prediction.into_iter().next() {
            Some(pred) => {
                debug!("{pred:?}");
                let id = Identification::try_from(pred)
                    .map_err(|e| Error::FastText(format!("invalid label: {:?}", e)))?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }
}
