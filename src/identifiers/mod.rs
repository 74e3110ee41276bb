/*! Language identification

Holds an [Identifier] trait for implementing other ones.

The current identifier used is [fasttext](https://fasttext.cc), with the `lid.176.bin` model.
Language identification is optional: see [crate::filtering::LanguageGate].
!*/
mod fasttext;
mod identification;

pub use self::fasttext::FastText;
pub use identification::Identification;

use crate::error::Error;

pub trait Identifier {
    /// Identifies the language of `sentence`.
    /// Returns `Ok(None)` if no reliable identification has been done.
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error>;
}
