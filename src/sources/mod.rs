//! Document sources.
//!
//! Sources turn fetched pages into [crate::types::RawDocument]s.
//! Fetching itself is abstracted behind [Fetch], so that sources can be exercised without network access.
mod gutenberg;
mod quotes;

pub use gutenberg::Gutenberg;
pub use quotes::Quotes;

/// Something able to get the body of a page.
pub trait Fetch {
    /// Get the body of `url`.
    ///
    /// Returns [None] on failure: implementors are expected to handle retries themselves.
    fn fetch(&self, url: &str) -> Option<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Option<String> {
        (**self).fetch(url)
    }
}
