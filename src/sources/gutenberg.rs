//! Project Gutenberg book fetcher.
use log::{debug, info, warn};

use crate::types::{RawDocument, SourceType};

use super::Fetch;

const BASE_URL: &str = "https://www.gutenberg.org";

#[derive(Debug, Clone, Default)]
pub struct Gutenberg;

impl Gutenberg {
    /// URLs a plain text version of the book may live at, in order of preference.
    pub fn candidate_urls(book_id: u32) -> [String; 3] {
        [
            format!("{}/cache/epub/{id}/pg{id}.txt", BASE_URL, id = book_id),
            format!("{}/files/{id}/{id}-0.txt", BASE_URL, id = book_id),
            format!("{}/files/{id}/{id}.txt", BASE_URL, id = book_id),
        ]
    }

    /// Fetch a book, trying each candidate URL.
    ///
    /// The origin of the document is the URL that worked.
    pub fn fetch_book<F: Fetch>(&self, book_id: u32, fetcher: &F) -> Option<RawDocument> {
        info!("Fetching Gutenberg book id={}", book_id);
        for url in Self::candidate_urls(book_id) {
            match fetcher.fetch(&url) {
                Some(text) => {
                    debug!("got book {} from {} ({} bytes)", book_id, url, text.len());
                    return Some(RawDocument::new(text, url, SourceType::BookDerived));
                }
                None => debug!("book {} not available at {}", book_id, url),
            }
        }
        warn!("failed to fetch book {}, continuing", book_id);
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Pages(HashMap<String, String>);

    impl Fetch for Pages {
        fn fetch(&self, url: &str) -> Option<String> {
            self.0.get(url).cloned()
        }
    }

    #[test]
    fn candidate_urls() {
        assert_eq!(
            Gutenberg::candidate_urls(11),
            [
                "https://www.gutenberg.org/cache/epub/11/pg11.txt",
                "https://www.gutenberg.org/files/11/11-0.txt",
                "https://www.gutenberg.org/files/11/11.txt",
            ]
        );
    }

    #[test]
    fn fallback_url() {
        let mut pages = HashMap::new();
        pages.insert(
            "https://www.gutenberg.org/files/84/84.txt".to_string(),
            "Frankenstein".to_string(),
        );
        let doc = Gutenberg.fetch_book(84, &Pages(pages)).unwrap();
        assert_eq!(doc.text(), "Frankenstein");
        assert_eq!(doc.origin(), "https://www.gutenberg.org/files/84/84.txt");
        assert_eq!(doc.source_type(), SourceType::BookDerived);
    }

    #[test]
    fn first_url_wins() {
        let pages: HashMap<String, String> = Gutenberg::candidate_urls(98)
            .iter()
            .enumerate()
            .map(|(i, url)| (url.clone(), i.to_string()))
            .collect();
        let doc = Gutenberg.fetch_book(98, &Pages(pages)).unwrap();
        assert_eq!(doc.text(), "0");
    }

    #[test]
    fn missing_book() {
        assert!(Gutenberg.fetch_book(1, &Pages(HashMap::new())).is_none());
    }
}
