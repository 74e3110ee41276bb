use std::collections::{HashMap, HashSet};

use gleaner::config::{Config, GutenbergConfig, QuotesConfig};
use gleaner::pipeline::{Harvest, Pipeline};
use gleaner::sources::Fetch;
use gleaner::types::SourceType;

/// In-memory website.
#[derive(Default)]
struct Web(HashMap<String, String>);

impl Web {
    fn with_page(mut self, url: &str, body: &str) -> Self {
        self.0.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetch for Web {
    fn fetch(&self, url: &str) -> Option<String> {
        self.0.get(url).cloned()
    }
}

fn quote_page(quotes: &[&str]) -> String {
    let spans: String = quotes
        .iter()
        .map(|q| {
            format!(
                "<div class=\"quote\"><span class=\"text\">\u{201C}{}\u{201D}</span></div>\n",
                q
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", spans)
}

fn book(sentences: &[String]) -> String {
    format!(
        "The Project Gutenberg eBook of a test book, with a license.
*** START OF THE PROJECT GUTENBERG EBOOK TEST ***
{}
*** END OF THE PROJECT GUTENBERG EBOOK TEST ***
Updated editions will replace the previous one, the old editions will be renamed.",
        sentences.join(" ")
    )
}

fn book_sentences(book_id: u32, nb: usize) -> Vec<String> {
    (0..nb)
        .map(|i| format!("This is sentence number {} of book {}.", i, book_id))
        .collect()
}

fn config(target: usize, book_ids: Vec<u32>) -> Config {
    Config {
        target,
        quotes: QuotesConfig {
            url_template: "http://quotes.test/page/{}/".to_string(),
            max_pages: 5,
            max_items: 500,
        },
        gutenberg: GutenbergConfig { book_ids },
        ..Default::default()
    }
}

#[test_log::test]
fn quotes_only() {
    let web = Web::default()
        .with_page(
            "http://quotes.test/page/1/",
            &quote_page(&[
                "The world as we have created it is a process of our thinking.",
                "Ok.",
                "A day without sunshine is like, you know, night.",
            ]),
        )
        .with_page(
            "http://quotes.test/page/2/",
            &quote_page(&[
                "A day without sunshine is like, you know, night.",
                "Try not to become a man of success.",
            ]),
        );

    // quotes are enough: books are not fetched
    let corpus = Harvest::new(config(3, vec![11]), web)
        .run()
        .unwrap()
        .unwrap();

    let stats = corpus.stats();
    assert_eq!(stats.collected, 4);
    assert_eq!(stats.deduplicated, 3);
    assert_eq!(stats.saved, 3);
    assert!(corpus
        .records()
        .iter()
        .all(|r| r.source_type() == SourceType::Quote));
}

#[test_log::test]
fn books_fill_the_gap() {
    let web = Web::default()
        .with_page(
            "http://quotes.test/page/1/",
            &quote_page(&["The world as we have created it is a process of our thinking."]),
        )
        .with_page(
            "https://www.gutenberg.org/files/11/11-0.txt",
            &book(&book_sentences(11, 5)),
        )
        .with_page(
            "https://www.gutenberg.org/cache/epub/84/pg84.txt",
            &book(&book_sentences(84, 5)),
        );

    // book 1 is missing and skipped
    let corpus = Harvest::new(config(20, vec![1, 11, 84]), web)
        .run()
        .unwrap()
        .unwrap();

    assert_eq!(corpus.stats().collected, 11);
    assert_eq!(corpus.stats().saved, 11);

    let sources: HashSet<&str> = corpus.records().iter().map(|r| r.source()).collect();
    assert!(sources.contains("http://quotes.test/page/1/"));
    assert!(sources.contains("https://www.gutenberg.org/files/11/11-0.txt"));
    assert!(sources.contains("https://www.gutenberg.org/cache/epub/84/pg84.txt"));

    // license text is out
    assert!(corpus
        .records()
        .iter()
        .all(|r| !r.text().contains("Gutenberg")));
}

#[test_log::test]
fn stops_fetching_books_at_target() {
    let web = Web::default()
        .with_page(
            "https://www.gutenberg.org/cache/epub/11/pg11.txt",
            &book(&book_sentences(11, 30)),
        )
        .with_page(
            "https://www.gutenberg.org/cache/epub/84/pg84.txt",
            &book(&book_sentences(84, 30)),
        );

    let corpus = Harvest::new(config(10, vec![11, 84]), web)
        .run()
        .unwrap()
        .unwrap();

    assert_eq!(corpus.stats().collected, 30);
    assert_eq!(corpus.stats().saved, 10);
    assert!(corpus
        .records()
        .iter()
        .all(|r| r.source() == "https://www.gutenberg.org/cache/epub/11/pg11.txt"));
}

#[test_log::test]
fn nothing_collected() {
    let corpus = Harvest::new(config(10, vec![11]), Web::default())
        .run()
        .unwrap();
    assert!(corpus.is_none());
}

#[test_log::test]
fn reproducible() {
    let web = || {
        Web::default().with_page(
            "https://www.gutenberg.org/cache/epub/11/pg11.txt",
            &book(&book_sentences(11, 50)),
        )
    };

    let a = Harvest::new(config(20, vec![11]), web()).run().unwrap().unwrap();
    let b = Harvest::new(config(20, vec![11]), web()).run().unwrap().unwrap();
    assert_eq!(a.records(), b.records());

    let mut other = config(20, vec![11]);
    other.seed = 7;
    let c = Harvest::new(other, web()).run().unwrap().unwrap();
    assert_ne!(a.records(), c.records());
}
