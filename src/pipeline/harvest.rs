/*! End-to-end corpus harvesting.

Quotes are scraped first. If they do not bring enough sentences, books are fetched
one after the other until book-derived sentences reach the target.

Collected sentences are then deduplicated, shuffled and truncated into a [Corpus].
!*/
use log::{info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::sources::{Fetch, Gutenberg, Quotes};
use crate::types::SentenceRecord;

use super::{Corpus, Pipeline, SentencePipeline};

pub struct Harvest<F: Fetch> {
    config: Config,
    fetcher: F,
    pipeline: SentencePipeline,
}

impl<F: Fetch> Harvest<F> {
    /// Build a harvest, probing optional capabilities from the config.
    pub fn new(config: Config, fetcher: F) -> Self {
        let pipeline = SentencePipeline::from_config(&config);
        Self {
            config,
            fetcher,
            pipeline,
        }
    }

    /// Replace the sentence pipeline.
    pub fn with_pipeline(mut self, pipeline: SentencePipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Get sentences from the quotes website.
    fn quotes(&self) -> Vec<SentenceRecord> {
        Quotes::new(self.config.quotes.clone())
            .scrape(&self.fetcher)
            .into_iter()
            .flat_map(|doc| self.pipeline.process(doc))
            .collect()
    }

    /// Get sentences from books, stopping once `target` is reached.
    fn books(&self) -> Vec<SentenceRecord> {
        let target = self.config.target;
        let mut records = Vec::new();

        for &book_id in &self.config.gutenberg.book_ids {
            let doc = match Gutenberg.fetch_book(book_id, &self.fetcher) {
                Some(doc) => doc,
                None => continue,
            };

            records.extend(self.pipeline.process(doc));
            info!("extracted {} sentences so far", records.len());

            if records.len() >= target {
                break;
            }
        }

        records
    }
}

impl<F: Fetch> Pipeline<Option<Corpus>> for Harvest<F> {
    fn run(&self) -> Result<Option<Corpus>, Error> {
        let target = self.config.target;

        let mut records = self.quotes();
        info!("Collected {} sentences from quotes", records.len());

        if records.len() < target {
            info!(
                "Need {} more sentences from Gutenberg books",
                target - records.len()
            );
            records.extend(self.books());
            info!("Total collected after Gutenberg: {}", records.len());
        }

        let corpus = Corpus::build(records, target, self.config.seed);
        if corpus.is_none() {
            warn!("No sentences collected");
        }

        Ok(corpus)
    }
}
