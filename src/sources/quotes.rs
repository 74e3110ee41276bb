//! Quotes website scraper.
//!
//! Pages are visited in order, and each `span.text` element becomes a quote [RawDocument].
use itertools::Itertools;
use log::{debug, info, warn};
use scraper::{Html, Selector};

use crate::config::QuotesConfig;
use crate::error::Error;
use crate::types::{RawDocument, SourceType};

use super::Fetch;

const QUOTE_SELECTOR: &str = "span.text";

pub struct Quotes {
    config: QuotesConfig,
}

impl Quotes {
    pub fn new(config: QuotesConfig) -> Self {
        Self { config }
    }

    /// Get the URL of a page (starting at 1).
    pub fn page_url(&self, page: usize) -> String {
        self.config.url_template.replace("{}", &page.to_string())
    }

    /// Get the text of every quote of a page.
    pub fn parse_page(html: &str) -> Result<Vec<String>, Error> {
        let selector = Selector::parse(QUOTE_SELECTOR)
            .map_err(|e| Error::Custom(format!("invalid selector {}: {:?}", QUOTE_SELECTOR, e)))?;
        let document = Html::parse_document(html);

        Ok(document
            .select(&selector)
            .map(|element| element.text().join("").trim().to_string())
            .collect())
    }

    /// Scrape pages until one fails, has no quotes, or enough quotes have been collected.
    pub fn scrape<F: Fetch>(&self, fetcher: &F) -> Vec<RawDocument> {
        info!("Scraping quotes from {}", self.page_url(1));
        let mut documents = Vec::new();

        for page in 1..=self.config.max_pages {
            let url = self.page_url(page);
            let body = match fetcher.fetch(&url) {
                Some(body) => body,
                None => {
                    warn!("could not fetch {}, stopping", url);
                    break;
                }
            };

            let quotes = match Self::parse_page(&body) {
                Ok(quotes) => quotes,
                Err(e) => {
                    warn!("could not parse {}: {:?}", url, e);
                    break;
                }
            };

            if quotes.is_empty() {
                debug!("no quotes on {}, stopping", url);
                break;
            }

            documents.extend(
                quotes
                    .into_iter()
                    .map(|quote| RawDocument::new(quote, url.clone(), SourceType::Quote)),
            );

            if documents.len() >= self.config.max_items {
                debug!("got {} quotes, stopping", documents.len());
                break;
            }
        }

        info!("Collected {} quotes", documents.len());
        documents
    }
}

impl Default for Quotes {
    fn default() -> Self {
        Self::new(QuotesConfig::default())
    }
}
