/*! Configuration.

Every threshold and knob used by the pipeline lives in [Config], which is passed down
to the components at construction time. Defaults are documented on each field.

A config can be loaded from a JSON file. Missing fields fall back to their defaults:

```json
{
  "target": 500,
  "thresholds": { "min_words": 4 },
  "gutenberg": { "book_ids": [1342, 11] }
}
```
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    /// Size of the final corpus (2000).
    pub target: usize,
    /// Shuffle seed (42).
    pub seed: u64,
    pub splitter: SplitterConfig,
    pub language: LanguageConfig,
    pub fetch: FetchConfig,
    pub quotes: QuotesConfig,
    pub gutenberg: GutenbergConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            target: 2000,
            seed: 42,
            splitter: SplitterConfig::default(),
            language: LanguageConfig::default(),
            fetch: FetchConfig::default(),
            quotes: QuotesConfig::default(),
            gutenberg: GutenbergConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load a config from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading config from {:?}", path);
        let f = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(f))?;
        Ok(config)
    }
}

/// Admission thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum number of whitespace-separated words (3).
    pub min_words: usize,
    /// Maximum number of whitespace-separated words (40).
    pub max_words: usize,
    /// Minimum length in characters (10).
    pub min_length: usize,
    /// Sentences holding any of these are rejected (`@`, `#`).
    pub forbidden: Vec<char>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_words: 3,
            max_words: 40,
            min_length: 10,
            forbidden: vec!['@', '#'],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SplitterConfig {
    /// Directory holding Punkt parameters (`abbrev_types.txt`, `collocations.tab`, `sent_starters.txt`).
    /// When missing, the regex segmenter is used.
    pub punkt_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanguageConfig {
    /// Enables language filtering (off).
    pub enabled: bool,
    /// Path to the fastText language identification model (`lid.176.bin`).
    pub model: PathBuf,
    /// Accepted language (`en`).
    pub target: String,
    /// Minimum prediction probability (0.0).
    pub threshold: f32,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: PathBuf::from("lid.176.bin"),
            target: "en".to_string(),
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    /// Delay between requests when robots.txt has no crawl-delay, in seconds (1.0).
    pub default_delay: f64,
    /// Upper bound of the random delay added after a successful request, in seconds (0.5).
    pub jitter: f64,
    /// Number of attempts per URL (3).
    pub max_retries: u32,
    /// Request timeout, in seconds (15).
    pub timeout: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("gleaner/{}", env!("CARGO_PKG_VERSION")),
            default_delay: 1.0,
            jitter: 0.5,
            max_retries: 3,
            timeout: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuotesConfig {
    /// Page URL, `{}` being replaced by the page number.
    pub url_template: String,
    /// Last page to visit (50).
    pub max_pages: usize,
    /// Stop after a page that brings the number of quotes to this (500).
    pub max_items: usize,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            url_template: "http://quotes.toscrape.com/page/{}/".to_string(),
            max_pages: 50,
            max_items: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GutenbergConfig {
    pub book_ids: Vec<u32>,
}

impl Default for GutenbergConfig {
    /// Pride and Prejudice, Alice in Wonderland, Frankenstein, Sherlock Holmes,
    /// A Tale of Two Cities, Huckleberry Finn, Moby-Dick, Dracula.
    fn default() -> Self {
        Self {
            book_ids: vec![1342, 11, 84, 1661, 98, 76, 2701, 345],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub csv: PathBuf,
    pub jsonl: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: PathBuf::from("scraped_sentences.csv"),
            jsonl: None,
        }
    }
}
