//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::Config;
use crate::error::Error;

#[derive(Debug, StructOpt, Default)]
#[structopt(
    name = "gleaner",
    about = "Build a corpus of short English sentences from quotes and public domain books."
)]
/// Every option overrides the corresponding field of the config (file or defaults).
pub struct Gleaner {
    #[structopt(parse(from_os_str), long, help = "JSON config file")]
    pub config: Option<PathBuf>,
    #[structopt(long, help = "number of sentences of the final corpus (2000)")]
    pub target: Option<usize>,
    #[structopt(long, help = "shuffle seed (42)")]
    pub seed: Option<u64>,
    #[structopt(long = "min-words", help = "minimum number of words of a sentence (3)")]
    pub min_words: Option<usize>,
    #[structopt(long = "max-words", help = "maximum number of words of a sentence (40)")]
    pub max_words: Option<usize>,
    #[structopt(
        long = "min-length",
        help = "minimum number of characters of a sentence (10)"
    )]
    pub min_length: Option<usize>,
    #[structopt(long = "lang-filter", help = "keep only sentences identified as English")]
    pub lang_filter: bool,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "path to the fastText language identification model"
    )]
    pub lid_path: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "punkt-dir",
        help = "directory holding punkt parameters. Regex splitting is used when absent."
    )]
    pub punkt_dir: Option<PathBuf>,
    #[structopt(
        long,
        use_delimiter = true,
        help = "comma separated Gutenberg book ids"
    )]
    pub books: Option<Vec<u32>>,
    #[structopt(long = "max-pages", help = "number of quote pages to visit (50)")]
    pub max_pages: Option<usize>,
    #[structopt(parse(from_os_str), long, help = "CSV output (scraped_sentences.csv)")]
    pub csv: Option<PathBuf>,
    #[structopt(parse(from_os_str), long, help = "optional JSON Lines output")]
    pub jsonl: Option<PathBuf>,
}

impl Gleaner {
    /// Load the config file if any, and apply command line overrides.
    pub fn into_config(self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };

        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(min_words) = self.min_words {
            config.thresholds.min_words = min_words;
        }
        if let Some(max_words) = self.max_words {
            config.thresholds.max_words = max_words;
        }
        if let Some(min_length) = self.min_length {
            config.thresholds.min_length = min_length;
        }
        if self.lang_filter {
            config.language.enabled = true;
        }
        if let Some(lid_path) = self.lid_path {
            config.language.model = lid_path;
        }
        if let Some(punkt_dir) = self.punkt_dir {
            config.splitter.punkt_dir = Some(punkt_dir);
        }
        if let Some(books) = self.books {
            config.gutenberg.book_ids = books;
        }
        if let Some(max_pages) = self.max_pages {
            config.quotes.max_pages = max_pages;
        }
        if let Some(csv) = self.csv {
            config.output.csv = csv;
        }
        if let Some(jsonl) = self.jsonl {
            config.output.jsonl = Some(jsonl);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn no_args() {
        let opt = Gleaner::from_iter_safe(&["gleaner"]).unwrap();
        assert_eq!(opt.into_config().unwrap(), Config::default());
    }

    #[test]
    fn overrides() {
        let opt = Gleaner::from_iter_safe(&[
            "gleaner",
            "--target",
            "100",
            "--min-words",
            "5",
            "--books",
            "11,84",
            "--lang-filter",
            "--jsonl",
            "out.jsonl",
        ])
        .unwrap();
        let config = opt.into_config().unwrap();

        assert_eq!(config.target, 100);
        assert_eq!(config.thresholds.min_words, 5);
        assert_eq!(config.thresholds.max_words, 40);
        assert_eq!(config.gutenberg.book_ids, vec![11, 84]);
        assert!(config.language.enabled);
        assert_eq!(config.output.jsonl, Some(PathBuf::from("out.jsonl")));
    }

    #[test]
    fn cli_over_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"target": 500, "seed": 7}}"#).unwrap();

        let opt = Gleaner {
            config: Some(f.path().to_path_buf()),
            target: Some(10),
            ..Default::default()
        };
        let config = opt.into_config().unwrap();
        assert_eq!(config.target, 10);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn invalid_book_id() {
        assert!(Gleaner::from_iter_safe(&["gleaner", "--books", "11,alice"]).is_err());
    }

    #[test]
    fn missing_config_file() {
        let opt = Gleaner {
            config: Some(PathBuf::from("does/not/exist.json")),
            ..Default::default()
        };
        assert!(opt.into_config().is_err());
    }
}
