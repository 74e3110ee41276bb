//! # Gleaner
//!
//! Builds a corpus of short English sentences from quotes.toscrape.com and Project Gutenberg.
//!
//! ```sh
//! gleaner 0.1.0
//! Build a corpus of short English sentences from quotes and public domain books.
//!
//! USAGE:
//!     gleaner [FLAGS] [OPTIONS]
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=gleaner=info`).
use structopt::StructOpt;

use gleaner::cli;
use gleaner::download::PoliteClient;
use gleaner::error;
use gleaner::io::writer::{CsvWriter, JsonLinesWriter, WriterTrait};
use gleaner::pipeline::{Harvest, Pipeline};

#[macro_use]
extern crate log;

const NB_SAMPLES: usize = 10;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Gleaner::from_args();
    debug!("cli args\n{:#?}", opt);

    let config = opt.into_config()?;
    debug!("config\n{:#?}", config);

    let client = PoliteClient::new(config.fetch.clone())?;
    let output = config.output.clone();
    let harvest = Harvest::new(config, client);

    let corpus = match harvest.run()? {
        Some(corpus) => corpus,
        None => {
            println!("No sentences collected. Exiting.");
            return Ok(());
        }
    };

    let mut csv = CsvWriter::from_path(&output.csv)?;
    csv.write(corpus.records())?;
    csv.flush()?;

    if let Some(jsonl) = &output.jsonl {
        let mut w = JsonLinesWriter::from_path(jsonl)?;
        w.write(corpus.records())?;
        w.flush()?;
    }

    let stats = corpus.stats();
    info!(
        "Saved {} sentences (orig {}, deduplicated {}) to {:?}",
        stats.saved, stats.collected, stats.deduplicated, output.csv
    );

    println!("\nSample sentences:");
    for record in corpus.records().iter().take(NB_SAMPLES) {
        println!("{}", record.text());
    }

    Ok(())
}
