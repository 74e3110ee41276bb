/*! Corpus finalization

Collected records are deduplicated on their text, shuffled with a seeded RNG and truncated to the target size.

Deduplication uses [runiq](https://github.com/whitfin/runiq) to check for identical sentences.
The first occurrence of a sentence is the one that is kept.
!*/
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use runiq::filters::{DigestFilter, Filter};

use crate::types::SentenceRecord;

/// Record counts at each finalization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorpusStats {
    pub collected: usize,
    pub deduplicated: usize,
    pub saved: usize,
}

#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<SentenceRecord>,
    stats: CorpusStats,
}

/// Removes records whose text has already been seen, keeping order.
pub fn dedup(records: Vec<SentenceRecord>) -> Vec<SentenceRecord> {
    let mut filter = DigestFilter::default();
    records
        .into_iter()
        .filter(|record| filter.detect(record.text().as_bytes()))
        .collect()
}

impl Corpus {
    /// Finalize collected records.
    ///
    /// Returns [None] if there is nothing to build a corpus from.
    pub fn build(records: Vec<SentenceRecord>, target: usize, seed: u64) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let collected = records.len();
        let mut records = dedup(records);
        let deduplicated = records.len();

        let mut rng = StdRng::seed_from_u64(seed);
        records.shuffle(&mut rng);
        records.truncate(target);

        let stats = CorpusStats {
            collected,
            deduplicated,
            saved: records.len(),
        };
        info!(
            "corpus: {} collected, {} after deduplication, {} kept",
            stats.collected, stats.deduplicated, stats.saved
        );

        Some(Self { records, stats })
    }

    pub fn records(&self) -> &[SentenceRecord] {
        self.records.as_ref()
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn into_records(self) -> Vec<SentenceRecord> {
        self.records
    }
}
