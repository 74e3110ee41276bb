//! JSON Lines writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::types::SentenceRecord;

use super::WriterTrait;

pub struct JsonLinesWriter<W: Write> {
    handle: W,
}

impl JsonLinesWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `dst`.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        debug!("writing jsonl to {:?}", dst);
        Ok(Self {
            handle: BufWriter::new(File::create(dst)?),
        })
    }
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn from_writer(handle: W) -> Self {
        Self { handle }
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

impl<W: Write> WriterTrait for JsonLinesWriter<W> {
    type Item = SentenceRecord;

    fn write(&mut self, records: &[SentenceRecord]) -> Result<(), Error> {
        let mut out = String::new();
        for record in records {
            out += &serde_json::to_string(record)?;
            out.push('\n');
        }
        self.handle.write_all(out.as_bytes())?;
        Ok(())
    }

    fn write_single(&mut self, record: &SentenceRecord) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
