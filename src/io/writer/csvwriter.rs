//! CSV writer.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::types::SentenceRecord;

use super::WriterTrait;

pub struct CsvWriter<W: Write> {
    handle: csv::Writer<W>,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `dst`.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        debug!("writing csv to {:?}", dst);
        Ok(Self {
            handle: csv::Writer::from_path(dst)?,
        })
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(w: W) -> Self {
        Self {
            handle: csv::Writer::from_writer(w),
        }
    }

    /// Flush and get the underlying writer back.
    pub fn into_inner(self) -> Result<W, Error> {
        self.handle
            .into_inner()
            .map_err(|e| Error::Custom(format!("could not flush csv writer: {}", e.error())))
    }
}

impl<W: Write> WriterTrait for CsvWriter<W> {
    type Item = SentenceRecord;

    fn write(&mut self, records: &[SentenceRecord]) -> Result<(), Error> {
        for record in records {
            self.write_single(record)?;
        }
        Ok(())
    }

    /// The header is written along with the first record.
    fn write_single(&mut self, record: &SentenceRecord) -> Result<(), Error> {
        Ok(self.handle.serialize(record)?)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::SourceType;

    use super::*;

    fn records() -> Vec<SentenceRecord> {
        vec![
            SentenceRecord::new(
                "It was the best of times, it was the worst of times.".to_string(),
                "https://www.gutenberg.org/cache/epub/98/pg98.txt".to_string(),
                SourceType::BookDerived,
            ),
            SentenceRecord::new(
                "A \"quoted\" sentence here.".to_string(),
                "http://quotes.toscrape.com/page/1/".to_string(),
                SourceType::Quote,
            ),
        ]
    }

    #[test]
    fn write() {
        let mut w = CsvWriter::from_writer(Vec::new());
        w.write(&records()).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();

        let expected = "Sentence,Source,SourceType
\"It was the best of times, it was the worst of times.\",https://www.gutenberg.org/cache/epub/98/pg98.txt,book-derived
\"A \"\"quoted\"\" sentence here.\",http://quotes.toscrape.com/page/1/,quote
";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty() {
        let mut w = CsvWriter::from_writer(Vec::new());
        w.write(&[]).unwrap();
        assert!(w.into_inner().unwrap().is_empty());
    }

    #[test]
    fn from_path() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("out.csv");
        let mut w = CsvWriter::from_path(&path).unwrap();
        w.write(&records()).unwrap();
        w.flush().unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read: Vec<SentenceRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(read, records());
    }
}
