use std::fs::File;
use std::io::{BufRead, BufReader};

use gleaner::io::writer::{CsvWriter, JsonLinesWriter, WriterTrait};
use gleaner::pipeline::Corpus;
use gleaner::types::{SentenceRecord, SourceType};

fn english_records(nb: usize) -> Vec<SentenceRecord> {
    (0..nb)
        .map(|x| {
            SentenceRecord::new(
                format!("english sentence number {}", x + 1),
                "https://www.gutenberg.org/cache/epub/1342/pg1342.txt".to_string(),
                SourceType::BookDerived,
            )
        })
        .collect()
}

#[test]
fn corpus_to_csv() {
    let dst = tempfile::tempdir().unwrap();
    let path = dst.path().join("scraped_sentences.csv");

    let mut records = english_records(30);
    records.extend(english_records(10));
    let corpus = Corpus::build(records, 25, 42).unwrap();

    let mut w = CsvWriter::from_path(&path).unwrap();
    w.write(corpus.records()).unwrap();
    w.flush().unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["Sentence", "Source", "SourceType"]
    );
    let read: Vec<SentenceRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(read.len(), 25);
    assert_eq!(read, corpus.records());
}

#[test]
fn corpus_to_jsonl() {
    let dst = tempfile::tempdir().unwrap();
    let path = dst.path().join("scraped_sentences.jsonl");

    let corpus = Corpus::build(english_records(5), 10, 42).unwrap();

    let mut w = JsonLinesWriter::from_path(&path).unwrap();
    for record in corpus.records() {
        w.write_single(record).unwrap();
    }
    w.flush().unwrap();

    let lines: Vec<String> = BufReader::new(File::open(&path).unwrap())
        .lines()
        .map(|l| l.unwrap())
        .collect();
    assert_eq!(lines.len(), 5);
    for (line, record) in lines.iter().zip(corpus.records()) {
        let read: SentenceRecord = serde_json::from_str(line).unwrap();
        assert_eq!(&read, record);
    }
}
