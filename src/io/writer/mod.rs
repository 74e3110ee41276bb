/*!
# Corpus writing

Writers share the [WriterTrait] interface and serialize [crate::types::SentenceRecord]s:
- [CsvWriter] writes a CSV file with a `Sentence,Source,SourceType` header,
- [JsonLinesWriter] writes one JSON object per line.
!*/
mod csvwriter;
mod jsonlwriter;
mod writertrait;
pub use csvwriter::CsvWriter;
pub use jsonlwriter::JsonLinesWriter;
pub use writertrait::WriterTrait;
