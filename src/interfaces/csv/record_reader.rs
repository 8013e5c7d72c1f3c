use super::record::PaymentRecord;
use crate::error::{Result, RuleError};
use std::io::Read;

/// Streams `PaymentRecord` rows out of a CSV document with a header line.
///
/// Rows may stop before the trailing `status` column; the missing fields
/// are read as empty.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one `Result` per data row, so a bad row does not end the stream.
    pub fn records(mut self) -> impl Iterator<Item = Result<PaymentRecord>> {
        // An unreadable header leaves every row failing on its own.
        let headers = self.reader.headers().cloned().unwrap_or_default();

        self.reader.into_records().map(move |row| {
            let mut row = row?;
            while row.len() < headers.len() {
                row.push_field("");
            }
            row.deserialize(Some(&headers)).map_err(RuleError::from)
        })
    }
}
