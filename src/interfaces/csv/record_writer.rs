use super::record::ProcessedRecord;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Comma separated rows with a header line.
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes processed records to any `Write` sink (e.g., Stdout, File).
pub struct RecordWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(target: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(target)),
            OutputFormat::Json => Sink::Json(target),
        };
        Self { sink }
    }

    pub fn write_record(&mut self, record: &ProcessedRecord) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(record)?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
