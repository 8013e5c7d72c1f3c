//! CSV input and output of payment validation records.

pub mod record;
pub mod record_reader;
pub mod record_writer;
