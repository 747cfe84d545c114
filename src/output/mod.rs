//! Record sinks and writers
//!
//! The decoder hands finished records to a [`RecordSink`]. [`RecordWriter`]
//! renders them for the outside world as key/value lines, JSON lines or CSV.

mod writer;

pub use writer::{OutputFormat, RecordWriter};

use crate::unknown1::DecodedRecord;

/// Receiver of decoded records
pub trait RecordSink {
    fn emit(&mut self, record: DecodedRecord);
}

impl RecordSink for Vec<DecodedRecord> {
    fn emit(&mut self, record: DecodedRecord) {
        self.push(record);
    }
}
