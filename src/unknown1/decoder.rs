//! Unknown1 decode callback
//!
//! capture → flatten → preamble check → render → emit

use tracing::{debug, trace, warn};

use super::preamble::check_preamble;
use super::types::{DecodeOutcome, DecodedRecord, DeviceSpec, UNKNOWN1};
use crate::bits::{to_bit_string, to_hex, Capture};
use crate::output::RecordSink;

/// Decoder bound to a static device definition
#[derive(Debug, Clone, Copy)]
pub struct Unknown1Decoder {
    spec: &'static DeviceSpec,
}

impl Unknown1Decoder {
    pub fn new() -> Self {
        Self { spec: &UNKNOWN1 }
    }

    pub fn spec(&self) -> &'static DeviceSpec {
        self.spec
    }

    /// Decode one capture, emitting at most one record into `sink`
    pub fn decode<S: RecordSink + ?Sized>(&self, capture: &Capture, sink: &mut S) -> DecodeOutcome {
        log_rows(self.spec.name, capture);

        let flat = match capture.flatten() {
            Ok(flat) => flat,
            Err(e) => {
                warn!("{}: {}", self.spec.name, e);
                return DecodeOutcome::NotRecognized;
            }
        };

        if !check_preamble(&flat) {
            trace!(
                "{}: preamble mismatch ({} bits, head={})",
                self.spec.name,
                flat.len(),
                to_hex(&flat.byte_view()[..flat.byte_view().len().min(8)])
            );
            return DecodeOutcome::NotRecognized;
        }

        let record = DecodedRecord {
            model: self.spec.name.to_string(),
            short_width: self.spec.short_width,
            long_width: self.spec.long_width,
            gap_limit: self.spec.gap_limit,
            reset_limit: self.spec.reset_limit,
            length_bits: flat.len(),
            hex_data: to_hex(flat.byte_view()),
            binary_data: to_bit_string(flat.byte_view(), flat.len()),
            row_count: capture.num_rows(),
        };

        sink.emit(record);
        DecodeOutcome::Decoded
    }
}

impl Default for Unknown1Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Dump the demodulated rows, for checking that the timing limits fire this decoder
fn log_rows(name: &str, capture: &Capture) {
    debug!("{}: {} rows, {} bits", name, capture.num_rows(), capture.total_bits());
    for (r, row) in capture.rows().iter().enumerate() {
        debug!(
            "{}: [{:02}] {{{}}} {}",
            name,
            r,
            row.bits(),
            to_bit_string(row.bytes(), row.bits())
        );
    }
}
