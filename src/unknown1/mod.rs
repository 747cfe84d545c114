//! Unknown1 FSK sensor decoder
//!
//! FSK_PULSE_PCM, 500 us per bit. A transmission starts with a preamble of
//! 0xAAAAAAAAAAAAAAAA; the payload after it is not understood yet, so it is
//! passed through as hex and binary strings.

mod decoder;
pub mod preamble;
mod types;

pub use decoder::Unknown1Decoder;
pub use preamble::{check_preamble, PREAMBLE, PREAMBLE_BITS};
pub use types::{DecodeOutcome, DecodedRecord, DeviceSpec, Modulation, OUTPUT_FIELDS, UNKNOWN1};
