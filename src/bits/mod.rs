//! Bit-level plumbing: captures, the flattened bit buffer and renderers

mod buffer;
mod capture;
pub mod render;

use std::collections::TryReserveError;
use thiserror::Error;

pub use buffer::{bytes_for_bits, BitBuffer};
pub use capture::{Capture, Row};
pub use render::{to_bit_string, to_hex};

/// Failures while building per-capture buffers
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("bit buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}
