//! Multi-row captures and row flattening

use super::buffer::{bit_at, bytes_for_bits, BitBuffer};
use super::DecodeError;

/// One contiguous bit-packed segment of a capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    bytes: Vec<u8>,
    bits: usize,
}

impl Row {
    /// Build a row from packed bytes and an exact bit count.
    ///
    /// Returns `None` when `bits` exceeds what `bytes` can hold.
    pub fn new(bytes: Vec<u8>, bits: usize) -> Option<Self> {
        if bits > bytes.len() * 8 {
            return None;
        }
        Some(Self { bytes, bits })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Exact number of valid bits
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Iterate over the valid bits only; trailing pad bits are never read
    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bits).map(move |i| bit_at(&self.bytes, i))
    }
}

/// Raw demodulator output for one candidate transmission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capture {
    rows: Vec<Row>,
}

impl Capture {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Sum of the bit counts of all rows
    pub fn total_bits(&self) -> usize {
        self.rows.iter().map(Row::bits).sum()
    }

    /// Concatenate all rows into one bit buffer, in row order.
    ///
    /// The buffer is sized up front for `ceil(total_bits / 8)` bytes; the only
    /// failure is that allocation.
    pub fn flatten(&self) -> Result<BitBuffer, DecodeError> {
        let mut flat = BitBuffer::with_capacity_bits(self.total_bits())?;
        for row in &self.rows {
            for bit in row.iter_bits() {
                flat.append_bit(bit);
            }
        }
        debug_assert_eq!(flat.byte_view().len(), bytes_for_bits(self.total_bits()));
        Ok(flat)
    }
}
