//! Owned, length-tracked bit buffer
//!
//! Bits are packed MSB-first: bit 0 is the high bit of byte 0.

use super::DecodeError;

/// Growable bit buffer with an exact bit length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer able to hold `bits` bits without reallocating.
    ///
    /// Allocation is fallible so callers can fail closed instead of aborting.
    pub fn with_capacity_bits(bits: usize) -> Result<Self, DecodeError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(bytes_for_bits(bits))?;
        Ok(Self { bytes, len: 0 })
    }

    /// Append one bit at the end of the buffer
    pub fn append_bit(&mut self, bit: bool) {
        let bit_pos = self.len % 8;
        if bit_pos == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - bit_pos);
        }
        self.len += 1;
    }

    /// Get bit `i`, or `None` past the end
    pub fn get_bit(&self, i: usize) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some(bit_at(&self.bytes, i))
    }

    /// Packed bytes backing the buffer (`ceil(len / 8)` bytes, pad bits zero)
    pub fn byte_view(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of valid bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all valid bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| bit_at(&self.bytes, i))
    }
}

/// Read bit `i` (MSB-first) of a packed byte slice.
///
/// Callers must keep `i < bytes.len() * 8`.
#[inline(always)]
pub(crate) fn bit_at(bytes: &[u8], i: usize) -> bool {
    let byte_idx = i / 8;
    let bit_pos = 7 - (i % 8);
    (bytes[byte_idx] >> bit_pos) & 1 == 1
}

/// Number of bytes needed to hold `bits` bits
pub fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}
