//! Human-readable renderings of packed bits

use super::buffer::bit_at;

/// Render bytes as uppercase hex, high nibble first (`[0xAB, 0x01]` → `"AB01"`)
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Render the first `bits` bits of `bytes` as `'0'`/`'1'` characters, MSB-first.
///
/// Only the leading `bits % 8` bits of a partial last byte appear in the output.
/// A `bits` value past the end of `bytes` is clamped to the available bits.
pub fn to_bit_string(bytes: &[u8], bits: usize) -> String {
    let bits = bits.min(bytes.len() * 8);
    let mut out = String::with_capacity(bits);
    for i in 0..bits {
        out.push(if bit_at(bytes, i) { '1' } else { '0' });
    }
    out
}
