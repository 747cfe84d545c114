//! Fixed preamble check
//!
//! Every Unknown1 transmission starts with 0xAAAAAAAAAAAAAAAA. The demodulator
//! already filtered on timing, so the match is exact: a single flipped bit means
//! the framing is off and the capture is rejected.

use crate::bits::BitBuffer;

/// Expected leading bytes
pub const PREAMBLE: [u8; 8] = [0xAA; 8];

/// Preamble length in bits
pub const PREAMBLE_BITS: usize = PREAMBLE.len() * 8;

/// True when the first 64 bits of `flat` are exactly the preamble
pub fn check_preamble(flat: &BitBuffer) -> bool {
    if flat.len() < PREAMBLE_BITS {
        return false;
    }
    flat.byte_view().starts_with(&PREAMBLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from_hex(hex: &str, bits: usize) -> BitBuffer {
        let bytes = hex::decode(hex).unwrap();
        let mut buf = BitBuffer::new();
        for i in 0..bits {
            buf.append_bit((bytes[i / 8] >> (7 - (i % 8))) & 1 == 1);
        }
        buf
    }

    #[test]
    fn test_exact_preamble_matches() {
        assert!(check_preamble(&buffer_from_hex("AAAAAAAAAAAAAAAA", 64)));
        assert!(check_preamble(&buffer_from_hex("AAAAAAAAAAAAAAAA12", 72)));
        assert!(check_preamble(&buffer_from_hex("AAAAAAAAAAAAAAAAFF", 65)));
    }

    #[test]
    fn test_short_stream_never_matches() {
        assert!(!check_preamble(&BitBuffer::new()));
        assert!(!check_preamble(&buffer_from_hex("AAAAAAAAAAAAAAAA", 63)));
        assert!(!check_preamble(&buffer_from_hex("AAAAAAAAAAAAAA", 56)));
    }

    #[test]
    fn test_any_single_bit_error_rejects() {
        let good = hex::decode("AAAAAAAAAAAAAAAA34").unwrap();
        for bit in 0..PREAMBLE_BITS {
            let mut bytes = good.clone();
            bytes[bit / 8] ^= 1 << (7 - (bit % 8));
            let buf = buffer_from_hex(&hex::encode(&bytes), 72);
            assert!(!check_preamble(&buf), "flipped bit {} still matched", bit);
        }
    }

    #[test]
    fn test_inverted_preamble_rejects() {
        assert!(!check_preamble(&buffer_from_hex("5555555555555555", 64)));
    }
}
