//! Unknown1 bit-row decoder
//!
//! Flattens the demodulated rows of a capture into one bit stream, checks the
//! 0xAA preamble and renders the result as hex and binary strings for export.

pub mod bits;
pub mod config;
pub mod decoder;
pub mod device;
pub mod output;
pub mod unknown1;
