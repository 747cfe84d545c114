//! Decoder run bookkeeping

mod state;

pub use state::DecoderStats;
