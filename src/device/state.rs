//! Per-decoder counters

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::unknown1::DecodeOutcome;

/// Counters for one decoder run
#[derive(Debug, Default)]
pub struct DecoderStats {
    pub captures: AtomicU64,
    pub decoded: AtomicU64,
    pub not_recognized: AtomicU64,
    pub parse_errors: AtomicU64,
}

impl DecoderStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one decode invocation by its outcome
    pub fn record_outcome(&self, outcome: DecodeOutcome) {
        self.captures.fetch_add(1, Ordering::Relaxed);
        match outcome {
            DecodeOutcome::Decoded => self.decoded.fetch_add(1, Ordering::Relaxed),
            DecodeOutcome::NotRecognized => self.not_recognized.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn record_parse_error(&self) {
        self.parse_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_captures(&self) -> u64 {
        self.captures.load(Ordering::Relaxed)
    }

    pub fn get_decoded(&self) -> u64 {
        self.decoded.load(Ordering::Relaxed)
    }

    pub fn get_not_recognized(&self) -> u64 {
        self.not_recognized.load(Ordering::Relaxed)
    }

    pub fn get_parse_errors(&self) -> u64 {
        self.parse_errors.load(Ordering::Relaxed)
    }
}

impl fmt::Display for DecoderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "captures={} decoded={} not_recognized={} parse_errors={}",
            self.get_captures(),
            self.get_decoded(),
            self.get_not_recognized(),
            self.get_parse_errors()
        )
    }
}
