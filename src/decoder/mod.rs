//! Capture input handling

mod runner;

pub use runner::{parse_capture_line, CaptureParseError, CaptureRunner, CaptureSource};
