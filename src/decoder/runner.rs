//! Capture runner - reads bit-buffer code lines and forwards parsed captures
//!
//! Line format, one capture per line:
//!
//! ```text
//! {72}AAAAAAAAAAAAAAAA12
//! {8}AA/{64}AAAAAAAAAAAAAAC3
//! ```
//!
//! Rows are separated by `/`. `{N}` gives the exact bit count of a row; without
//! it every hex digit counts as 4 bits.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::bits::{Capture, Row};
use crate::device::DecoderStats;

/// Reasons a capture line is rejected
#[derive(Debug, Error, PartialEq)]
pub enum CaptureParseError {
    #[error("row {0} is empty")]
    EmptyRow(usize),

    #[error("row {0}: unterminated bit count")]
    UnterminatedBitCount(usize),

    #[error("row {row}: invalid bit count {value:?}")]
    InvalidBitCount { row: usize, value: String },

    #[error("row {row}: invalid hex data: {source}")]
    InvalidHex {
        row: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("row {row}: {bits} bits declared but only {available} present")]
    TooManyBits {
        row: usize,
        bits: usize,
        available: usize,
    },
}

/// Where capture lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSource {
    Stdin,
    File(PathBuf),
}

impl CaptureSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Reads capture lines and sends parsed captures to the decode loop
pub struct CaptureRunner {
    source: CaptureSource,
    stats: Arc<DecoderStats>,
}

impl CaptureRunner {
    pub fn new(source: CaptureSource, stats: Arc<DecoderStats>) -> Self {
        Self { source, stats }
    }

    /// Open the source and forward every capture until EOF or the channel closes
    pub async fn run(&self, tx: mpsc::Sender<Capture>) -> Result<()> {
        let reader: Box<dyn AsyncRead + Unpin + Send> = match &self.source {
            CaptureSource::Stdin => {
                info!("Reading captures from stdin");
                Box::new(tokio::io::stdin())
            }
            CaptureSource::File(path) => {
                info!("Reading captures from {}", path.display());
                Box::new(open_file(path).await?)
            }
        };

        self.run_reader(BufReader::new(reader), tx).await
    }

    /// Forward captures from an already-open reader
    pub async fn run_reader<R>(&self, reader: R, tx: mpsc::Sender<Capture>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut line_no = 0u64;

        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read capture input")?
        {
            line_no += 1;
            match parse_capture_line(&line) {
                Ok(Some(capture)) => {
                    if tx.send(capture).await.is_err() {
                        warn!("Channel closed, stopping capture reader");
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    self.stats.record_parse_error();
                    debug!("Skipping line {}: {}", line_no, e);
                }
            }
        }

        info!("Capture input closed after {} lines", line_no);
        Ok(())
    }
}

async fn open_file(path: &Path) -> Result<tokio::fs::File> {
    tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open capture file {}", path.display()))
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_capture_line(line: &str) -> Result<Option<Capture>, CaptureParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let rows = line
        .split('/')
        .enumerate()
        .map(|(r, code)| parse_row(r, code.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Capture::new(rows)))
}

/// Parse a single `{N}HEX` or `HEX` row
fn parse_row(row: usize, code: &str) -> Result<Row, CaptureParseError> {
    if code.is_empty() {
        return Err(CaptureParseError::EmptyRow(row));
    }

    let (declared, hex_str) = match code.strip_prefix('{') {
        Some(rest) => {
            let end = rest
                .find('}')
                .ok_or(CaptureParseError::UnterminatedBitCount(row))?;
            let value = rest[..end].trim();
            let bits = value
                .parse::<usize>()
                .map_err(|_| CaptureParseError::InvalidBitCount {
                    row,
                    value: value.to_string(),
                })?;
            (Some(bits), rest[end + 1..].trim())
        }
        None => (None, code),
    };

    // A trailing odd nibble is padded with zero bits
    let bytes = if hex_str.len() % 2 == 1 {
        hex::decode(format!("{}0", hex_str))
    } else {
        hex::decode(hex_str)
    }
    .map_err(|source| CaptureParseError::InvalidHex { row, source })?;

    let available = hex_str.len() * 4;
    let bits = declared.unwrap_or(available);
    if bits > available {
        return Err(CaptureParseError::TooManyBits {
            row,
            bits,
            available,
        });
    }

    Row::new(bytes, bits).ok_or(CaptureParseError::TooManyBits {
        row,
        bits,
        available,
    })
}
