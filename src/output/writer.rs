//! Record rendering to an output stream

use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

use crate::unknown1::{DecodedRecord, UNKNOWN1};

/// Output format selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key: value` pairs, one record per line
    #[default]
    Kv,
    /// One JSON object per line
    Json,
    /// Header row, then one row per record
    Csv,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kv" => Ok(Self::Kv),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

enum Inner<W: Write> {
    Kv(W),
    Json(W),
    Csv(csv::Writer<W>),
}

/// Writes records in the configured format
pub struct RecordWriter<W: Write> {
    inner: Inner<W>,
    records_written: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer; CSV output gets its header row immediately
    pub fn new(format: OutputFormat, out: W) -> Result<Self> {
        let inner = match format {
            OutputFormat::Kv => Inner::Kv(out),
            OutputFormat::Json => Inner::Json(out),
            OutputFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(out);
                writer
                    .write_record(UNKNOWN1.fields)
                    .context("Failed to write CSV header")?;
                Inner::Csv(writer)
            }
        };

        Ok(Self {
            inner,
            records_written: 0,
        })
    }

    pub fn write(&mut self, record: &DecodedRecord) -> Result<()> {
        match &mut self.inner {
            Inner::Kv(out) => {
                let line = UNKNOWN1
                    .fields
                    .iter()
                    .zip(record.field_values())
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join("  ");
                writeln!(out, "{}", line).context("Failed to write record")?;
            }
            Inner::Json(out) => {
                serde_json::to_writer(&mut *out, record).context("Failed to serialize record")?;
                writeln!(out).context("Failed to write record")?;
            }
            Inner::Csv(writer) => {
                writer.serialize(record).context("Failed to write CSV row")?;
            }
        }
        self.records_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        let result = match &mut self.inner {
            Inner::Kv(out) | Inner::Json(out) => out.flush(),
            Inner::Csv(writer) => writer.flush(),
        };
        result.context("Failed to flush output")
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(self) -> Result<W> {
        match self.inner {
            Inner::Kv(out) | Inner::Json(out) => Ok(out),
            Inner::Csv(writer) => writer
                .into_inner()
                .map_err(|e| anyhow!("Failed to flush CSV output: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DecodedRecord {
        DecodedRecord {
            model: "Unknown1".to_string(),
            short_width: 500.0,
            long_width: 500.0,
            gap_limit: 7000.0,
            reset_limit: 10000.0,
            length_bits: 72,
            hex_data: "AAAAAAAAAAAAAAAA12".to_string(),
            binary_data: format!("{}00010010", "10101010".repeat(8)),
            row_count: 1,
        }
    }

    fn render(format: OutputFormat, records: &[DecodedRecord]) -> String {
        let mut writer = RecordWriter::new(format, Vec::new()).unwrap();
        for record in records {
            writer.write(record).unwrap();
        }
        assert_eq!(writer.records_written(), records.len() as u64);
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("kv".parse::<OutputFormat>(), Ok(OutputFormat::Kv));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" csv ".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_csv_header_without_records() {
        let out = render(OutputFormat::Csv, &[]);
        assert_eq!(
            out,
            "model,short_width,long_width,gap_limit,reset_limit,lengthBits,hex_data,binary_data,rowCount\n"
        );
    }

    #[test]
    fn test_csv_row() {
        let out = render(OutputFormat::Csv, &[sample_record()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let cols: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(cols.len(), UNKNOWN1.fields.len());
        assert_eq!(cols[1], "500.0");
        assert_eq!(cols[4], "10000.0");
        assert_eq!(cols[0], "Unknown1");
        assert_eq!(cols[5], "72");
        assert_eq!(cols[6], "AAAAAAAAAAAAAAAA12");
        assert_eq!(cols[7].len(), 72);
        assert_eq!(cols[8], "1");
    }

    #[test]
    fn test_json_lines() {
        let out = render(OutputFormat::Json, &[sample_record(), sample_record()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"short_width\":500.0"));

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["model"], "Unknown1");
        assert_eq!(value["lengthBits"], 72);
        assert_eq!(value["rowCount"], 1);
        assert_eq!(value["gap_limit"], 7000.0);
        assert_eq!(value["hex_data"], "AAAAAAAAAAAAAAAA12");
    }

    #[test]
    fn test_kv_line() {
        let out = render(OutputFormat::Kv, &[sample_record()]);
        assert!(out.starts_with("model: Unknown1  short_width: 500.0  long_width: 500.0"));
        assert!(out.contains("gap_limit: 7000.0  reset_limit: 10000.0"));
        assert!(out.contains("lengthBits: 72"));
        assert!(out.trim_end().ends_with("rowCount: 1"));
    }
}
