//! Unknown1 decoder - reads demodulated bit rows and emits decoded records
//!
//! Captures come in as bit-buffer code lines (`{72}AAAAAAAAAAAAAAAA12`), one per
//! line, from a file or stdin. Records go to stdout; logs go to stderr.

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use unknown1_decoder::bits::Capture;
use unknown1_decoder::config::Config;
use unknown1_decoder::decoder::CaptureRunner;
use unknown1_decoder::device::DecoderStats;
use unknown1_decoder::output::RecordWriter;
use unknown1_decoder::unknown1::{DecodedRecord, Unknown1Decoder};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let decoder = Unknown1Decoder::new();
    let spec = decoder.spec();

    info!("===========================================");
    info!("   {} decoder", spec.name);
    info!("===========================================");
    info!("Device:");
    info!("  Modulation: {}", spec.modulation.name());
    info!("  Enabled: {}", spec.is_enabled());
    info!("  Short width: {} us", spec.short_width);
    info!("  Long width: {} us", spec.long_width);
    info!("  Gap limit: {} us", spec.gap_limit);
    info!("  Reset limit: {} us", spec.reset_limit);
    info!("Configuration:");
    info!("  Input: {:?}", config.input);
    info!("  Output format: {:?}", config.output_format);

    let stats = Arc::new(DecoderStats::new());
    let (capture_tx, mut capture_rx) = mpsc::channel::<Capture>(config.channel_capacity);

    // Read captures on their own task
    let runner = CaptureRunner::new(config.input.clone(), stats.clone());
    let reader_handle = tokio::spawn(async move {
        let result = runner.run(capture_tx).await;
        if let Err(e) = &result {
            error!("Capture reader failed: {:#}", e);
        }
        result
    });

    let stdout = std::io::stdout();
    let mut writer = RecordWriter::new(config.output_format, stdout.lock())?;
    let mut records: Vec<DecodedRecord> = Vec::new();

    // Main decode loop
    while let Some(capture) = capture_rx.recv().await {
        let outcome = decoder.decode(&capture, &mut records);
        stats.record_outcome(outcome);

        for record in records.drain(..) {
            writer.write(&record)?;
        }
        writer.flush()?;
    }

    reader_handle.await.context("Capture reader task panicked")??;

    let mut out = writer.into_inner()?;
    out.flush()?;

    info!("Shutdown complete. {}", stats);
    Ok(())
}
