//! Encode command implementation
//!
//! Reads a decoded signal from JSON and writes it as a canonical WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use voicewav_core::{DecodedAudioSignal, RawSignal, WavEncoder, WavFormat};

use super::json_output::{JsonError, JsonOutput};

/// Summary of an encode run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EncodeReport {
    /// Path of the written WAV file
    pub output: String,
    /// Channel count of the input signal
    pub source_channels: usize,
    /// Format written
    pub format: WavFormat,
    /// Frames written
    pub frames: usize,
    /// File size in bytes
    pub bytes: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to the signal JSON
/// * `output` - Path of the WAV file to write
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: &str, json_output: bool) -> Result<ExitCode> {
    let result = encode_file(Path::new(input), Path::new(output));

    if json_output {
        let envelope = match result {
            Ok(report) => JsonOutput::success(report),
            Err(err) => JsonOutput::failure(vec![JsonError::from_anyhow(&err).with_file(input)]),
        };
        println!("{}", envelope.to_json()?);
        return Ok(if envelope.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let report = result?;
    print_report(input, &report);
    Ok(ExitCode::SUCCESS)
}

/// Reads `input`, encodes it and writes the WAV file to `output`.
pub fn encode_file(input: &Path, output: &Path) -> Result<EncodeReport> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read signal file: {}", input.display()))?;
    // Parse and validate separately so each failure keeps its own code
    let raw: RawSignal = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse signal file: {}", input.display()))?;

    let signal = DecodedAudioSignal::try_from(raw)
        .with_context(|| format!("Invalid signal in {}", input.display()))?;
    let wav = WavEncoder::new()
        .encode(&signal)
        .context("Failed to encode WAV")?;

    fs::write(output, wav.as_bytes())
        .with_context(|| format!("Failed to write WAV file: {}", output.display()))?;
    tracing::info!(output = %output.display(), bytes = wav.len(), "wrote WAV file");

    Ok(EncodeReport {
        output: output.display().to_string(),
        source_channels: signal.channel_count(),
        format: wav.format(),
        frames: wav.frame_count(),
        bytes: wav.len(),
        duration_seconds: wav.duration_seconds(),
        pcm_hash: wav.pcm_hash(),
    })
}

fn print_report(input: &str, report: &EncodeReport) {
    println!("{}", "Encoded WAV:".cyan().bold());
    println!("  {} {}", "Input:".dimmed(), input);
    println!("  {} {}", "Output:".dimmed(), report.output);
    if report.source_channels > usize::from(report.format.channels) {
        println!(
            "  {} {} source channels, kept the first {}",
            "Note:".yellow(),
            report.source_channels,
            report.format.channels
        );
    }
    println!(
        "  {} {} ch, {} Hz, {}-bit PCM",
        "Format:".dimmed(),
        report.format.channels,
        report.format.sample_rate,
        report.format.bits_per_sample
    );
    println!(
        "  {} {} frames ({:.3} s)",
        "Length:".dimmed(),
        report.frames,
        report.duration_seconds
    );
    println!("  {} {} bytes", "Size:".dimmed(), report.bytes);
    println!("  {} {}", "PCM hash:".dimmed(), &report.pcm_hash[..16]);
    println!("\n{}", "Done.".green().bold());
}
