//! Inspect command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use voicewav_core::{inspect_wav, WavInfo};

use super::json_output::{JsonError, JsonOutput};

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let result = inspect_file(Path::new(input));

    if json_output {
        let envelope = match result {
            Ok(info) => JsonOutput::success(info),
            Err(err) => JsonOutput::failure(vec![JsonError::from_anyhow(&err).with_file(input)]),
        };
        println!("{}", envelope.to_json()?);
        return Ok(if envelope.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let info = result?;
    print_info(input, &info);
    Ok(ExitCode::SUCCESS)
}

/// Reads and parses the header of a WAV file.
pub fn inspect_file(input: &Path) -> Result<WavInfo> {
    let data =
        fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input.display()))?;
    let info = inspect_wav(&data).with_context(|| format!("Not a valid WAV file: {}", input.display()))?;
    tracing::debug!(?info, "parsed WAV header");
    Ok(info)
}

fn print_info(input: &str, info: &WavInfo) {
    println!("{} {}", "WAV file:".cyan().bold(), input);
    let format = if info.is_pcm16() {
        "16-bit PCM".green()
    } else {
        format!("format {} / {}-bit", info.audio_format, info.bits_per_sample).yellow()
    };
    println!("  {} {}", "Format:".dimmed(), format);
    println!("  {} {}", "Channels:".dimmed(), info.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), info.sample_rate);
    println!("  {} {} B/s", "Byte rate:".dimmed(), info.byte_rate);
    println!("  {} {}", "Block align:".dimmed(), info.block_align);
    println!(
        "  {} {} frames ({:.3} s)",
        "Length:".dimmed(),
        info.num_frames,
        info.duration_seconds()
    );
    println!(
        "  {} {} bytes at offset {}",
        "Data:".dimmed(),
        info.data_len,
        info.data_offset
    );
}
