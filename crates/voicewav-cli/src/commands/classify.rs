//! Classify command implementation
//!
//! Shows how a recording captured with a given MIME type is uploaded.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use voicewav_core::{plan_upload, RecordingFormat};

use super::json_output::JsonOutput;

/// Upload plan for one recorder MIME type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Classification {
    /// MIME type as given
    pub mime_type: String,
    /// Detected container format
    pub format: RecordingFormat,
    /// Whether the recording is converted to WAV first
    pub transcode: bool,
    /// File name on success
    pub file_name: String,
    /// MIME type on success
    pub upload_mime_type: String,
    /// File name if conversion fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_file_name: Option<String>,
}

/// Builds the upload plan for `mime_type`.
pub fn classify(mime_type: &str) -> Classification {
    let plan = plan_upload(mime_type);
    Classification {
        mime_type: mime_type.to_string(),
        format: plan.format,
        transcode: plan.transcode,
        file_name: plan.target.file_name,
        upload_mime_type: plan.target.mime_type,
        fallback_file_name: plan.fallback.map(|fallback| fallback.file_name),
    }
}

/// Run the classify command
pub fn run(mime_type: &str, json_output: bool) -> Result<ExitCode> {
    let plan = classify(mime_type);

    if json_output {
        println!("{}", JsonOutput::success(plan).to_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "MIME type:".cyan().bold(), plan.mime_type);
    println!("  {} {}", "Format:".dimmed(), plan.format);
    if plan.transcode {
        println!("  {} {}", "Transcode:".dimmed(), "yes, to WAV".yellow());
    } else {
        println!("  {} no", "Transcode:".dimmed());
    }
    println!(
        "  {} {} ({})",
        "Upload as:".dimmed(),
        plan.file_name,
        plan.upload_mime_type
    );
    if let Some(fallback) = &plan.fallback_file_name {
        println!("  {} {}", "On failure:".dimmed(), fallback);
    }
    Ok(ExitCode::SUCCESS)
}
