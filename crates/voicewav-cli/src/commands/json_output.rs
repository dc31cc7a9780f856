//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and prints a single envelope so that
//! scripts can parse results without scraping colored text.

use serde::Serialize;
use voicewav_core::WavError;

/// Error codes for CLI operations.
///
/// Library errors pass their own `WAV_XXX` code through.
pub mod error_codes {
    /// File could not be read or written
    pub const FILE_IO: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Anything else
    pub const INTERNAL: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches a file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Builds an error from an `anyhow` chain, picking the most specific code.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self::new(error_code(err), format!("{err:#}"))
    }
}

/// Finds a stable code for the first recognizable error in the chain.
pub fn error_code(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(wav) = cause.downcast_ref::<WavError>() {
            return wav.code().to_string();
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return error_codes::JSON_PARSE.to_string();
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return error_codes::FILE_IO.to_string();
        }
    }
    error_codes::INTERNAL.to_string()
}

/// Envelope printed by every command in `--json` mode.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Command-specific result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Errors, empty on success
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl<T: Serialize> JsonOutput<T> {
    /// Creates a successful envelope.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Creates a failed envelope.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
