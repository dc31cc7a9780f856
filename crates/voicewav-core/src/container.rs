//! Recorder container formats and MIME type selection.

use std::fmt;

use serde::Serialize;

use crate::error::{WavError, WavResult};

/// MIME type of every WAV file this crate produces.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Recorder MIME types in order of preference for the speech service.
///
/// WAV is accepted as-is; the WebM entries are transcoded to WAV before
/// upload; MP4 is the last resort.
pub const PREFERRED_RECORDING_MIME_TYPES: &[&str] = &[
    "audio/wav",
    "audio/wave",
    "audio/mpeg",
    "audio/mp3",
    "audio/webm;codecs=pcm",
    "audio/webm;codecs=opus",
    "audio/webm",
    "audio/mp4",
];

/// Container format of a captured recording, classified by MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingFormat {
    /// RIFF/WAVE.
    Wav,
    /// MP4/M4A audio.
    M4a,
    /// MPEG layer 3.
    Mp3,
    /// WebM (typically Opus); transcoded to WAV before upload.
    WebM,
    /// Unrecognized; uploaded under the default `.wav` extension.
    Other,
}

impl RecordingFormat {
    /// Classifies a recorder MIME type such as `audio/webm;codecs=opus`.
    ///
    /// Matching is case-insensitive and substring based.
    pub fn from_mime_type(mime_type: &str) -> Self {
        let mime = mime_type.to_ascii_lowercase();
        if mime.contains("wav") {
            RecordingFormat::Wav
        } else if mime.contains("mp4") || mime.contains("m4a") {
            RecordingFormat::M4a
        } else if mime.contains("mpeg") || mime.contains("mp3") {
            RecordingFormat::Mp3
        } else if mime.contains("webm") {
            RecordingFormat::WebM
        } else {
            RecordingFormat::Other
        }
    }

    /// File extension used for uploads, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            RecordingFormat::Wav | RecordingFormat::Other => ".wav",
            RecordingFormat::M4a => ".m4a",
            RecordingFormat::Mp3 => ".mp3",
            RecordingFormat::WebM => ".webm",
        }
    }

    /// Whether recordings in this format are converted to WAV before upload.
    pub fn needs_transcode(&self) -> bool {
        matches!(self, RecordingFormat::WebM)
    }
}

impl fmt::Display for RecordingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordingFormat::Wav => "wav",
            RecordingFormat::M4a => "m4a",
            RecordingFormat::Mp3 => "mp3",
            RecordingFormat::WebM => "webm",
            RecordingFormat::Other => "other",
        };
        f.write_str(name)
    }
}

/// Picks the first preferred MIME type the platform recorder supports.
pub fn select_recording_mime<F>(is_supported: F) -> WavResult<&'static str>
where
    F: Fn(&str) -> bool,
{
    let selected = PREFERRED_RECORDING_MIME_TYPES
        .iter()
        .copied()
        .find(|mime| is_supported(mime))
        .ok_or(WavError::NoSupportedRecordingFormat)?;
    tracing::debug!(mime = selected, "selected recording format");
    Ok(selected)
}
