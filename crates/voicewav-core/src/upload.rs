//! Preparing a captured recording for the transcription upload.
//!
//! WebM recordings are decoded and re-encoded as WAV because the speech
//! service only reliably accepts WAV. When that fails the original bytes
//! are uploaded unchanged.

use std::fmt;

use crate::container::{RecordingFormat, WAV_MIME_TYPE};
use crate::signal::DecodedAudioSignal;
use crate::wav::{WavBytes, WavEncoder};

/// File stem of every uploaded recording.
pub const UPLOAD_FILE_STEM: &str = "recording";

/// Platform capability that decodes a compressed recording.
pub trait AudioDecoder {
    /// Error reported when the recording cannot be decoded.
    type Error: fmt::Display;

    /// Decodes a complete recording into float channels.
    fn decode(&self, recording: &[u8]) -> Result<DecodedAudioSignal, Self::Error>;
}

impl<F, E> AudioDecoder for F
where
    F: Fn(&[u8]) -> Result<DecodedAudioSignal, E>,
    E: fmt::Display,
{
    type Error = E;

    fn decode(&self, recording: &[u8]) -> Result<DecodedAudioSignal, E> {
        self(recording)
    }
}

/// File name and MIME type a recording is uploaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// File name including extension, e.g. `recording.wav`.
    pub file_name: String,
    /// MIME type sent with the file.
    pub mime_type: String,
}

impl UploadTarget {
    /// Target for a transcoded WAV file.
    pub fn wav() -> Self {
        Self {
            file_name: format!("{UPLOAD_FILE_STEM}.wav"),
            mime_type: WAV_MIME_TYPE.to_string(),
        }
    }

    /// Target for a recording uploaded as captured.
    pub fn passthrough(format: RecordingFormat, mime_type: &str) -> Self {
        Self {
            file_name: format!("{UPLOAD_FILE_STEM}{}", format.extension()),
            mime_type: mime_type.to_string(),
        }
    }
}

/// How a recording captured with a given MIME type will be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    /// Detected container format.
    pub format: RecordingFormat,
    /// Whether the recording is converted to WAV first.
    pub transcode: bool,
    /// Name and type used when everything succeeds.
    pub target: UploadTarget,
    /// Name and type used when conversion fails; only set when transcoding.
    pub fallback: Option<UploadTarget>,
}

/// Decides the upload naming for `mime_type` without touching any bytes.
pub fn plan_upload(mime_type: &str) -> UploadPlan {
    let format = RecordingFormat::from_mime_type(mime_type);
    let transcode = format.needs_transcode();
    let passthrough = UploadTarget::passthrough(format, mime_type);
    let (target, fallback) = if transcode {
        (UploadTarget::wav(), Some(passthrough))
    } else {
        (passthrough, None)
    };
    UploadPlan {
        format,
        transcode,
        target,
        fallback,
    }
}

/// A file ready to be attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name including extension, e.g. `recording.wav`.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
    /// True when `bytes` were produced by the WAV encoder.
    pub transcoded: bool,
}

impl UploadFile {
    /// Wraps an encoded WAV file.
    pub fn from_wav(wav: WavBytes) -> Self {
        Self::new(UploadTarget::wav(), wav.into_vec(), true)
    }

    fn new(target: UploadTarget, bytes: Vec<u8>, transcoded: bool) -> Self {
        Self {
            file_name: target.file_name,
            mime_type: target.mime_type,
            bytes,
            transcoded,
        }
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the file has no contents.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Builds the upload for a recording captured with `mime_type`.
///
/// Only WebM recordings are transcoded. A decode or encode failure is
/// logged and the original recording is uploaded as `.webm`; this function
/// itself never fails.
pub fn prepare_upload<D: AudioDecoder>(
    mime_type: &str,
    recording: Vec<u8>,
    decoder: &D,
) -> UploadFile {
    let plan = plan_upload(mime_type);
    let fallback = match plan.fallback {
        Some(fallback) => fallback,
        None => {
            tracing::debug!(format = %plan.format, bytes = recording.len(), "uploading recording as-is");
            return UploadFile::new(plan.target, recording, false);
        }
    };

    let encoded = match decoder.decode(&recording) {
        Ok(signal) => {
            tracing::debug!(
                channels = signal.channel_count(),
                sample_rate = signal.sample_rate(),
                duration_secs = signal.duration_seconds(),
                "decoded recording"
            );
            WavEncoder::new()
                .encode(&signal)
                .map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    };

    match encoded {
        Ok(wav) => {
            tracing::debug!(bytes = wav.len(), "converted recording to WAV");
            UploadFile::from_wav(wav)
        }
        Err(error) => {
            tracing::warn!(%error, "WAV conversion failed, uploading original recording");
            UploadFile::new(fallback, recording, false)
        }
    }
}
