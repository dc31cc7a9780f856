//! Error types for WAV encoding and inspection.

use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// Coarse classification of a [`WavError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavErrorKind {
    /// The caller handed over a signal that violates its invariants.
    InvalidInput,
    /// A byte stream is not a WAV container this crate understands.
    InvalidContainer,
    /// Underlying writer failed.
    Io,
}

/// Errors that can occur while encoding or inspecting WAV data.
#[derive(Debug, Error)]
pub enum WavError {
    /// Sample rate must be positive.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Signal carries no channels at all.
    #[error("signal has no channels")]
    NoChannels,

    /// Channel sequences differ in length.
    #[error("channel {channel} has {found} frames, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Frame count of channel 0.
        expected: usize,
        /// Frame count of the offending channel.
        found: usize,
    },

    /// Encoded size does not fit the 32-bit RIFF size fields.
    #[error("signal too large for a WAV container: {bytes} bytes of sample data")]
    TooLarge {
        /// Requested sample data size.
        bytes: u64,
    },

    /// Byte stream ends before a required structure.
    #[error("WAV data truncated: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum number of bytes required.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },

    /// Missing or invalid `RIFF` tag.
    #[error("invalid or missing RIFF header")]
    InvalidRiffHeader,

    /// Missing or invalid `WAVE` tag.
    #[error("invalid or missing WAVE format identifier")]
    InvalidWaveFormat,

    /// A required chunk was not found.
    #[error("missing '{id}' chunk")]
    MissingChunk {
        /// Chunk identifier.
        id: &'static str,
    },

    /// `fmt ` chunk declares fewer than the 16 bytes of a PCM format block.
    #[error("'fmt ' chunk too short: {size} bytes, need 16")]
    ShortFmtChunk {
        /// Declared chunk size.
        size: usize,
    },

    /// Audio format other than 16-bit integer PCM.
    #[error("unsupported audio format {format_code} with {bits} bits per sample (only 16-bit PCM)")]
    UnsupportedFormat {
        /// Format code from the `fmt ` chunk.
        format_code: u16,
        /// Bits per sample from the `fmt ` chunk.
        bits: u16,
    },

    /// None of the preferred recording MIME types is supported by the platform.
    #[error("no supported audio recording format found")]
    NoSupportedRecordingFormat,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavError {
    /// Creates a channel length mismatch error.
    pub fn length_mismatch(channel: usize, expected: usize, found: usize) -> Self {
        Self::ChannelLengthMismatch {
            channel,
            expected,
            found,
        }
    }

    /// Returns the coarse error kind.
    pub fn kind(&self) -> WavErrorKind {
        match self {
            WavError::InvalidSampleRate { .. }
            | WavError::NoChannels
            | WavError::ChannelLengthMismatch { .. }
            | WavError::TooLarge { .. } => WavErrorKind::InvalidInput,
            WavError::Truncated { .. }
            | WavError::InvalidRiffHeader
            | WavError::InvalidWaveFormat
            | WavError::MissingChunk { .. }
            | WavError::ShortFmtChunk { .. }
            | WavError::UnsupportedFormat { .. }
            | WavError::NoSupportedRecordingFormat => WavErrorKind::InvalidContainer,
            WavError::Io(_) => WavErrorKind::Io,
        }
    }

    /// Returns true when the error stems from a malformed input signal.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == WavErrorKind::InvalidInput
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::InvalidSampleRate { .. } => "WAV_001",
            WavError::NoChannels => "WAV_002",
            WavError::ChannelLengthMismatch { .. } => "WAV_003",
            WavError::TooLarge { .. } => "WAV_004",
            WavError::Truncated { .. } => "WAV_005",
            WavError::InvalidRiffHeader => "WAV_006",
            WavError::InvalidWaveFormat => "WAV_007",
            WavError::MissingChunk { .. } => "WAV_008",
            WavError::UnsupportedFormat { .. } => "WAV_009",
            WavError::NoSupportedRecordingFormat => "WAV_010",
            WavError::Io(_) => "WAV_011",
            WavError::ShortFmtChunk { .. } => "WAV_012",
        }
    }
}
