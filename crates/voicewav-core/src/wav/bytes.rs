//! Encoded WAV output.

use super::format::{WavFormat, HEADER_LEN};

/// A complete, canonical WAV file produced by [`WavEncoder`](super::WavEncoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBytes {
    data: Vec<u8>,
    format: WavFormat,
    frames: usize,
}

impl WavBytes {
    pub(crate) fn new(data: Vec<u8>, format: WavFormat, frames: usize) -> Self {
        Self {
            data,
            format,
            frames,
        }
    }

    /// Complete file bytes, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Sample data only (everything after the 44-byte header).
    pub fn pcm_data(&self) -> &[u8] {
        &self.data[HEADER_LEN..]
    }

    /// Format the file was written with.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Number of frames in the file.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a WAV file carries at least its header.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.format.duration_seconds(self.frames)
    }

    /// BLAKE3 hash of the PCM data (not the full WAV file).
    pub fn pcm_hash(&self) -> String {
        blake3::hash(self.pcm_data()).to_hex().to_string()
    }

    /// Takes ownership of the file bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for WavBytes {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<WavBytes> for Vec<u8> {
    fn from(wav: WavBytes) -> Self {
        wav.data
    }
}
