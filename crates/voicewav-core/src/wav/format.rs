//! WAV file format parameters.

use serde::Serialize;

use crate::error::{WavError, WavResult};

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// `fmt ` chunk format code for integer PCM.
pub const PCM_FORMAT: u16 = 1;

/// Bit depth of every file this crate writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Highest channel count written; further source channels are dropped.
pub const MAX_OUTPUT_CHANNELS: u16 = 2;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Output format for a source with `source_channels` channels.
    ///
    /// Anything above stereo is truncated to the first two channels.
    pub fn for_source(sample_rate: u32, source_channels: usize) -> Self {
        if source_channels >= usize::from(MAX_OUTPUT_CHANNELS) {
            Self::stereo(sample_rate)
        } else {
            Self::mono(sample_rate)
        }
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame, widened so it cannot overflow.
    fn frame_bytes(&self) -> u32 {
        u32::from(self.channels) * u32::from(self.bytes_per_sample())
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Fails when the frame size does not fit the 16-bit header field.
    pub fn block_align(&self) -> WavResult<u16> {
        u16::try_from(self.frame_bytes()).map_err(|_| WavError::UnsupportedFormat {
            format_code: PCM_FORMAT,
            bits: self.bits_per_sample,
        })
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Fails when the rate does not fit the 32-bit header field.
    pub fn byte_rate(&self) -> WavResult<u32> {
        self.sample_rate
            .checked_mul(self.frame_bytes())
            .ok_or(WavError::InvalidSampleRate {
                rate: self.sample_rate,
            })
    }

    /// Size of the sample data for `frames` frames.
    pub fn data_size(&self, frames: usize) -> u64 {
        (frames as u64).saturating_mul(u64::from(self.frame_bytes()))
    }

    /// Size of the complete file for `frames` frames.
    pub fn total_size(&self, frames: usize) -> u64 {
        (HEADER_LEN as u64).saturating_add(self.data_size(frames))
    }

    /// Data size as stored in the header, rejecting files whose RIFF
    /// chunk size would overflow 32 bits.
    pub(crate) fn checked_data_size(&self, frames: usize) -> WavResult<u32> {
        let bytes = self.data_size(frames);
        let riff_size = bytes.saturating_add(HEADER_LEN as u64 - 8);
        if riff_size > u64::from(u32::MAX) {
            return Err(WavError::TooLarge { bytes });
        }
        Ok(bytes as u32)
    }

    /// Duration in seconds of `frames` frames.
    pub fn duration_seconds(&self, frames: usize) -> f64 {
        frames as f64 / f64::from(self.sample_rate)
    }
}
