//! Decoded signal to canonical WAV transcoding.

use crate::error::WavResult;
use crate::signal::{validate_channels, DecodedAudioSignal};

use super::bytes::WavBytes;
use super::format::WavFormat;
use super::header::write_header;
use super::pcm::interleave_pcm16;

/// Encodes decoded audio into canonical 16-bit PCM WAV files.
///
/// Signals with more than two channels are truncated to the first two;
/// the extra channels are dropped, not mixed in. The encoder is stateless
/// and every call allocates exactly one buffer of the final file size.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder;

impl WavEncoder {
    /// Creates a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encodes a validated signal.
    pub fn encode(&self, signal: &DecodedAudioSignal) -> WavResult<WavBytes> {
        self.encode_channels(signal.sample_rate(), signal.channels())
    }

    /// Encodes borrowed channel data.
    ///
    /// Fails with an invalid-input error when the sample rate is zero, no
    /// channel is given, or the channels differ in length.
    pub fn encode_channels<C: AsRef<[f32]>>(
        &self,
        sample_rate: u32,
        channels: &[C],
    ) -> WavResult<WavBytes> {
        let frames = validate_channels(sample_rate, channels)?;
        let format = WavFormat::for_source(sample_rate, channels.len());
        format.byte_rate()?;
        let data_size = format.checked_data_size(frames)?;

        let mut data = Vec::with_capacity(format.total_size(frames) as usize);
        write_header(&mut data, &format, data_size)?;
        interleave_pcm16(&mut data, channels, usize::from(format.channels), frames);

        tracing::debug!(
            source_channels = channels.len(),
            channels = format.channels,
            sample_rate,
            frames,
            duration_secs = format.duration_seconds(frames),
            bytes = data.len(),
            "encoded WAV"
        );

        Ok(WavBytes::new(data, format, frames))
    }
}

/// Encodes a signal with the default encoder.
pub fn encode_wav(signal: &DecodedAudioSignal) -> WavResult<WavBytes> {
    WavEncoder::new().encode(signal)
}
