//! Decoded multi-channel audio handed over by the platform decoder.

use serde::{Deserialize, Serialize};

use crate::error::{WavError, WavResult};

/// A decoded floating-point audio signal.
///
/// Every channel holds the same number of frames. Samples are nominally in
/// `[-1.0, 1.0]`; anything outside that range is clamped on encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignal")]
pub struct DecodedAudioSignal {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

/// Unvalidated wire shape of [`DecodedAudioSignal`].
///
/// Deserializing a [`DecodedAudioSignal`] goes through this type; callers
/// that need to tell parse errors apart from invalid signals can parse it
/// first and convert with `DecodedAudioSignal::try_from`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSignal {
    /// Sample rate in Hz, not yet checked.
    pub sample_rate: u32,
    /// Channel data, lengths not yet checked.
    pub channels: Vec<Vec<f32>>,
}

impl TryFrom<RawSignal> for DecodedAudioSignal {
    type Error = WavError;

    fn try_from(raw: RawSignal) -> WavResult<Self> {
        Self::new(raw.sample_rate, raw.channels)
    }
}

impl DecodedAudioSignal {
    /// Creates a signal, checking that the sample rate is positive and that
    /// all channels share one length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> WavResult<Self> {
        validate_channels(sample_rate, &channels)?;
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Creates a single-channel signal.
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> WavResult<Self> {
        Self::new(sample_rate, vec![samples])
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of source channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Samples of one channel, if it exists.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels in source order.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / f64::from(self.sample_rate)
    }

    /// Consumes the signal, returning its channels.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }
}

/// Checks the signal invariants and returns the shared frame count.
pub(crate) fn validate_channels<C: AsRef<[f32]>>(
    sample_rate: u32,
    channels: &[C],
) -> WavResult<usize> {
    if sample_rate == 0 {
        return Err(WavError::InvalidSampleRate { rate: sample_rate });
    }

    let first = channels.first().ok_or(WavError::NoChannels)?;
    let expected = first.as_ref().len();

    for (index, channel) in channels.iter().enumerate().skip(1) {
        let found = channel.as_ref().len();
        if found != expected {
            return Err(WavError::length_mismatch(index, expected, found));
        }
    }

    Ok(expected)
}
