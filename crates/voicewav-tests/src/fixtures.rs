//! Test fixture utilities: synthetic signals, fake decoders and temp files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use voicewav_core::{DecodedAudioSignal, WavError};

/// Sine tone in `channels` channels; channel `c` is shifted by `c` radians.
pub fn sine_signal(
    sample_rate: u32,
    channels: usize,
    frames: usize,
    freq: f32,
    amplitude: f32,
) -> DecodedAudioSignal {
    let data = (0..channels)
        .map(|c| {
            (0..frames)
                .map(|i| {
                    let t = i as f32 / sample_rate as f32;
                    amplitude * (std::f32::consts::TAU * freq * t + c as f32).sin()
                })
                .collect()
        })
        .collect();
    DecodedAudioSignal::new(sample_rate, data).expect("fixture signal is valid")
}

/// A ramp from -1.0 to 1.0 (inclusive) in a single channel.
pub fn ramp_signal(sample_rate: u32, frames: usize) -> DecodedAudioSignal {
    let step = if frames > 1 {
        2.0 / (frames - 1) as f32
    } else {
        0.0
    };
    let samples = (0..frames).map(|i| -1.0 + step * i as f32).collect();
    DecodedAudioSignal::mono(sample_rate, samples).expect("fixture signal is valid")
}

/// Decoder that always yields `signal`, standing in for the platform decoder.
pub fn fixed_decoder(
    signal: DecodedAudioSignal,
) -> impl Fn(&[u8]) -> Result<DecodedAudioSignal, WavError> {
    move |_: &[u8]| Ok(signal.clone())
}

/// Decoder that always fails.
pub fn broken_decoder(_: &[u8]) -> Result<DecodedAudioSignal, String> {
    Err("EncodingError: unable to decode audio data".to_string())
}

/// Decoder that returns channels of unequal length.
pub fn ragged_decoder(_: &[u8]) -> Result<DecodedAudioSignal, WavError> {
    DecodedAudioSignal::new(48000, vec![vec![0.0; 10], vec![0.0; 9]])
}

/// A temporary working directory for CLI tests.
pub struct WorkDir {
    pub root: TempDir,
}

impl WorkDir {
    /// Create a new empty working directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of `name` inside the directory.
    pub fn join(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Write `signal` as a JSON signal file.
    pub fn write_signal(&self, name: &str, signal: &DecodedAudioSignal) -> PathBuf {
        let path = self.join(name);
        let json = serde_json::to_string(signal).expect("Failed to serialize signal");
        fs::write(&path, json).expect("Failed to write signal file");
        path
    }

    /// Write raw text to a file.
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for WorkDir {
    fn default() -> Self {
        Self::new()
    }
}
