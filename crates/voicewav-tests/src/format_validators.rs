//! Strict canonical-WAV validator for test infrastructure.
//!
//! Unlike the library's chunk-walking parser, this checks the exact
//! 44-byte layout field by field and requires every derived size to agree.

use std::fmt;

/// Error type for format validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset of the offending field, if applicable.
    pub offset: Option<usize>,
}

impl FormatError {
    /// Create a new format error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    /// Create a format error with a byte offset.
    pub fn at_offset(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "WAV error at offset {}: {}", offset, self.message),
            None => write!(f, "WAV error: {}", self.message),
        }
    }
}

impl std::error::Error for FormatError {}

/// Contents of a canonical 16-bit PCM WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalWav {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames.
    pub frames: usize,
    /// Interleaved samples.
    pub samples: Vec<i16>,
}

impl CanonicalWav {
    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Vec<i16> {
        self.samples
            .iter()
            .skip(index)
            .step_by(usize::from(self.channels))
            .copied()
            .collect()
    }
}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn expect_tag(data: &[u8], offset: usize, tag: &[u8; 4]) -> Result<(), FormatError> {
    if &data[offset..offset + 4] != tag {
        return Err(FormatError::at_offset(
            format!(
                "expected {:?}, got {:?}",
                String::from_utf8_lossy(tag),
                String::from_utf8_lossy(&data[offset..offset + 4])
            ),
            offset,
        ));
    }
    Ok(())
}

fn expect_field(name: &str, offset: usize, actual: u64, expected: u64) -> Result<(), FormatError> {
    if actual != expected {
        return Err(FormatError::at_offset(
            format!("{} is {}, expected {}", name, actual, expected),
            offset,
        ));
    }
    Ok(())
}

/// Validate that `data` is exactly a canonical 44-byte-header PCM16 WAV file.
pub fn validate_canonical_wav(data: &[u8]) -> Result<CanonicalWav, FormatError> {
    const HEADER: usize = 44;

    if data.len() < HEADER {
        return Err(FormatError::new(format!(
            "file too short: {} bytes (minimum {} required)",
            data.len(),
            HEADER
        )));
    }

    expect_tag(data, 0, b"RIFF")?;
    expect_tag(data, 8, b"WAVE")?;
    expect_tag(data, 12, b"fmt ")?;
    expect_tag(data, 36, b"data")?;

    let len = data.len() as u64;
    expect_field("ChunkSize", 4, u32_at(data, 4).into(), len - 8)?;
    expect_field("Subchunk1Size", 16, u32_at(data, 16).into(), 16)?;
    expect_field("AudioFormat", 20, u16_at(data, 20).into(), 1)?;
    expect_field("BitsPerSample", 34, u16_at(data, 34).into(), 16)?;

    let channels = u16_at(data, 22);
    if !(1..=2).contains(&channels) {
        return Err(FormatError::at_offset(
            format!("NumChannels is {}, expected 1 or 2", channels),
            22,
        ));
    }
    let sample_rate = u32_at(data, 24);
    let block_align = u64::from(channels) * 2;
    expect_field("BlockAlign", 32, u16_at(data, 32).into(), block_align)?;
    expect_field(
        "ByteRate",
        28,
        u32_at(data, 28).into(),
        u64::from(sample_rate) * block_align,
    )?;

    let data_size = u64::from(u32_at(data, 40));
    expect_field("Subchunk2Size", 40, data_size, len - HEADER as u64)?;
    if data_size % block_align != 0 {
        return Err(FormatError::at_offset(
            format!("data size {} is not a whole number of frames", data_size),
            40,
        ));
    }

    let samples = data[HEADER..]
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();

    Ok(CanonicalWav {
        channels,
        sample_rate,
        frames: (data_size / block_align) as usize,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handmade_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_size = (samples.len() * 2) as u32;
        let block_align = channels * 2;
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_size).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&channels.to_le_bytes());
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_size.to_le_bytes());
        for s in samples {
            wav.extend_from_slice(&s.to_le_bytes());
        }
        wav
    }

    #[test]
    fn test_valid_stereo() {
        let wav = handmade_wav(2, 8000, &[1, -1, 2, -2]);
        let parsed = validate_canonical_wav(&wav).expect("valid");
        assert_eq!(parsed.frames, 2);
        assert_eq!(parsed.channel(0), vec![1, 2]);
        assert_eq!(parsed.channel(1), vec![-1, -2]);
    }

    #[test]
    fn test_wrong_chunk_size() {
        let mut wav = handmade_wav(1, 8000, &[0, 0]);
        wav[4..8].copy_from_slice(&0u32.to_le_bytes());
        let err = validate_canonical_wav(&wav).unwrap_err();
        assert_eq!(err.offset, Some(4));
    }

    #[test]
    fn test_partial_frame() {
        let wav = handmade_wav(2, 8000, &[0, 0, 0]);
        let err = validate_canonical_wav(&wav).unwrap_err();
        assert!(err.message.contains("whole number of frames"));
    }

    #[test]
    fn test_too_short() {
        let err = validate_canonical_wav(&[0u8; 10]).unwrap_err();
        assert!(err.to_string().contains("too short"));
    }
}
