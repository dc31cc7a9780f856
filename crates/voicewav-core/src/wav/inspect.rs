//! RIFF/WAVE header parsing and PCM extraction.

use serde::Serialize;

use crate::error::{WavError, WavResult};
use crate::signal::DecodedAudioSignal;

use super::format::HEADER_LEN;
use super::pcm::deinterleave_pcm16;

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Audio format code (1 = PCM, 3 = IEEE float).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate (bytes per second).
    pub byte_rate: u32,
    /// Block alignment (bytes per frame).
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Whole frames in the data chunk.
    pub num_frames: usize,
    /// Offset of the first sample byte.
    pub data_offset: usize,
    /// Length of the data chunk payload.
    pub data_len: usize,
}

impl WavInfo {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / f64::from(self.sample_rate)
    }

    /// True for integer PCM at 16 bits per sample.
    pub fn is_pcm16(&self) -> bool {
        self.audio_format == 1 && self.bits_per_sample == 16
    }
}

/// Parsed `fmt ` chunk fields.
struct FmtChunk {
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Parses a RIFF/WAVE byte stream.
///
/// Walks the chunk list (chunks are word-aligned), reads the `fmt ` chunk
/// and stops at the first `data` chunk, which must come after `fmt `.
/// The data chunk must be fully present.
pub fn inspect_wav(data: &[u8]) -> WavResult<WavInfo> {
    if data.len() < HEADER_LEN {
        return Err(WavError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    if &data[0..4] != b"RIFF" {
        return Err(WavError::InvalidRiffHeader);
    }
    if &data[8..12] != b"WAVE" {
        return Err(WavError::InvalidWaveFormat);
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut offset = 12usize;

    while data.len().saturating_sub(offset) >= 8 {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 {
                return Err(WavError::ShortFmtChunk { size: chunk_size });
            }
            if body + 16 > data.len() {
                return Err(WavError::Truncated {
                    expected: body + 16,
                    actual: data.len(),
                });
            }
            fmt = Some(FmtChunk {
                audio_format: read_u16(data, body),
                channels: read_u16(data, body + 2),
                sample_rate: read_u32(data, body + 4),
                byte_rate: read_u32(data, body + 8),
                block_align: read_u16(data, body + 12),
                bits_per_sample: read_u16(data, body + 14),
            });
        } else if chunk_id == b"data" {
            let fmt = fmt.ok_or(WavError::MissingChunk { id: "fmt " })?;
            let end = body.saturating_add(chunk_size);
            if end > data.len() {
                return Err(WavError::Truncated {
                    expected: end,
                    actual: data.len(),
                });
            }
            let num_frames = if fmt.block_align > 0 {
                chunk_size / usize::from(fmt.block_align)
            } else {
                0
            };
            return Ok(WavInfo {
                audio_format: fmt.audio_format,
                channels: fmt.channels,
                sample_rate: fmt.sample_rate,
                byte_rate: fmt.byte_rate,
                block_align: fmt.block_align,
                bits_per_sample: fmt.bits_per_sample,
                num_frames,
                data_offset: body,
                data_len: chunk_size,
            });
        }

        // Move to next chunk (chunks are word-aligned)
        let padded = chunk_size.saturating_add(chunk_size & 1);
        offset = body.saturating_add(padded);
    }

    if fmt.is_none() {
        return Err(WavError::MissingChunk { id: "fmt " });
    }
    Err(WavError::MissingChunk { id: "data" })
}

/// Extracts the data chunk payload from a WAV file buffer.
///
/// Returns `None` if the buffer is not a well-formed WAV file.
pub fn extract_pcm_data(data: &[u8]) -> Option<&[u8]> {
    let info = inspect_wav(data).ok()?;
    Some(&data[info.data_offset..info.data_offset + info.data_len])
}

/// Decodes a 16-bit PCM WAV file back into a float signal.
///
/// Applies the inverse of the encoder's scaling, so every sample lands
/// within one quantization step of the value that was encoded.
pub fn decode_pcm16(data: &[u8]) -> WavResult<DecodedAudioSignal> {
    let info = inspect_wav(data)?;
    if !info.is_pcm16() || info.channels == 0 {
        return Err(WavError::UnsupportedFormat {
            format_code: info.audio_format,
            bits: info.bits_per_sample,
        });
    }

    let pcm = &data[info.data_offset..info.data_offset + info.data_len];
    let channels = deinterleave_pcm16(pcm, usize::from(info.channels));
    DecodedAudioSignal::new(info.sample_rate, channels)
}
