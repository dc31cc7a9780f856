//! Canonical RIFF/WAVE header writer.

use std::io::Write;

use crate::error::{WavError, WavResult};

use super::format::{WavFormat, HEADER_LEN, PCM_FORMAT};

/// Writes the 44-byte canonical header for `data_size` bytes of PCM data.
///
/// Fails without writing anything when a size field would overflow.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `data_size` - Length of the sample data that follows the header
pub fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_size: u32) -> WavResult<()> {
    let block_align = format.block_align()?;
    let byte_rate = format.byte_rate()?;
    // Total file size minus 8 bytes for the RIFF tag and size field
    let chunk_size = data_size
        .checked_add(HEADER_LEN as u32 - 8)
        .ok_or(WavError::TooLarge {
            bytes: u64::from(data_size),
        })?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&chunk_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&PCM_FORMAT.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    Ok(())
}
