//! Canonical WAV encoding.
//!
//! Converts a decoded float signal into a 44-byte RIFF/WAVE header followed
//! by interleaved little-endian 16-bit PCM. Output carries no timestamps or
//! variable metadata, so equal input always yields identical bytes.

mod bytes;
mod encoder;
mod format;
mod header;
mod inspect;
mod pcm;


// Re-export public API
pub use bytes::WavBytes;
pub use encoder::{encode_wav, WavEncoder};
pub use format::{WavFormat, BITS_PER_SAMPLE, HEADER_LEN, MAX_OUTPUT_CHANNELS, PCM_FORMAT};
pub use header::write_header;
pub use inspect::{decode_pcm16, extract_pcm_data, inspect_wav, WavInfo};
pub use pcm::{i16_to_sample, sample_to_i16};
