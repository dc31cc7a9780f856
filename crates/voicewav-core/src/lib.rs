//! voicewav core library
//!
//! Turns a decoded speech recording into a canonical 16-bit PCM WAV file
//! for upload to a transcription service.
//!
//! # Overview
//!
//! The platform decodes a compressed capture (usually WebM/Opus) into a
//! [`DecodedAudioSignal`]. [`WavEncoder`] writes that signal as a 44-byte
//! RIFF/WAVE header followed by interleaved little-endian 16-bit samples,
//! keeping at most two channels. [`prepare_upload`] wraps the whole capture
//! flow, falling back to the original recording when conversion fails.
//!
//! # Example
//!
//! ```
//! use voicewav_core::{DecodedAudioSignal, WavEncoder};
//!
//! let signal = DecodedAudioSignal::mono(44100, vec![0.0, 1.0, -1.0, 0.5])?;
//! let wav = WavEncoder::new().encode(&signal)?;
//!
//! assert_eq!(wav.len(), 52);
//! assert_eq!(&wav.as_bytes()[0..4], b"RIFF");
//! # Ok::<(), voicewav_core::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`signal`] - Validated decoded audio input
//! - [`wav`] - Encoder, header writer and inspection
//! - [`container`] - Recorder MIME type classification
//! - [`upload`] - Transcode-or-passthrough upload preparation
//! - [`error`] - Error types

pub mod container;
pub mod error;
pub mod signal;
pub mod upload;
pub mod wav;

// Re-export main types at crate root
pub use container::{select_recording_mime, RecordingFormat, WAV_MIME_TYPE};
pub use error::{WavError, WavErrorKind, WavResult};
pub use signal::{DecodedAudioSignal, RawSignal};
pub use upload::{plan_upload, prepare_upload, AudioDecoder, UploadFile, UploadPlan, UploadTarget};
pub use wav::{decode_pcm16, encode_wav, inspect_wav, WavBytes, WavEncoder, WavFormat, WavInfo};
