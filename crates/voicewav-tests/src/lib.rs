//! voicewav End-to-End Test Infrastructure
//!
//! Shared helpers for the integration tests in `tests/`:
//!
//! - [`fixtures`]: synthetic signals, fake decoders and temp directories
//! - [`format_validators`]: a canonical-WAV checker that shares no code
//!   with the encoder
//! - [`determinism`]: repeated-run byte comparison
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p voicewav-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod format_validators;

// Re-export commonly used items
pub use determinism::{verify_determinism, DeterminismResult};
pub use format_validators::{validate_canonical_wav, CanonicalWav, FormatError};
