//! voicewav CLI library.
//!
//! Argument definitions, logging setup and the command implementations
//! behind the `voicewav` binary.

pub mod cli_args;
pub mod commands;
pub mod logging;
