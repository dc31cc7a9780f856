//! CLI command implementations

pub mod classify;
pub mod encode;
pub mod inspect;
pub mod json_output;
