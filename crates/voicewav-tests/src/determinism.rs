//! Determinism checks for encoder output.
//!
//! Encoding carries no timestamps or other variable metadata, so repeated
//! runs over the same input must produce identical bytes.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first run's output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<Difference>,
}

/// Location of the first differing byte between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Which run (0-indexed) diverged from run 0.
    pub run_index: usize,
    /// Byte offset of the difference; equals the shorter length when one
    /// output is a prefix of the other.
    pub offset: usize,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run {} differs from run 0 at byte {}",
            self.run_index, self.offset
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Offset of the first differing byte, or `None` if equal.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(offset) => Some(offset),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

/// Run `generate_fn` `runs` times (at least 2) and compare every output
/// against the first.
pub fn verify_determinism<F>(mut generate_fn: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    let runs = runs.max(2);
    let reference = generate_fn();
    let hash = blake3::hash(&reference).to_hex().to_string();

    let diff = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        first_difference(&reference, &output).map(|offset| Difference { run_index, offset })
    });

    DeterminismResult {
        is_deterministic: diff.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff,
    }
}
