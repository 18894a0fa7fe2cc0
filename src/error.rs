/// Crate error type.
///
/// The taxonomy is deliberately narrow: every algorithm in the pipeline is
/// total over its valid input domain, so only dimension validation can fail.
/// Out-of-bounds probes during generation and play are routine and reported
/// as filtered/boolean results, never as errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
}
