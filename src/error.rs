//! Error type shared by the puzzle loader, the grid constructor and the writers.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;

/// Errors raised while building, loading or saving a puzzle.
///
/// A word that cannot be found in the grid is not an error: the solver
/// reports it through [`Solution::missing`](crate::solver::Solution::missing).
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    #[display("puzzle grid has no rows")]
    EmptyGrid,
    #[display("grid row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[display("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
