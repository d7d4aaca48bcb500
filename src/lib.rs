//! Randomized word placement for crossword and word search grids
//!
//! Words from plain text lists are dropped onto a square grid by bounded
//! random trials: sample an origin and orientation, verify the word fits
//! without contradicting existing letters, and commit the first success.
//! Words that never find a spot are reported with the reason rather than
//! failing the puzzle.

#![forbid(unsafe_code)]

/// Input/output operations, configuration, and error handling
pub mod io;
/// Placement engine and the crossword and word search generators
pub mod placement;
/// Grid, word, and alphabet primitives
pub mod puzzle;

pub use io::error::{PuzzleError, Result};
