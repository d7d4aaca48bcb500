//! Puzzle board primitives
//!
//! This module contains the domain vocabulary shared by both generators:
//! - Letter grid state and mutation
//! - Word entries and normalization
//! - Alphabet handling and filler letter pools

/// Alphabet constants, normalization, and filler pools
pub mod alphabet;
/// Square letter grid state
pub mod grid;
/// Word entries and normalized placement form
pub mod word;

pub use grid::LetterGrid;
