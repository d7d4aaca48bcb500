//! Random word placement
//!
//! Both puzzle modes run the same bounded-trial loop: sample a random origin
//! and orientation, verify the word fits and never contradicts an occupied
//! cell, and commit on the first success. The modes differ in the
//! orientation set, the trial budget, and what happens to cells no word
//! claimed.

/// Crossword generation with sequential clue references
pub mod crossword;
/// Bounded-trial placement engine shared by both modes
pub mod engine;
/// Word orientations and straight-line paths
pub mod orientation;
/// Random trial sampling and evaluation
pub mod trial;
/// Word search generation with filler letters
pub mod wordsearch;

pub use crossword::{Crossword, CrosswordConfig, CrosswordGenerator};
pub use engine::{DropReason, DroppedWord, PlacementEngine, PlacementOutcome};
pub use wordsearch::{WordSearch, WordSearchConfig, WordSearchGenerator};
