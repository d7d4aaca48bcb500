//! Crossword generation
//!
//! Words are taken in list order and placed across or down. Each placed word
//! receives the next sequential clue reference, so numbering reflects
//! placement success rather than list position: dropped words leave no gap.
//! Empty cells stay empty; a crossword has no filler.

use crate::io::configuration::CROSSWORD_TRIAL_BUDGET;
use crate::io::error::Result;
use crate::placement::engine::{
    DroppedWord, PlacementConfig, PlacementEngine, PlacementOutcome,
};
use crate::placement::orientation::{CROSSWORD_ORIENTATIONS, Orientation};
use crate::puzzle::LetterGrid;
use crate::puzzle::word::{NormalizedWord, WordEntry};
use ndarray::Array2;
use std::fmt;

/// Crossword generation parameters
#[derive(Clone, Copy, Debug)]
pub struct CrosswordConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Maximum random trials per word
    pub trial_budget: usize,
    /// Random seed; `None` uses operating system entropy
    pub seed: Option<u64>,
}

impl CrosswordConfig {
    /// Create a configuration with the default trial budget and no seed
    pub const fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            trial_budget: CROSSWORD_TRIAL_BUDGET,
            seed: None,
        }
    }
}

/// Clue reference attached to the first letter of a placed word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueMarker {
    /// Sequential clue number, starting at 1
    pub reference: usize,
    /// Clue heading from the word entry
    pub heading: String,
    /// Clue description from the word entry
    pub description: String,
}

/// A single crossword cell
///
/// When two placed words share a first-letter cell, the marker of the later
/// placement wins; the placed clue records remain authoritative for both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrosswordCell {
    /// Letter occupying the cell, if any
    pub letter: Option<char>,
    /// Clue marker when this cell starts a placed word
    pub marker: Option<ClueMarker>,
}

impl CrosswordCell {
    /// Check whether the cell holds a letter
    pub const fn is_occupied(&self) -> bool {
        self.letter.is_some()
    }

    /// Check whether the cell starts a placed word
    pub const fn is_first_letter(&self) -> bool {
        self.marker.is_some()
    }
}

/// A placed word with its clue metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedClue {
    /// Sequential clue number, starting at 1
    pub reference: usize,
    /// Normalized word as placed on the grid
    pub word: String,
    /// Clue heading from the word entry
    pub heading: String,
    /// Clue description from the word entry
    pub description: String,
    /// Occupied cells in reading order
    pub path: Vec<[usize; 2]>,
    /// Reading direction, across or down
    pub orientation: Orientation,
}

/// A finished crossword puzzle
#[derive(Clone, Debug)]
pub struct Crossword {
    size: usize,
    cells: Array2<CrosswordCell>,
    placed: Vec<PlacedClue>,
    dropped: Vec<DroppedWord>,
}

impl Crossword {
    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Cell at a position, or `None` when out of bounds
    pub fn cell(&self, position: [usize; 2]) -> Option<&CrosswordCell> {
        self.cells.get(position)
    }

    /// Placed words in placement order
    pub fn placed(&self) -> &[PlacedClue] {
        &self.placed
    }

    /// Words that could not be placed, in input order
    pub fn dropped(&self) -> &[DroppedWord] {
        &self.dropped
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let letter = self
                    .cell([row, col])
                    .and_then(|cell| cell.letter)
                    .unwrap_or('.');
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Crossword generator with validated configuration
pub struct CrosswordGenerator {
    config: CrosswordConfig,
}

impl CrosswordGenerator {
    /// Create a generator after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size or trial budget is out of range.
    pub fn new(config: CrosswordConfig) -> Result<Self> {
        PlacementConfig {
            grid_size: config.grid_size,
            trial_budget: config.trial_budget,
        }
        .validate()?;

        Ok(Self { config })
    }

    /// Generate a crossword from word entries in list order
    ///
    /// Placement is best-effort: words that cannot be placed are reported
    /// in the dropped list rather than failing the puzzle. Each call starts
    /// from an empty grid, so a seeded configuration reproduces the same
    /// puzzle on every call.
    pub fn generate(&self, entries: &[WordEntry]) -> Crossword {
        let placement_config = PlacementConfig {
            grid_size: self.config.grid_size,
            trial_budget: self.config.trial_budget,
        };
        let mut engine =
            PlacementEngine::new(placement_config, &CROSSWORD_ORIENTATIONS, self.config.seed);

        let mut placed: Vec<PlacedClue> = Vec::new();
        let mut dropped = Vec::new();

        for entry in entries {
            let word = NormalizedWord::from_text(&entry.text);
            match engine.place_word(&word) {
                PlacementOutcome::Placed(placement) => {
                    let reference = placed.len() + 1;
                    placed.push(PlacedClue {
                        reference,
                        word: placement.word,
                        heading: entry.heading.clone(),
                        description: entry.description.clone(),
                        path: placement.path,
                        orientation: placement.orientation,
                    });
                }
                PlacementOutcome::Dropped(reason) => {
                    dropped.push(DroppedWord {
                        word: entry.text.clone(),
                        reason,
                    });
                }
            }
        }

        let cells = build_cells(engine.grid(), &placed);

        Crossword {
            size: self.config.grid_size,
            cells,
            placed,
            dropped,
        }
    }
}

/// Assemble display cells from the letter grid and placed clue records
fn build_cells(grid: &LetterGrid, placed: &[PlacedClue]) -> Array2<CrosswordCell> {
    let size = grid.size();
    let mut cells = Array2::from_shape_fn((size, size), |(row, col)| CrosswordCell {
        letter: grid.letter([row, col]),
        marker: None,
    });

    for clue in placed {
        let Some(&origin) = clue.path.first() else {
            continue;
        };
        if let Some(cell) = cells.get_mut(origin) {
            cell.marker = Some(ClueMarker {
                reference: clue.reference,
                heading: clue.heading.clone(),
                description: clue.description.clone(),
            });
        }
    }

    cells
}
