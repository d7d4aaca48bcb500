//! Word search generation
//!
//! Words are sorted longest first before placement, since long words need
//! empty runs that short words and crossings quickly destroy. All eight
//! compass directions are eligible and the trial budget scales with grid
//! area. After placement every empty cell is filled with a random letter,
//! so the finished grid has no gaps; a snapshot taken before the filler
//! pass records which cells belong to placed words.

use crate::io::configuration::word_search_trial_budget;
use crate::io::error::Result;
use crate::placement::engine::{
    DroppedWord, PlacementConfig, PlacementEngine, PlacementOutcome,
};
use crate::placement::orientation::{Orientation, WORD_SEARCH_ORIENTATIONS};
use crate::puzzle::LetterGrid;
use crate::puzzle::alphabet::{FillerPool, LetterSet};
use crate::puzzle::word::{NormalizedWord, WordEntry};
use ndarray::Array2;
use std::fmt;

/// Word search generation parameters
#[derive(Clone, Copy, Debug)]
pub struct WordSearchConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Maximum random trials per word
    pub trial_budget: usize,
    /// Random seed; `None` uses operating system entropy
    pub seed: Option<u64>,
    /// Letter pool for the filler pass
    pub filler: FillerPool,
}

impl WordSearchConfig {
    /// Create a configuration with the area-scaled trial budget and no seed
    pub const fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            trial_budget: word_search_trial_budget(grid_size),
            seed: None,
            filler: FillerPool::FullAlphabet,
        }
    }
}

/// A word hidden in the finished grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    /// Normalized word as placed on the grid
    pub word: String,
    /// Reading direction
    pub orientation: Orientation,
    /// Occupied cells in reading order
    pub path: Vec<[usize; 2]>,
    /// Spreadsheet-style label per cell, e.g. `A1` for the top-left corner
    pub coordinate_labels: Vec<String>,
}

/// A single word search cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSearchCell {
    /// Letter shown in the cell
    pub letter: char,
    /// Whether the letter belongs to a placed word rather than filler
    pub fixed: bool,
}

/// A finished word search puzzle
#[derive(Clone, Debug)]
pub struct WordSearch {
    size: usize,
    cells: Array2<WordSearchCell>,
    placed: Vec<PlacedWord>,
    dropped: Vec<DroppedWord>,
    filler_count: usize,
}

impl WordSearch {
    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Cell at a position, or `None` when out of bounds
    pub fn cell(&self, position: [usize; 2]) -> Option<&WordSearchCell> {
        self.cells.get(position)
    }

    /// Hidden words in placement order
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words that could not be placed, in input order
    pub fn dropped(&self) -> &[DroppedWord] {
        &self.dropped
    }

    /// Number of cells written by the filler pass
    pub const fn filler_count(&self) -> usize {
        self.filler_count
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let letter = self.cell([row, col]).map_or('.', |cell| cell.letter);
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Spreadsheet-style label for a grid position
///
/// Columns count in letters (`A`, `B`, ... `Z`, `AA`) and rows count from 1,
/// so the top-left corner is `A1`.
pub fn coordinate_label(position: [usize; 2]) -> String {
    let mut column = String::new();
    let mut value = position[1] + 1;
    while value > 0 {
        value -= 1;
        column.insert(0, char::from(b'A' + (value % 26) as u8));
        value /= 26;
    }

    format!("{column}{}", position[0] + 1)
}

/// Word list entry queued for placement
struct Candidate<'a> {
    /// Position in the input list
    index: usize,
    /// Source entry
    entry: &'a WordEntry,
    /// Normalized placement form
    word: NormalizedWord,
}

/// Word search generator with validated configuration
pub struct WordSearchGenerator {
    config: WordSearchConfig,
}

impl WordSearchGenerator {
    /// Create a generator after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size or trial budget is out of range.
    pub fn new(config: WordSearchConfig) -> Result<Self> {
        PlacementConfig {
            grid_size: config.grid_size,
            trial_budget: config.trial_budget,
        }
        .validate()?;

        Ok(Self { config })
    }

    /// Generate a word search from word entries
    ///
    /// Placement is best-effort: words that cannot be placed are reported
    /// in the dropped list rather than failing the puzzle. Each call starts
    /// from an empty grid, so a seeded configuration reproduces the same
    /// puzzle on every call.
    pub fn generate(&self, entries: &[WordEntry]) -> WordSearch {
        let placement_config = PlacementConfig {
            grid_size: self.config.grid_size,
            trial_budget: self.config.trial_budget,
        };
        let mut engine =
            PlacementEngine::new(placement_config, &WORD_SEARCH_ORIENTATIONS, self.config.seed);

        let mut candidates: Vec<Candidate<'_>> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Candidate {
                index,
                entry,
                word: NormalizedWord::from_text(&entry.text),
            })
            .collect();

        // Stable sort keeps input order among equal lengths
        candidates.sort_by(|a, b| b.word.len().cmp(&a.word.len()));

        let mut placed = Vec::new();
        let mut dropped_indexed = Vec::new();
        let mut placed_letters = LetterSet::new();

        for candidate in &candidates {
            match engine.place_word(&candidate.word) {
                PlacementOutcome::Placed(placement) => {
                    for &letter in candidate.word.letters() {
                        placed_letters.insert(letter);
                    }

                    let coordinate_labels = placement
                        .path
                        .iter()
                        .map(|&position| coordinate_label(position))
                        .collect();
                    placed.push(PlacedWord {
                        word: placement.word,
                        orientation: placement.orientation,
                        path: placement.path,
                        coordinate_labels,
                    });
                }
                PlacementOutcome::Dropped(reason) => {
                    dropped_indexed.push((
                        candidate.index,
                        DroppedWord {
                            word: candidate.entry.text.clone(),
                            reason,
                        },
                    ));
                }
            }
        }

        dropped_indexed.sort_by_key(|(index, _)| *index);
        let dropped = dropped_indexed.into_iter().map(|(_, word)| word).collect();

        // The mask must be taken before filler letters land
        let mask = engine.grid().occupancy_mask();
        let pool = self.config.filler.resolve(&placed_letters);
        let filler_count = engine.fill_unoccupied(&pool);

        let cells = build_cells(engine.grid(), &mask);

        WordSearch {
            size: self.config.grid_size,
            cells,
            placed,
            dropped,
            filler_count,
        }
    }
}

/// Assemble display cells from the filled grid and the pre-filler mask
fn build_cells(grid: &LetterGrid, mask: &Array2<bool>) -> Array2<WordSearchCell> {
    let size = grid.size();
    Array2::from_shape_fn((size, size), |(row, col)| WordSearchCell {
        letter: grid.letter([row, col]).unwrap_or('A'),
        fixed: mask.get([row, col]).copied().unwrap_or(false),
    })
}
