//! Bounded-trial placement engine
//!
//! Words are placed by repeated random trials against the current grid. The
//! engine owns the grid and the random source; a word either commits on its
//! first passing trial or is dropped with a reason once the budget runs out.
//! Failed trials leave no trace on the grid, so placement is best-effort and
//! never errors.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::placement::orientation::Orientation;
use crate::placement::trial::Trial;
use crate::puzzle::LetterGrid;
use crate::puzzle::word::NormalizedWord;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;

/// Placement parameters shared by both puzzle modes
#[derive(Clone, Copy, Debug)]
pub struct PlacementConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Maximum random trials per word before it is dropped
    pub trial_budget: usize,
}

impl PlacementConfig {
    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is zero or exceeds
    /// [`MAX_GRID_DIMENSION`], or if the trial budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        if self.trial_budget == 0 {
            return Err(invalid_parameter(
                "trial_budget",
                &self.trial_budget,
                &"must allow at least one trial",
            ));
        }

        Ok(())
    }
}

/// A word successfully committed to the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPlacement {
    /// Normalized word text as placed
    pub word: String,
    /// Occupied cells in reading order, one per letter
    pub path: Vec<[usize; 2]>,
    /// Reading direction
    pub orientation: Orientation,
}

/// Why a word was left off the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Normalization stripped every character
    Empty,

    /// The word cannot fit at any origin or orientation
    TooLong {
        /// Letters in the normalized word
        word_length: usize,
        /// Side length of the grid
        grid_size: usize,
    },

    /// Every sampled trial failed on bounds or letter conflicts
    TrialsExhausted {
        /// Number of trials attempted
        budget: usize,
    },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => {
                write!(f, "no letters remain after normalization")
            }
            Self::TooLong {
                word_length,
                grid_size,
            } => {
                write!(
                    f,
                    "word length {word_length} exceeds grid dimension {grid_size}"
                )
            }
            Self::TrialsExhausted { budget } => {
                write!(f, "no placement found within {budget} trials")
            }
        }
    }
}

/// A word dropped from the puzzle, with the reason it failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedWord {
    /// Word text as supplied
    pub word: String,
    /// Why placement failed
    pub reason: DropReason,
}

/// Outcome of placing a single word
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The word was committed to the grid
    Placed(WordPlacement),
    /// The word was dropped
    Dropped(DropReason),
}

/// Random trial executor owning the grid under construction
///
/// The engine is mode-agnostic: crossword and word search differ only in
/// the orientation set and trial budget they hand over.
pub struct PlacementEngine {
    grid: LetterGrid,
    config: PlacementConfig,
    orientations: &'static [Orientation],
    rng: StdRng,
}

impl PlacementEngine {
    /// Create an engine over an empty grid
    ///
    /// A seed makes the puzzle reproducible; `None` draws entropy from the
    /// operating system.
    pub fn new(
        config: PlacementConfig,
        orientations: &'static [Orientation],
        seed: Option<u64>,
    ) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            grid: LetterGrid::new(config.grid_size),
            config,
            orientations,
            rng,
        }
    }

    /// Attempt to place one word within the trial budget
    ///
    /// Words that cannot fit at all are dropped without spending trials.
    /// Otherwise trials are sampled until one passes or the budget runs out,
    /// and the first passing trial is committed immediately.
    pub fn place_word(&mut self, word: &NormalizedWord) -> PlacementOutcome {
        if word.is_empty() {
            return PlacementOutcome::Dropped(DropReason::Empty);
        }

        if word.len() > self.config.grid_size {
            return PlacementOutcome::Dropped(DropReason::TooLong {
                word_length: word.len(),
                grid_size: self.config.grid_size,
            });
        }

        for _ in 0..self.config.trial_budget {
            let Some(trial) = Trial::random(&mut self.rng, self.config.grid_size, self.orientations)
            else {
                break;
            };

            if let Some(path) = trial.evaluate(&self.grid, word) {
                self.grid.commit(&path, word.letters());
                return PlacementOutcome::Placed(WordPlacement {
                    word: word.to_string(),
                    path,
                    orientation: trial.orientation,
                });
            }
        }

        PlacementOutcome::Dropped(DropReason::TrialsExhausted {
            budget: self.config.trial_budget,
        })
    }

    /// Fill remaining empty cells with random letters from a pool
    ///
    /// Returns the number of cells filled. An empty pool fills nothing.
    pub fn fill_unoccupied(&mut self, pool: &[char]) -> usize {
        if pool.is_empty() {
            return 0;
        }

        let Self { grid, rng, .. } = self;
        grid.fill_unoccupied_with(|| {
            pool.get(rng.random_range(0..pool.len()))
                .copied()
                .unwrap_or('A')
        })
    }

    /// Grid under construction
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::orientation::{CROSSWORD_ORIENTATIONS, WORD_SEARCH_ORIENTATIONS};

    fn engine(grid_size: usize, seed: u64) -> PlacementEngine {
        let config = PlacementConfig {
            grid_size,
            trial_budget: 200,
        };
        PlacementEngine::new(config, &WORD_SEARCH_ORIENTATIONS, Some(seed))
    }

    #[test]
    fn test_placed_word_occupies_matching_cells() {
        let mut engine = engine(6, 11);
        let word = NormalizedWord::from_text("stone");

        match engine.place_word(&word) {
            PlacementOutcome::Placed(placement) => {
                assert_eq!(placement.path.len(), 5);
                for (position, letter) in placement.path.iter().zip(word.letters()) {
                    assert_eq!(engine.grid().letter(*position), Some(*letter));
                }
            }
            PlacementOutcome::Dropped(reason) => {
                unreachable!("a five letter word fits a 6x6 grid: {reason}")
            }
        }
    }

    #[test]
    fn test_too_long_word_dropped_without_trials() {
        let mut engine = engine(4, 11);
        let outcome = engine.place_word(&NormalizedWord::from_text("elephant"));

        assert_eq!(
            outcome,
            PlacementOutcome::Dropped(DropReason::TooLong {
                word_length: 8,
                grid_size: 4,
            })
        );
        assert_eq!(engine.grid().occupied_count(), 0);
    }

    #[test]
    fn test_empty_after_normalization_dropped() {
        let mut engine = engine(4, 11);
        let outcome = engine.place_word(&NormalizedWord::from_text("1234"));
        assert_eq!(outcome, PlacementOutcome::Dropped(DropReason::Empty));
    }

    #[test]
    fn test_exhausted_trials_leave_grid_untouched() {
        let mut engine = engine(3, 11);
        engine.fill_unoccupied(&['Q']);
        let before = engine.grid().clone();

        let outcome = engine.place_word(&NormalizedWord::from_text("cat"));
        assert_eq!(
            outcome,
            PlacementOutcome::Dropped(DropReason::TrialsExhausted { budget: 200 })
        );
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let words = ["apple", "pear", "plum"];

        let mut first = engine(8, 99);
        let mut second = engine(8, 99);
        for word in words {
            let normalized = NormalizedWord::from_text(word);
            assert_eq!(first.place_word(&normalized), second.place_word(&normalized));
        }
        assert_eq!(first.grid(), second.grid());
    }

    #[test]
    fn test_fill_covers_every_empty_cell() {
        let mut engine = engine(4, 5);
        engine.place_word(&NormalizedWord::from_text("cat"));

        let occupied = engine.grid().occupied_count();
        let filled = engine.fill_unoccupied(&['A', 'B', 'C']);
        assert_eq!(filled, 16 - occupied);
        assert_eq!(engine.grid().occupied_count(), 16);
    }

    #[test]
    fn test_fill_with_empty_pool_is_a_no_op() {
        let mut engine = engine(4, 5);
        assert_eq!(engine.fill_unoccupied(&[]), 0);
        assert_eq!(engine.grid().occupied_count(), 0);
    }

    #[test]
    fn test_config_validation_bounds() {
        let zero = PlacementConfig {
            grid_size: 0,
            trial_budget: 10,
        };
        assert!(zero.validate().is_err());

        let no_budget = PlacementConfig {
            grid_size: 4,
            trial_budget: 0,
        };
        assert!(no_budget.validate().is_err());

        let valid = PlacementConfig {
            grid_size: 4,
            trial_budget: 1,
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_crossword_orientations_only_read_forward() {
        let mut engine = PlacementEngine::new(
            PlacementConfig {
                grid_size: 6,
                trial_budget: 200,
            },
            &CROSSWORD_ORIENTATIONS,
            Some(3),
        );

        for _ in 0..10 {
            if let PlacementOutcome::Placed(placement) =
                engine.place_word(&NormalizedWord::from_text("go"))
            {
                assert!(matches!(
                    placement.orientation,
                    Orientation::East | Orientation::South
                ));
            }
        }
    }
}
