//! Randomized placement trials
//!
//! A trial pairs a uniformly random origin cell with a uniformly random
//! eligible orientation. Evaluation is read-only: the grid is never touched
//! until a trial has passed both the fit and the conflict check.

use crate::placement::orientation::Orientation;
use crate::puzzle::LetterGrid;
use crate::puzzle::word::NormalizedWord;
use rand::{Rng, rngs::StdRng};

/// A single randomized placement attempt
#[derive(Clone, Copy, Debug)]
pub struct Trial {
    /// Candidate starting cell
    pub origin: [usize; 2],
    /// Candidate reading direction
    pub orientation: Orientation,
}

impl Trial {
    /// Sample a uniformly random trial
    ///
    /// Every cell and every eligible orientation is equally likely; the
    /// sample is not biased toward positions where the word would fit.
    /// Returns `None` when the grid has no cells or no orientation is
    /// eligible.
    pub fn random(
        rng: &mut StdRng,
        grid_size: usize,
        orientations: &[Orientation],
    ) -> Option<Self> {
        if grid_size == 0 || orientations.is_empty() {
            return None;
        }

        let orientation = orientations
            .get(rng.random_range(0..orientations.len()))
            .copied()?;
        let origin = [
            rng.random_range(0..grid_size),
            rng.random_range(0..grid_size),
        ];

        Some(Self {
            origin,
            orientation,
        })
    }

    /// Check the trial against grid bounds and existing letters
    ///
    /// Returns the cell path when the whole word stays on the grid and every
    /// occupied cell along it already holds the matching letter.
    pub fn evaluate(&self, grid: &LetterGrid, word: &NormalizedWord) -> Option<Vec<[usize; 2]>> {
        let path = self.orientation.path(self.origin, word.len(), grid.size())?;
        if grid.conflicts(&path, word.letters()) {
            return None;
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::orientation::WORD_SEARCH_ORIENTATIONS;
    use rand::SeedableRng;

    #[test]
    fn test_random_trials_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let trial = Trial::random(&mut rng, 5, &WORD_SEARCH_ORIENTATIONS);
            let Some(trial) = trial else {
                unreachable!("sampling from a populated grid always yields a trial");
            };
            assert!(trial.origin[0] < 5);
            assert!(trial.origin[1] < 5);
        }
    }

    #[test]
    fn test_degenerate_inputs_yield_no_trial() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(Trial::random(&mut rng, 0, &WORD_SEARCH_ORIENTATIONS).is_none());
        assert!(Trial::random(&mut rng, 5, &[]).is_none());
    }

    #[test]
    fn test_evaluate_accepts_fitting_word() {
        let grid = LetterGrid::new(4);
        let trial = Trial {
            origin: [1, 0],
            orientation: Orientation::East,
        };
        let path = trial.evaluate(&grid, &NormalizedWord::from_text("cat"));
        assert_eq!(path, Some(vec![[1, 0], [1, 1], [1, 2]]));
    }

    #[test]
    fn test_evaluate_rejects_overflow_and_conflict() {
        let mut grid = LetterGrid::new(4);
        grid.commit(&[[1, 1]], &['X']);

        let overflow = Trial {
            origin: [1, 2],
            orientation: Orientation::East,
        };
        assert_eq!(overflow.evaluate(&grid, &NormalizedWord::from_text("cat")), None);

        let conflict = Trial {
            origin: [1, 0],
            orientation: Orientation::East,
        };
        assert_eq!(conflict.evaluate(&grid, &NormalizedWord::from_text("cat")), None);
    }

    #[test]
    fn test_evaluate_allows_matching_crossing() {
        let mut grid = LetterGrid::new(4);
        grid.commit(&[[1, 1]], &['A']);

        let trial = Trial {
            origin: [1, 0],
            orientation: Orientation::East,
        };
        let path = trial.evaluate(&grid, &NormalizedWord::from_text("cat"));
        assert!(path.is_some());
    }
}
