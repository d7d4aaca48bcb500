//! Square letter grid with exclusive-ownership mutation
//!
//! The grid is the single authority over cell contents. Placement code reads
//! it through `letter` and `conflicts` and mutates it only through `commit`
//! and `fill_unoccupied_with`, so a failed trial can never leave partial
//! state behind.

use ndarray::Array2;

/// Square grid of optionally occupied letter cells
///
/// Cells start empty (`None`) and are only written by committing a verified
/// placement path or by the filler pass. Positions are `[row, col]` with the
/// origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<char>>,
    size: usize,
}

impl LetterGrid {
    /// Create an empty grid with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::default((size, size)),
            size,
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Get the letter at a position, or `None` when empty or out of bounds
    pub fn letter(&self, position: [usize; 2]) -> Option<char> {
        self.cells.get(position).copied().flatten()
    }

    /// Check whether a position holds a letter
    pub fn is_occupied(&self, position: [usize; 2]) -> bool {
        self.letter(position).is_some()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check a candidate path for letter conflicts
    ///
    /// A conflict is any path cell that already holds a letter different from
    /// the one the word would write there. Matching letters are allowed and
    /// become crossings. Paths and letter slices of unequal length conflict
    /// by definition, as do out-of-bounds positions; callers are expected to
    /// verify fit before asking.
    pub fn conflicts(&self, path: &[[usize; 2]], letters: &[char]) -> bool {
        if path.len() != letters.len() {
            return true;
        }

        path.iter().zip(letters).any(|(&position, &letter)| {
            match self.cells.get(position) {
                Some(Some(existing)) => *existing != letter,
                Some(None) => false,
                None => true,
            }
        })
    }

    /// Write a verified path onto the grid
    ///
    /// This is the only mutation performed during placement. Callers must
    /// have checked `conflicts` first; positions outside the grid are
    /// ignored rather than extending it.
    pub fn commit(&mut self, path: &[[usize; 2]], letters: &[char]) {
        for (&position, &letter) in path.iter().zip(letters) {
            if let Some(cell) = self.cells.get_mut(position) {
                *cell = Some(letter);
            }
        }
    }

    /// Fill every empty cell using the supplied letter source
    ///
    /// Returns the number of cells written. Occupied cells are untouched.
    pub fn fill_unoccupied_with(&mut self, mut next_letter: impl FnMut() -> char) -> usize {
        let mut filled = 0;
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(next_letter());
                filled += 1;
            }
        }
        filled
    }

    /// Snapshot of which cells are occupied
    ///
    /// Taken before the filler pass, this distinguishes placed word letters
    /// from filler noise in the final output.
    pub fn occupancy_mask(&self) -> Array2<bool> {
        self.cells.map(Option::is_some)
    }
}
