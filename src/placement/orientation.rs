//! Word orientations and straight-line path construction
//!
//! An orientation is a unit step direction on the grid. A word occupies a
//! straight run of cells from its origin along one orientation, so path
//! construction and bounds checking live here rather than in the grid.

use std::fmt;

/// Compass direction a word reads along
///
/// Row coordinates grow downward and column coordinates grow rightward, so
/// `East` is left-to-right reading order and `South` is top-to-bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right
    East,
    /// Diagonally down and right
    SouthEast,
    /// Top to bottom
    South,
    /// Diagonally down and left
    SouthWest,
    /// Right to left
    West,
    /// Diagonally up and left
    NorthWest,
    /// Bottom to top
    North,
    /// Diagonally up and right
    NorthEast,
}

/// Orientations eligible in crossword mode: across and down
pub const CROSSWORD_ORIENTATIONS: [Orientation; 2] = [Orientation::East, Orientation::South];

/// Orientations eligible in word search mode: all eight compass directions
pub const WORD_SEARCH_ORIENTATIONS: [Orientation; 8] = [
    Orientation::East,
    Orientation::SouthEast,
    Orientation::South,
    Orientation::SouthWest,
    Orientation::West,
    Orientation::NorthWest,
    Orientation::North,
    Orientation::NorthEast,
];

impl Orientation {
    /// Per-letter step as a `[row, col]` offset
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::East => [0, 1],
            Self::SouthEast => [1, 1],
            Self::South => [1, 0],
            Self::SouthWest => [1, -1],
            Self::West => [0, -1],
            Self::NorthWest => [-1, -1],
            Self::North => [-1, 0],
            Self::NorthEast => [-1, 1],
        }
    }

    /// Human-readable direction name
    pub const fn label(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
            Self::North => "north",
            Self::NorthEast => "north-east",
        }
    }

    /// Build the cell path for a word of `length` letters starting at `origin`
    ///
    /// Returns `None` when the run would leave the grid or when `length` is
    /// zero. The returned path holds exactly `length` positions, each one
    /// step from the previous along this orientation.
    pub fn path(
        self,
        origin: [usize; 2],
        length: usize,
        grid_size: usize,
    ) -> Option<Vec<[usize; 2]>> {
        if length == 0 {
            return None;
        }

        let delta = self.delta();
        let span = length as i32 - 1;
        let start = [origin[0] as i32, origin[1] as i32];
        let last = [start[0] + delta[0] * span, start[1] + delta[1] * span];

        let bound = grid_size as i32;
        let in_bounds =
            |pos: [i32; 2]| pos[0] >= 0 && pos[0] < bound && pos[1] >= 0 && pos[1] < bound;
        if !in_bounds(start) || !in_bounds(last) {
            return None;
        }

        let path = (0..length)
            .map(|step| {
                [
                    (start[0] + delta[0] * step as i32) as usize,
                    (start[1] + delta[1] * step as i32) as usize,
                ]
            })
            .collect();
        Some(path)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_has_one_cell_per_letter() {
        let path = Orientation::East.path([2, 0], 4, 6).unwrap_or_default();
        assert_eq!(path, vec![[2, 0], [2, 1], [2, 2], [2, 3]]);
    }

    #[test]
    fn test_path_steps_are_colinear() {
        for orientation in WORD_SEARCH_ORIENTATIONS {
            let path = orientation.path([4, 4], 3, 9).unwrap_or_default();
            assert_eq!(path.len(), 3);

            let delta = orientation.delta();
            for (from, to) in path.iter().zip(path.iter().skip(1)) {
                assert_eq!(to[0] as i32 - from[0] as i32, delta[0]);
                assert_eq!(to[1] as i32 - from[1] as i32, delta[1]);
            }
        }
    }

    #[test]
    fn test_path_rejects_overflow_past_edges() {
        assert!(Orientation::East.path([0, 2], 3, 4).is_none());
        assert!(Orientation::West.path([0, 0], 2, 4).is_none());
        assert!(Orientation::North.path([1, 3], 3, 4).is_none());
        assert!(Orientation::SouthEast.path([2, 2], 3, 4).is_none());
    }

    #[test]
    fn test_full_diagonal_fits_exactly() {
        let path = Orientation::SouthEast.path([0, 0], 4, 4).unwrap_or_default();
        assert_eq!(path.last(), Some(&[3, 3]));

        let reverse = Orientation::NorthWest.path([3, 3], 4, 4).unwrap_or_default();
        assert_eq!(reverse.last(), Some(&[0, 0]));
    }

    #[test]
    fn test_zero_length_and_out_of_bounds_origin() {
        assert!(Orientation::East.path([0, 0], 0, 4).is_none());
        assert!(Orientation::East.path([4, 0], 1, 4).is_none());
    }

    #[test]
    fn test_labels_are_kebab_case() {
        assert_eq!(Orientation::East.to_string(), "east");
        assert_eq!(Orientation::SouthWest.to_string(), "south-west");
    }
}
