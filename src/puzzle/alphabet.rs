//! Grid alphabet and filler letter pools
//!
//! The grid alphabet is the uppercase ASCII letters. Filler letters for
//! word-search grids are drawn either from the full alphabet or from the set
//! of letters that actually occur in placed words.

use bitvec::prelude::*;
use std::fmt;

/// Letters a grid cell may hold
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Map a character to its grid letter, if it has one
///
/// ASCII letters map to their uppercase form; everything else is outside the
/// grid alphabet and is stripped during normalization.
pub const fn normalize_letter(ch: char) -> Option<char> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_uppercase())
    } else {
        None
    }
}

/// Position of a grid letter within the alphabet
const fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some(letter as usize - 'A' as usize)
    } else {
        None
    }
}

/// Membership set over the grid alphabet
///
/// Tracks which letters occur in a collection of words. Used to build the
/// placed-letters filler pool for word-search grids.
#[derive(Clone, Debug)]
pub struct LetterSet {
    bits: BitVec,
}

impl LetterSet {
    /// Create a set with no letters present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; ALPHABET.len()],
        }
    }

    /// Insert a grid letter
    ///
    /// Characters outside the grid alphabet are ignored.
    pub fn insert(&mut self, letter: char) {
        if let Some(index) = letter_index(letter) {
            self.bits.set(index, true);
        }
    }

    /// Test letter membership
    pub fn contains(&self, letter: char) -> bool {
        letter_index(letter).is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no letters are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count letters in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract the letters as a vector, in alphabet order
    pub fn to_vec(&self) -> Vec<char> {
        self.bits
            .iter_ones()
            .filter_map(|index| ALPHABET.get(index).copied())
            .collect()
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({} letters: {:?})", self.len(), self.to_vec())
    }
}

/// Source of filler letters for unoccupied word-search cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillerPool {
    /// Draw from the full grid alphabet
    #[default]
    FullAlphabet,
    /// Draw only from letters occurring in placed words
    PlacedLetters,
}

impl FillerPool {
    /// Resolve the pool into concrete letters
    ///
    /// The placed-letters pool falls back to the full alphabet when nothing
    /// was placed, so a filler pass can always cover the grid.
    pub fn resolve(self, placed_letters: &LetterSet) -> Vec<char> {
        match self {
            Self::FullAlphabet => ALPHABET.to_vec(),
            Self::PlacedLetters => {
                if placed_letters.is_empty() {
                    ALPHABET.to_vec()
                } else {
                    placed_letters.to_vec()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('7'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
    }

    #[test]
    fn test_letter_set_membership() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());

        set.insert('C');
        set.insert('A');
        set.insert('T');
        set.insert('a');

        assert_eq!(set.len(), 3);
        assert!(set.contains('A'));
        assert!(set.contains('T'));
        assert!(!set.contains('B'));
        assert_eq!(set.to_vec(), vec!['A', 'C', 'T']);
    }

    #[test]
    fn test_placed_letters_pool_falls_back_when_empty() {
        let set = LetterSet::new();
        assert_eq!(FillerPool::PlacedLetters.resolve(&set), ALPHABET.to_vec());

        let mut set = LetterSet::new();
        set.insert('X');
        assert_eq!(FillerPool::PlacedLetters.resolve(&set), vec!['X']);
    }
}
