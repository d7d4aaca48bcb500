//! Word entries and placement normalization
//!
//! Input words carry opaque metadata (a heading and description for crossword
//! clues; empty strings otherwise). Placement operates on the normalized form:
//! uppercase grid letters with everything else stripped.

use crate::puzzle::alphabet::normalize_letter;
use std::fmt;

/// An input word with its display metadata
///
/// The entry text is kept verbatim for reporting; only the normalized form
/// is placed on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    /// Word text as supplied
    pub text: String,
    /// Clue heading (crossword mode); empty when unused
    pub heading: String,
    /// Clue description (crossword mode); empty when unused
    pub description: String,
}

impl WordEntry {
    /// Create an entry with no clue metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading: String::new(),
            description: String::new(),
        }
    }

    /// Create an entry with clue metadata
    pub fn with_clue(
        text: impl Into<String>,
        heading: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            heading: heading.into(),
            description: description.into(),
        }
    }
}

/// A word reduced to its grid letters
///
/// May be empty when the source text contains no alphabet characters; such
/// words are dropped before any trial is attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedWord {
    letters: Vec<char>,
}

impl NormalizedWord {
    /// Normalize source text into grid letters
    pub fn from_text(text: &str) -> Self {
        Self {
            letters: text.chars().filter_map(normalize_letter).collect(),
        }
    }

    /// Letters in reading order
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    pub const fn len(&self) -> usize {
        self.letters.len()
    }

    /// Test whether normalization stripped every character
    pub const fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
