//! JSON and plain text export of finished puzzles
//!
//! The JSON payload is self-describing: a `mode` tag, the grid as cells or
//! rows, the placed words with their solution paths, and every dropped word
//! with the reason it was left out.

use crate::io::error::{PuzzleError, Result};
use crate::placement::crossword::Crossword;
use crate::placement::engine::DroppedWord;
use crate::placement::orientation::Orientation;
use crate::placement::wordsearch::WordSearch;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Exported crossword cell
#[derive(Debug, Serialize)]
pub struct CrosswordCellExport {
    /// Whether the cell holds a letter
    pub occupied: bool,
    /// Letter in the cell, if any
    pub letter: Option<char>,
    /// Clue reference shown on the cell, when it starts a word
    pub reference: Option<usize>,
    /// Clue heading for the referenced word
    pub heading: Option<String>,
    /// Clue description for the referenced word
    pub description: Option<String>,
    /// Whether the cell is the first letter of a placed word
    pub is_first_letter: bool,
}

/// Exported crossword clue
#[derive(Debug, Serialize)]
pub struct ClueExport {
    /// Sequential clue number
    pub reference: usize,
    /// Word as placed on the grid
    pub word: String,
    /// Clue heading
    pub heading: String,
    /// Clue description
    pub description: String,
    /// Reading direction, `across` or `down`
    pub direction: String,
}

/// Exported word search entry
#[derive(Debug, Serialize)]
pub struct WordExport {
    /// Word as placed on the grid
    pub word: String,
    /// Compass direction the word reads along
    pub direction: String,
    /// Occupied `[row, col]` cells in reading order
    pub path: Vec<[usize; 2]>,
    /// Spreadsheet-style label per cell
    pub coordinate_labels: Vec<String>,
}

/// Exported record of a word left off the grid
#[derive(Debug, Serialize)]
pub struct DroppedExport {
    /// Word text as supplied
    pub word: String,
    /// Human-readable drop reason
    pub reason: String,
}

/// Complete crossword export payload
#[derive(Debug, Serialize)]
pub struct CrosswordExport {
    /// Payload discriminator, always `crossword`
    pub mode: String,
    /// Side length of the grid
    pub size: usize,
    /// Cells in row-major order
    pub cells: Vec<Vec<CrosswordCellExport>>,
    /// Placed clues in reference order
    pub clues: Vec<ClueExport>,
    /// Words that could not be placed
    pub dropped: Vec<DroppedExport>,
}

/// Complete word search export payload
#[derive(Debug, Serialize)]
pub struct WordSearchExport {
    /// Payload discriminator, always `word-search`
    pub mode: String,
    /// Side length of the grid
    pub size: usize,
    /// Grid letters, one string per row
    pub rows: Vec<String>,
    /// Hidden words with their solution paths
    pub words: Vec<WordExport>,
    /// Words that could not be placed
    pub dropped: Vec<DroppedExport>,
}

/// Crossword clue direction shown to players
const fn crossword_direction(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::South => "down",
        _ => "across",
    }
}

/// Build the serializable crossword payload
pub fn crossword_payload(puzzle: &Crossword) -> CrosswordExport {
    let size = puzzle.size();
    let cells = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let cell = puzzle.cell([row, col]);
                    let letter = cell.and_then(|c| c.letter);
                    let marker = cell.and_then(|c| c.marker.as_ref());

                    CrosswordCellExport {
                        occupied: letter.is_some(),
                        letter,
                        reference: marker.map(|m| m.reference),
                        heading: marker.map(|m| m.heading.clone()),
                        description: marker.map(|m| m.description.clone()),
                        is_first_letter: marker.is_some(),
                    }
                })
                .collect()
        })
        .collect();

    let clues = puzzle
        .placed()
        .iter()
        .map(|clue| ClueExport {
            reference: clue.reference,
            word: clue.word.clone(),
            heading: clue.heading.clone(),
            description: clue.description.clone(),
            direction: crossword_direction(clue.orientation).to_string(),
        })
        .collect();

    CrosswordExport {
        mode: "crossword".to_string(),
        size,
        cells,
        clues,
        dropped: dropped_exports(puzzle.dropped()),
    }
}

/// Build the serializable word search payload
pub fn word_search_payload(puzzle: &WordSearch) -> WordSearchExport {
    let size = puzzle.size();
    let rows = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| puzzle.cell([row, col]).map_or('A', |cell| cell.letter))
                .collect()
        })
        .collect();

    let words = puzzle
        .placed()
        .iter()
        .map(|word| WordExport {
            word: word.word.clone(),
            direction: word.orientation.label().to_string(),
            path: word.path.clone(),
            coordinate_labels: word.coordinate_labels.clone(),
        })
        .collect();

    WordSearchExport {
        mode: "word-search".to_string(),
        size,
        rows,
        words,
        dropped: dropped_exports(puzzle.dropped()),
    }
}

fn dropped_exports(dropped: &[DroppedWord]) -> Vec<DroppedExport> {
    dropped
        .iter()
        .map(|entry| DroppedExport {
            word: entry.word.clone(),
            reason: entry.reason.to_string(),
        })
        .collect()
}

/// Serialize a payload as pretty JSON and write it to disk
///
/// # Errors
///
/// Returns an error if serialization fails, the parent directory cannot be
/// created, or the file cannot be written.
pub fn write_json<T: Serialize>(payload: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(payload).map_err(|e| PuzzleError::ExportEncode {
        path: path.to_path_buf(),
        source: e,
    })?;

    write_text(&json, path)
}

/// Write rendered text to disk, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_text(contents: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| PuzzleError::ExportWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render a crossword as plain text: grid, clue list, and dropped words
pub fn crossword_text(puzzle: &Crossword) -> String {
    let mut out = puzzle.to_string();

    if !puzzle.placed().is_empty() {
        out.push('\n');
        for clue in puzzle.placed() {
            let direction = crossword_direction(clue.orientation);
            out.push_str(&format!("{}. {} ({direction})", clue.reference, clue.word));
            if !clue.heading.is_empty() {
                out.push_str(": ");
                out.push_str(&clue.heading);
            }
            if !clue.description.is_empty() {
                out.push_str(" - ");
                out.push_str(&clue.description);
            }
            out.push('\n');
        }
    }

    push_dropped_lines(&mut out, puzzle.dropped());
    out
}

/// Render a word search as plain text: grid, word list, and dropped words
pub fn word_search_text(puzzle: &WordSearch) -> String {
    let mut out = puzzle.to_string();

    if !puzzle.placed().is_empty() {
        out.push('\n');
        for word in puzzle.placed() {
            let start = word.coordinate_labels.first().map_or("?", String::as_str);
            out.push_str(&format!(
                "{} ({}, from {start})\n",
                word.word, word.orientation
            ));
        }
    }

    push_dropped_lines(&mut out, puzzle.dropped());
    out
}

fn push_dropped_lines(out: &mut String, dropped: &[DroppedWord]) {
    if dropped.is_empty() {
        return;
    }

    out.push('\n');
    for entry in dropped {
        out.push_str(&format!("Dropped {}: {}\n", entry.word, entry.reason));
    }
}
