//! Word list parsing and loading
//!
//! Word lists are plain text with one word per line. A line may carry clue
//! metadata after `|` separators: `word | heading | description`. Blank
//! lines and `#` comments are skipped, as are lines with an empty word
//! field; a malformed line never rejects the whole file.

use crate::io::configuration::{COMMENT_PREFIX, FIELD_SEPARATOR};
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::word::WordEntry;
use std::fs;
use std::path::Path;

/// Load and parse a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parses to zero entries.
pub fn load(path: &Path) -> Result<Vec<WordEntry>> {
    let contents = fs::read_to_string(path).map_err(|e| PuzzleError::WordListRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries = parse_str(&contents);
    if entries.is_empty() {
        return Err(PuzzleError::WordListEmpty {
            path: path.to_path_buf(),
        });
    }

    Ok(entries)
}

/// Parse word list text into entries, preserving line order
pub fn parse_str(contents: &str) -> Vec<WordEntry> {
    contents.lines().filter_map(parse_line).collect()
}

/// Parse a single line into an entry
fn parse_line(line: &str) -> Option<WordEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return None;
    }

    // Only the first two separators split fields; a description keeps its pipes
    let mut fields = trimmed.splitn(3, FIELD_SEPARATOR).map(str::trim);
    let text = fields.next()?;
    if text.is_empty() {
        return None;
    }

    Some(WordEntry::with_clue(
        text,
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
    ))
}
