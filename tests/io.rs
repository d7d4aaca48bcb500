//! Validates word list loading and export payloads end to end

use std::fs;
use wordgrid::io::export::{
    crossword_payload, crossword_text, word_search_payload, word_search_text, write_json,
};
use wordgrid::io::wordlist;
use wordgrid::placement::crossword::{CrosswordConfig, CrosswordGenerator};
use wordgrid::placement::wordsearch::{WordSearchConfig, WordSearchGenerator};
use wordgrid::puzzle::word::WordEntry;

fn sample_entries() -> Vec<WordEntry> {
    vec![
        WordEntry::with_clue("cat", "Pet", "Curls up on keyboards"),
        WordEntry::with_clue("car", "Vehicle", "Four wheels"),
        WordEntry::new("elephantine"),
    ]
}

#[test]
fn test_word_list_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| {
        unreachable!("temp dir creation failed: {e}");
    });
    let path = dir.path().join("animals.txt");
    fs::write(&path, "# pets\ncat | Pet | Curls up\ndog\n").unwrap_or_else(|e| {
        unreachable!("temp file write failed: {e}");
    });

    let entries = wordlist::load(&path).unwrap_or_else(|e| {
        unreachable!("word list loads: {e}");
    });
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.first().map(|e| e.heading.as_str()), Some("Pet"));
}

#[test]
fn test_missing_word_list_reports_the_path() {
    let result = wordlist::load(std::path::Path::new("/nonexistent/animals.txt"));
    let Err(error) = result else {
        unreachable!("missing file cannot load");
    };
    assert!(error.to_string().contains("/nonexistent/animals.txt"));
}

#[test]
fn test_word_list_with_only_comments_is_empty() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| {
        unreachable!("temp dir creation failed: {e}");
    });
    let path = dir.path().join("empty.txt");
    fs::write(&path, "# nothing here\n\n").unwrap_or_else(|e| {
        unreachable!("temp file write failed: {e}");
    });

    assert!(wordlist::load(&path).is_err());
}

#[test]
fn test_crossword_payload_carries_cells_clues_and_drops() {
    let config = CrosswordConfig {
        seed: Some(8),
        ..CrosswordConfig::new(6)
    };
    let puzzle = CrosswordGenerator::new(config)
        .unwrap_or_else(|e| unreachable!("configuration is valid: {e}"))
        .generate(&sample_entries());

    let payload = crossword_payload(&puzzle);
    assert_eq!(payload.mode, "crossword");
    assert_eq!(payload.size, 6);
    assert_eq!(payload.cells.len(), 6);
    assert!(payload.cells.iter().all(|row| row.len() == 6));
    assert_eq!(payload.clues.len(), puzzle.placed().len());

    // The eleven letter word cannot fit a 6x6 grid
    assert!(payload.dropped.iter().any(|d| d.word == "elephantine"));

    for clue in &payload.clues {
        assert!(clue.direction == "across" || clue.direction == "down");
    }
}

#[test]
fn test_crossword_payload_marks_first_letters_only() {
    let config = CrosswordConfig {
        seed: Some(8),
        ..CrosswordConfig::new(6)
    };
    let puzzle = CrosswordGenerator::new(config)
        .unwrap_or_else(|e| unreachable!("configuration is valid: {e}"))
        .generate(&sample_entries());

    let payload = crossword_payload(&puzzle);
    let marked = payload
        .cells
        .iter()
        .flatten()
        .filter(|cell| cell.is_first_letter)
        .count();

    // Crossing words may share a first letter cell, so marked <= placed
    assert!(marked <= puzzle.placed().len());
    for cell in payload.cells.iter().flatten() {
        assert_eq!(cell.is_first_letter, cell.reference.is_some());
        if cell.reference.is_some() {
            assert!(cell.occupied);
        }
    }
}

#[test]
fn test_word_search_payload_rows_match_grid_size() {
    let config = WordSearchConfig {
        seed: Some(4),
        ..WordSearchConfig::new(8)
    };
    let puzzle = WordSearchGenerator::new(config)
        .unwrap_or_else(|e| unreachable!("configuration is valid: {e}"))
        .generate(&sample_entries());

    let payload = word_search_payload(&puzzle);
    assert_eq!(payload.mode, "word-search");
    assert_eq!(payload.rows.len(), 8);
    assert!(payload.rows.iter().all(|row| row.chars().count() == 8));

    for word in &payload.words {
        assert_eq!(word.path.len(), word.coordinate_labels.len());
        assert!(!word.direction.is_empty());
    }
}

#[test]
fn test_write_json_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| {
        unreachable!("temp dir creation failed: {e}");
    });
    let path = dir.path().join("nested/out/puzzle.json");

    let config = WordSearchConfig {
        seed: Some(4),
        ..WordSearchConfig::new(6)
    };
    let puzzle = WordSearchGenerator::new(config)
        .unwrap_or_else(|e| unreachable!("configuration is valid: {e}"))
        .generate(&[WordEntry::new("cat")]);

    write_json(&word_search_payload(&puzzle), &path).unwrap_or_else(|e| {
        unreachable!("export writes: {e}");
    });

    let written = fs::read_to_string(&path).unwrap_or_else(|e| {
        unreachable!("export file reads back: {e}");
    });
    let value: serde_json::Value = serde_json::from_str(&written).unwrap_or_else(|e| {
        unreachable!("export is valid JSON: {e}");
    });
    assert_eq!(value.get("mode").and_then(|v| v.as_str()), Some("word-search"));
    assert!(value.get("rows").is_some());
    assert!(value.get("words").is_some());
    assert!(value.get("dropped").is_some());
}

#[test]
fn test_text_renderings_list_grid_and_words() {
    let crossword_config = CrosswordConfig {
        seed: Some(8),
        ..CrosswordConfig::new(6)
    };
    let crossword = CrosswordGenerator::new(crossword_config)
        .unwrap_or_else(|e| unreachable!("configuration is valid: {e}"))
        .generate(&sample_entries());

    let rendered = crossword_text(&crossword);
    assert!(rendered.lines().count() >= 6);
    for clue in crossword.placed() {
        assert!(rendered.contains(&format!("{}. {}", clue.reference, clue.word)));
    }
    assert!(rendered.contains("Dropped elephantine"));

    let search_config = WordSearchConfig {
        seed: Some(4),
        ..WordSearchConfig::new(8)
    };
    let search = WordSearchGenerator::new(search_config)
        .unwrap_or_else(|e| unreachable!("configuration is valid: {e}"))
        .generate(&sample_entries());

    let rendered = word_search_text(&search);
    for word in search.placed() {
        assert!(rendered.contains(&word.word));
    }
}
