//! Command-line interface for batch generating puzzles from word list files

use crate::io::configuration::{
    CROSSWORD_TRIAL_BUDGET, DEFAULT_GRID_SIZE, OUTPUT_SUFFIX, SUPPORTED_GRID_SIZES,
    WORD_LIST_EXTENSION, word_search_trial_budget,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{
    crossword_payload, crossword_text, word_search_payload, word_search_text, write_json,
    write_text,
};
use crate::io::progress::ProgressManager;
use crate::io::wordlist;
use crate::placement::crossword::{CrosswordConfig, CrosswordGenerator};
use crate::placement::wordsearch::{WordSearchConfig, WordSearchGenerator};
use crate::puzzle::alphabet::FillerPool;
use crate::puzzle::word::WordEntry;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};

/// Puzzle flavor to generate
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Across and down words with sequential clue references
    Crossword,
    /// All eight directions with filler letters
    WordSearch,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Crossword => "crossword",
            Self::WordSearch => "word-search",
        })
    }
}

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(
    author,
    version,
    about = "Generate crossword and word search puzzles from word lists"
)]
/// Command-line arguments for the puzzle generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input word list file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Puzzle flavor to generate
    #[arg(short, long, value_enum, default_value_t = Mode::WordSearch)]
    pub mode: Mode,

    /// Grid side length
    #[arg(short = 'g', long = "size", default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Random seed for reproducible puzzles
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the per-word trial budget
    #[arg(short, long)]
    pub trials: Option<usize>,

    /// Draw filler letters from the placed words instead of the full alphabet
    #[arg(short, long)]
    pub letters_from_words: bool,

    /// Also write a plain text rendering next to the JSON
    #[arg(long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Per-word trial budget, honoring the override flag
    fn trial_budget(&self) -> usize {
        self.trials.unwrap_or_else(|| match self.mode {
            Mode::Crossword => CROSSWORD_TRIAL_BUDGET,
            Mode::WordSearch => word_search_trial_budget(self.grid_size),
        })
    }

    /// Filler letter pool selected by the flags
    const fn filler_pool(&self) -> FillerPool {
        if self.letters_from_words {
            FillerPool::PlacedLetters
        } else {
            FillerPool::FullAlphabet
        }
    }
}

/// Orchestrates batch processing of word lists with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process word lists according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is unsupported, the target is not
    /// usable, or a word list fails to load or export.
    pub fn process(&mut self) -> Result<()> {
        self.validate_grid_size()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate_grid_size(&self) -> Result<()> {
        if SUPPORTED_GRID_SIZES.contains(&self.cli.grid_size) {
            return Ok(());
        }

        Err(invalid_parameter(
            "size",
            &self.cli.grid_size,
            &format!("supported grid sizes are {SUPPORTED_GRID_SIZES:?}"),
        ))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_word_list(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &format!("target file must have a .{WORD_LIST_EXTENSION} extension"),
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_word_list(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a word list file or directory",
            ))
        }
    }

    fn is_word_list(path: &Path) -> bool {
        if path.extension().and_then(|s| s.to_str()) != Some(WORD_LIST_EXTENSION) {
            return false;
        }

        // Text renderings from earlier runs also carry .txt; never re-ingest them
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        !stem.ends_with(OUTPUT_SUFFIX)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path, "json");
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let entries = wordlist::load(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, entries.len());
        }

        let placed = match self.cli.mode {
            Mode::Crossword => self.generate_crossword(input_path, &entries)?,
            Mode::WordSearch => self.generate_word_search(input_path, &entries)?,
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, placed, entries.len());
        }

        Ok(())
    }

    fn generate_crossword(&self, input_path: &Path, entries: &[WordEntry]) -> Result<usize> {
        let config = CrosswordConfig {
            grid_size: self.cli.grid_size,
            trial_budget: self.cli.trial_budget(),
            seed: self.cli.seed,
        };
        let puzzle = CrosswordGenerator::new(config)?.generate(entries);

        write_json(
            &crossword_payload(&puzzle),
            &Self::output_path(input_path, "json"),
        )?;

        if self.cli.text {
            write_text(
                &crossword_text(&puzzle),
                &Self::output_path(input_path, WORD_LIST_EXTENSION),
            )?;
        }

        Ok(puzzle.placed().len())
    }

    fn generate_word_search(&self, input_path: &Path, entries: &[WordEntry]) -> Result<usize> {
        let config = WordSearchConfig {
            grid_size: self.cli.grid_size,
            trial_budget: self.cli.trial_budget(),
            seed: self.cli.seed,
            filler: self.cli.filler_pool(),
        };
        let puzzle = WordSearchGenerator::new(config)?.generate(entries);

        write_json(
            &word_search_payload(&puzzle),
            &Self::output_path(input_path, "json"),
        )?;

        if self.cli.text {
            write_text(
                &word_search_text(&puzzle),
                &Self::output_path(input_path, WORD_LIST_EXTENSION),
            )?;
        }

        Ok(puzzle.placed().len())
    }

    fn output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.{extension}", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
