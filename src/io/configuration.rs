//! Placement constants and runtime configuration defaults

// Trial budgets for the bounded random placement loop
/// Trials per word in crossword mode
pub const CROSSWORD_TRIAL_BUDGET: usize = 200;
/// Trials per grid cell in word search mode
pub const WORD_SEARCH_TRIALS_PER_CELL: usize = 8;

/// Word search trial budget, scaled to grid area
pub const fn word_search_trial_budget(grid_size: usize) -> usize {
    grid_size * grid_size * WORD_SEARCH_TRIALS_PER_CELL
}

// Grid dimensions offered by the command line interface
/// Grid sizes accepted by the command line interface
pub const SUPPORTED_GRID_SIZES: [usize; 5] = [4, 6, 8, 10, 12];
/// Default grid side length
pub const DEFAULT_GRID_SIZE: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 64;

// Word list format
/// Extension word list files must carry
pub const WORD_LIST_EXTENSION: &str = "txt";
/// Lines starting with this character are comments
pub const COMMENT_PREFIX: char = '#';
/// Separator between word, heading, and description fields
pub const FIELD_SEPARATOR: char = '|';

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_puzzle";
