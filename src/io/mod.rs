//! File handling and command line plumbing
//!
//! This module contains everything between the generators and the outside
//! world:
//! - Word list parsing and loading
//! - JSON and plain text export
//! - Command-line interface and batch processing
//! - Progress display and error types

/// Command-line interface and batch file processing
pub mod cli;
/// Placement constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// JSON and plain text export of finished puzzles
pub mod export;
/// Multi-file progress tracking
pub mod progress;
/// Word list parsing and loading
pub mod wordlist;
