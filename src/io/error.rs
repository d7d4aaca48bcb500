//! Error types for word list handling, validation, and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for puzzle generation and file handling
///
/// Generation itself is best-effort and never fails once a generator is
/// constructed; errors arise from configuration, input files, and export.
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to read a word list from the filesystem
    WordListRead {
        /// Path to the word list file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Word list parsed to zero entries
    WordListEmpty {
        /// Path to the word list file
        path: PathBuf,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to serialize a puzzle payload
    ExportEncode {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Failed to write an export file to disk
    ExportWrite {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListRead { path, source } => {
                write!(f, "Failed to read word list '{}': {source}", path.display())
            }
            Self::WordListEmpty { path } => {
                write!(f, "Word list '{}' contains no words", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ExportEncode { path, source } => {
                write!(
                    f,
                    "Failed to encode puzzle for '{}': {source}",
                    path.display()
                )
            }
            Self::ExportWrite { path, source } => {
                write!(
                    f,
                    "Failed to write puzzle to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListRead { source, .. }
            | Self::ExportWrite { source, .. }
            | Self::FileSystem { source, .. } => Some(source),
            Self::ExportEncode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::WordListRead {
            path: "/tmp/animals.txt".into(),
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    #[test]
    fn test_empty_word_list_has_no_source() {
        let error = PuzzleError::WordListEmpty {
            path: "/tmp/animals.txt".into(),
        };

        assert!(error.source().is_none());
        assert!(error.to_string().contains("animals.txt"));
    }

    #[test]
    fn test_invalid_parameter_formatting() {
        let error = invalid_parameter("grid_size", &99, &"must be between 1 and 64");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'grid_size' = '99': must be between 1 and 64"
        );
    }
}
