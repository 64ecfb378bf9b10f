use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListFileError {
    #[error("Problem reading {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Read(#[from] io::Error),
    #[error("Format error on line {line}: {kind}")]
    Format { line: usize, kind: FormatErrorKind },
}

impl ListFileError {
    /// Attaches the file path to stream-level I/O failures.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Read(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    #[error("Line contains non-ASCII characters")]
    NonAscii,
    #[error("Line is too short for a {record} record (must be at least {min} chars, found {found})")]
    LineTooShort {
        record: &'static str,
        min: usize,
        found: usize,
    },
    #[error("Unexpected {record} line format")]
    PatternMismatch { record: &'static str },
    #[error("{field} in columns {columns} should be an integer (value: '{value}')")]
    InvalidInt {
        field: &'static str,
        columns: String,
        value: String,
    },
    #[error(
        "{field} in columns {columns} should be a decimal with 3 fraction digits (value: '{value}')"
    )]
    InvalidDecimal {
        field: &'static str,
        columns: String,
        value: String,
    },
}
