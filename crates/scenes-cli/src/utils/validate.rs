use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The file {0} does not exist!")]
    Missing(String),

    #[error("The file {0} is empty!")]
    Empty(String),

    #[error("Not a valid PDB ID: {0} !")]
    InvalidPdbId(String),
}

/// Accepts a path to an existing, non-empty regular file.
pub fn existing_file(arg: &str) -> Result<PathBuf, ValidationError> {
    let path = PathBuf::from(arg);
    match fs::metadata(&path) {
        Ok(meta) if !meta.is_file() => Err(ValidationError::Missing(arg.to_string())),
        Ok(meta) if meta.len() == 0 => Err(ValidationError::Empty(arg.to_string())),
        Ok(_) => Ok(path),
        Err(_) => Err(ValidationError::Missing(arg.to_string())),
    }
}

/// Accepts a four-character alphanumeric PDB accession code.
pub fn pdb_id(arg: &str) -> Result<String, ValidationError> {
    if arg.len() == 4 && arg.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(arg.to_string())
    } else {
        Err(ValidationError::InvalidPdbId(arg.to_string()))
    }
}
