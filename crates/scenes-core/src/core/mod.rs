//! # Core Module
//!
//! Data models and file formats shared by every scene task.
//!
//! - **Models** ([`models`]) - Residue identifiers, symmetry contacts and ion sites
//! - **File I/O** ([`io`]) - Readers for bzip2-compressed WHAT IF list files
//! - **Selections** ([`selection`]) - YASARA object-selection strings

pub mod io;
pub mod models;
pub mod selection;
