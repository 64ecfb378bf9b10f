//! Readers for the fixed-width WHAT IF list formats.
//!
//! Both formats share one reading discipline, provided by the [`traits::ListFile`]
//! trait: bzip2 decompression, a `*END` terminator line and all-or-nothing
//! parsing where the first malformed line aborts the whole file.

pub mod error;
pub(crate) mod fields;
pub mod iod;
pub mod ss2;
pub mod traits;
