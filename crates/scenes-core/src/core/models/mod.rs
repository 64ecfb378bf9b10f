//! # Core Models Module
//!
//! Typed records read from WHAT IF list files and the aggregated structures
//! the scene builders consume.
//!
//! ## Key Components
//!
//! - [`residue`] - PDB residue identity (number, insertion code, chain)
//! - [`contact`] - Symmetry contact records and the per-residue contact map
//! - [`ion`] - Ion coordination records, ligands and ion sites

pub mod contact;
pub mod ion;
pub mod residue;
