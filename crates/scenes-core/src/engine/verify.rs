//! Outcome verification of a scene task.
//!
//! The expected transcript length is derived from the scene input. The
//! constants below mirror the commands emitted by [`super::scene`] plus the
//! lines written by the engine setup (a leading blank line and the
//! `Processors` command) and by `close` (`Exit`). Changing a scene builder
//! requires changing the matching formula; the tests in this module build real
//! scenes against both.

use super::transcript::TranscriptStats;
use crate::core::models::contact::SymmetryContacts;
use crate::core::models::ion::IonSites;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Blank line, `Processors`, `LoadPDB`, `Style`, `ColorAll`.
pub const SYMMETRY_HEAD_LINES: usize = 5;
/// `ColorBG`, `StickRadius`, `BallStickRadius`, `NiceOriAll`, `SaveSce`, `Exit`.
pub const SYMMETRY_TAIL_LINES: usize = 6;
/// Blank line, `Processors`, `LoadPDB`, `Style`, `HideAll`, `LabelPar`.
pub const ION_HEAD_LINES: usize = 6;
/// Background, radii, three element colours, fog, HUD, label, centre, zoom,
/// `SaveSce` and `Exit`.
pub const ION_TAIL_LINES: usize = 13;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Cannot read YASARA log {path}: {source}", path = path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("engine did not terminate cleanly")]
    NotTerminated,
    #[error("expected {expected} log lines, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// Expected transcript lines for a symmetry contact scene.
pub fn expected_symmetry_lines(contacts: &SymmetryContacts) -> usize {
    let body: usize = contacts
        .values()
        .map(|&count| if count > 0 { 3 } else { 2 })
        .sum();
    SYMMETRY_HEAD_LINES + body + SYMMETRY_TAIL_LINES
}

/// Expected transcript lines for an ion site scene.
pub fn expected_ion_lines(sites: &IonSites) -> usize {
    let body: usize = sites
        .iter()
        .map(|site| 2 + 2 * site.coordinating_residues.len())
        .sum();
    ION_HEAD_LINES + body + ION_TAIL_LINES
}

/// Checks the transcript at `path` for a terminating `Exit` and for exactly
/// `expected` command lines once warning blocks are removed.
pub fn verify(path: &Path, expected: usize) -> Result<TranscriptStats, VerifyError> {
    let stats = TranscriptStats::read(path).map_err(|source| VerifyError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        total_lines = stats.total_lines,
        warning_lines = ?stats.warning_block_lines,
        "Scanned {}",
        path.display()
    );

    if !stats.has_terminator {
        return Err(VerifyError::NotTerminated);
    }
    let found = stats.command_lines();
    if found != expected {
        return Err(VerifyError::CountMismatch { expected, found });
    }
    Ok(stats)
}
