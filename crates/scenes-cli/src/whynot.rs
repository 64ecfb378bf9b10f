//! The why-not ledger and clean-up of failed scenes.

use crate::cli::Source;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, warn};

/// Database name of a why-not entry, e.g. `REDO_SCENE_SYMM_CON`.
pub fn database_tag(source: Source, whynot_tag: &str) -> String {
    format!("{}_SCENE_{}", source.tag(), whynot_tag)
}

/// Writes a why-not entry explaining why no scene exists for `pdb_id`.
///
/// Returns `false` if the file could not be written; the failure is logged.
pub fn write_whynot(path: &Path, pdb_id: &str, reason: &str, database: &str) -> bool {
    warn!("Writing WHY NOT entry {}", path.display());
    let entry = format!("COMMENT: {reason}\n{database},{pdb_id}\n");
    match fs::write(path, entry) {
        Ok(()) => true,
        Err(e) => {
            error!("Could not write {}: {}", path.display(), e);
            false
        }
    }
}

/// Deletes a scene file if it is present.
///
/// Returns `true` if a file was deleted. A missing file is not an error.
pub fn delete_scene(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Deleted {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            error!("Could not delete {}: {}", path.display(), e);
            Err(e)
        }
    }
}
