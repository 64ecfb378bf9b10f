use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    Ion,
    Symm,
}

impl SceneMode {
    /// Directory under the scenes root, named after the WHAT IF list type.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ion => "iod",
            Self::Symm => "ss2",
        }
    }
}

/// Files produced for one structure and scene mode, all living in
/// `<root>/<mode key>/<pdb id>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: PathBuf,
    pub scene: PathBuf,
    /// YASARA appends `.log` to this stem.
    pub transcript_stem: PathBuf,
    pub macro_file: PathBuf,
    pub program_log: PathBuf,
    pub whynot: PathBuf,
}

impl OutputLayout {
    pub fn new(root: &Path, mode: SceneMode, pdb_id: &str, name: &str) -> Self {
        let dir = root.join(mode.key()).join(pdb_id);
        let base = format!("{pdb_id}_{name}");
        Self {
            scene: dir.join(format!("{base}.sce")),
            transcript_stem: dir.join(format!("{base}_yasara")),
            macro_file: dir.join(format!("{base}_yasara.mcr")),
            program_log: dir.join(format!("{base}.log")),
            whynot: dir.join(format!("{base}.whynot")),
            dir,
        }
    }

    /// Creates the output directory; an existing directory is fine.
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }
}
