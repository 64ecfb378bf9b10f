use super::command::Command;
use super::config::TaskConfig;
use super::error::EngineError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Unattended engine session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSetup {
    pub pid: u32,
    /// Transcript stem; `None` switches the console off instead of recording.
    pub transcript_stem: Option<PathBuf>,
    pub cpu_threads: u32,
}

impl From<&TaskConfig> for EngineSetup {
    fn from(config: &TaskConfig) -> Self {
        Self {
            pid: config.pid,
            transcript_stem: Some(config.transcript_stem.clone()),
            cpu_threads: config.cpu_threads,
        }
    }
}

/// The capabilities a scene task needs from the visualization engine.
pub trait SceneEngine {
    /// Prepares the engine for unattended operation.
    fn configure(&mut self, setup: &EngineSetup) -> Result<(), EngineError>;

    fn load_structure(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Issues one display command.
    fn execute(&mut self, command: &Command) -> Result<(), EngineError>;

    fn save_scene(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Ends the session. `Ok(false)` means the engine did not terminate
    /// cleanly.
    fn close(&mut self) -> Result<bool, EngineError>;
}

/// Path of the transcript the engine writes for a given stem.
pub fn transcript_path(stem: &Path) -> PathBuf {
    let mut path = OsString::from(stem.as_os_str());
    path.push(".log");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_path_appends_log_extension_to_stem() {
        assert_eq!(
            transcript_path(Path::new("/scenes/iod/1abc/1abc_ion-sites_yasara")),
            PathBuf::from("/scenes/iod/1abc/1abc_ion-sites_yasara.log")
        );
        assert_eq!(
            transcript_path(Path::new("run.v2")),
            PathBuf::from("run.v2.log")
        );
    }
}
