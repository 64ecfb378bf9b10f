use super::binding::{EngineSetup, SceneEngine};
use super::command::Command;
use super::error::EngineError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{self, Output};
use tracing::{debug, warn};

/// Drives YASARA as a separate text-mode process.
///
/// Commands are collected into a macro file that YASARA runs when the session
/// is closed. The macro ends with `Exit`, so a successful exit status means
/// YASARA worked through the whole macro.
#[derive(Debug)]
pub struct YasaraMacroEngine {
    executable: PathBuf,
    macro_path: PathBuf,
    pid: Option<u32>,
    commands: Vec<Command>,
}

impl YasaraMacroEngine {
    pub fn new(executable: impl Into<PathBuf>, macro_path: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            macro_path: macro_path.into(),
            pid: None,
            commands: Vec::new(),
        }
    }

    /// The macro text written on [`SceneEngine::close`].
    pub fn macro_text(&self) -> String {
        self.commands
            .iter()
            .map(|command| format!("{command}\n"))
            .collect()
    }

    fn push(&mut self, command: Command) -> Result<(), EngineError> {
        if self.pid.is_none() {
            return Err(EngineError::NotConfigured);
        }
        self.commands.push(command);
        Ok(())
    }

    fn run(&self, pid: u32) -> Result<Output, EngineError> {
        process::Command::new(&self.executable)
            .arg("-txt")
            .arg(format!("-pid={pid}"))
            .arg(&self.macro_path)
            .output()
            .map_err(|source| EngineError::Spawn {
                path: self.executable.clone(),
                source,
            })
    }
}

impl SceneEngine for YasaraMacroEngine {
    fn configure(&mut self, setup: &EngineSetup) -> Result<(), EngineError> {
        debug!(pid = setup.pid, "Preparing YASARA in text mode");
        self.commands.clear();
        self.pid = Some(setup.pid);
        match &setup.transcript_stem {
            Some(stem) => {
                debug!("Logging YASARA commands to {}.log", stem.display());
                self.push(Command::RecordLog { stem: stem.clone() })?;
            }
            None => self.push(Command::ConsoleOff)?,
        }
        self.push(Command::Processors {
            cpu_threads: setup.cpu_threads,
        })
    }

    fn load_structure(&mut self, path: &Path) -> Result<(), EngineError> {
        self.push(Command::LoadPdb(path.to_path_buf()))
    }

    fn execute(&mut self, command: &Command) -> Result<(), EngineError> {
        self.push(command.clone())
    }

    fn save_scene(&mut self, path: &Path) -> Result<(), EngineError> {
        self.push(Command::SaveSce(path.to_path_buf()))
    }

    fn close(&mut self) -> Result<bool, EngineError> {
        let Some(pid) = self.pid.take() else {
            return Ok(true);
        };
        self.commands.push(Command::Exit);

        fs::write(&self.macro_path, self.macro_text()).map_err(|source| EngineError::Io {
            path: self.macro_path.clone(),
            source,
        })?;
        debug!("Running YASARA macro {}", self.macro_path.display());

        let output = self.run(pid)?;
        if !output.status.success() {
            warn!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "YASARA did not exit normally"
            );
        }
        Ok(output.status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_collected_into_macro_in_order() {
        let mut engine = YasaraMacroEngine::new("yasara", "scene.mcr");
        engine
            .configure(&EngineSetup {
                pid: 12,
                transcript_stem: Some(PathBuf::from("1crn_yasara")),
                cpu_threads: 1,
            })
            .unwrap();
        engine.load_structure(Path::new("1crn.pdb")).unwrap();
        engine.execute(&Command::HideAll).unwrap();
        engine.save_scene(Path::new("1crn.sce")).unwrap();

        assert_eq!(
            engine.macro_text(),
            "RecordLog 1crn_yasara,Append=No\nProcessors CPUThreads=1\nLoadPDB 1crn.pdb\nHideAll\nSaveSce 1crn.sce\n"
        );
    }

    #[test]
    fn commands_before_configure_are_rejected() {
        let mut engine = YasaraMacroEngine::new("yasara", "scene.mcr");
        assert!(matches!(
            engine.execute(&Command::HideAll),
            Err(EngineError::NotConfigured)
        ));
    }

    #[test]
    fn close_reports_missing_executable_as_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = YasaraMacroEngine::new(
            dir.path().join("no-such-yasara"),
            dir.path().join("scene.mcr"),
        );
        engine
            .configure(&EngineSetup {
                pid: 1,
                transcript_stem: None,
                cpu_threads: 1,
            })
            .unwrap();

        assert!(matches!(engine.close(), Err(EngineError::Spawn { .. })));
        let written = fs::read_to_string(dir.path().join("scene.mcr")).unwrap();
        assert_eq!(written, "Console Off\nProcessors CPUThreads=1\nExit\n");
    }
}
