//! An in-process [`SceneEngine`] that records commands instead of rendering.
//!
//! The transcript it writes follows YASARA's `RecordLog` format: a leading
//! blank line, then every command echoed after a `>` prompt. Failures can be
//! injected to exercise every outcome of a scene task without YASARA.

use super::binding::{EngineSetup, SceneEngine, transcript_path};
use super::command::Command;
use super::error::EngineError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct RecordingEngine {
    configured: bool,
    transcript: Option<PathBuf>,
    lines: Vec<String>,
    issued: Vec<String>,
    executed: usize,
    fail_on: Option<usize>,
    drop_on: Option<usize>,
    warnings: BTreeMap<usize, Vec<String>>,
    unclean_exit: bool,
    drop_exit_record: bool,
    drop_transcript: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the `n`-th display command (1-based).
    pub fn failing_on(mut self, n: usize) -> Self {
        self.fail_on = Some(n);
        self
    }

    /// Accepts the `n`-th display command but leaves it out of the transcript.
    pub fn dropping(mut self, n: usize) -> Self {
        self.drop_on = Some(n);
        self
    }

    /// Writes a warning block into the transcript after the `n`-th display
    /// command.
    pub fn with_warning_after(mut self, n: usize, block: &[&str]) -> Self {
        self.warnings
            .insert(n, block.iter().map(|line| line.to_string()).collect());
        self
    }

    /// Reports an unclean termination from [`SceneEngine::close`].
    pub fn with_unclean_exit(mut self) -> Self {
        self.unclean_exit = true;
        self
    }

    /// Terminates cleanly but never records the `Exit` command.
    pub fn without_exit_record(mut self) -> Self {
        self.drop_exit_record = true;
        self
    }

    /// Never writes the transcript file.
    pub fn without_transcript(mut self) -> Self {
        self.drop_transcript = true;
        self
    }

    /// Every command issued so far, in macro syntax.
    pub fn issued(&self) -> &[String] {
        &self.issued
    }

    pub fn transcript_path(&self) -> Option<&Path> {
        self.transcript.as_deref()
    }

    fn ensure_configured(&self) -> Result<(), EngineError> {
        if self.configured {
            Ok(())
        } else {
            Err(EngineError::NotConfigured)
        }
    }

    fn record(&mut self, command: &Command) {
        self.issued.push(command.to_string());
        if self.transcript.is_some() {
            self.lines.push(format!(">{command}"));
        }
    }
}

impl SceneEngine for RecordingEngine {
    fn configure(&mut self, setup: &EngineSetup) -> Result<(), EngineError> {
        match &setup.transcript_stem {
            Some(stem) => {
                self.transcript = Some(transcript_path(stem));
                self.issued.push(
                    Command::RecordLog {
                        stem: stem.clone(),
                    }
                    .to_string(),
                );
                self.lines.push(String::new());
            }
            None => self.issued.push(Command::ConsoleOff.to_string()),
        }
        self.record(&Command::Processors {
            cpu_threads: setup.cpu_threads,
        });
        self.configured = true;
        Ok(())
    }

    fn load_structure(&mut self, path: &Path) -> Result<(), EngineError> {
        self.ensure_configured()?;
        self.record(&Command::LoadPdb(path.to_path_buf()));
        Ok(())
    }

    fn execute(&mut self, command: &Command) -> Result<(), EngineError> {
        self.ensure_configured()?;
        self.executed += 1;
        if self.fail_on == Some(self.executed) {
            return Err(EngineError::CommandFailed {
                command: command.to_string(),
                reason: "rejected by recording engine".to_string(),
            });
        }
        if self.drop_on == Some(self.executed) {
            self.issued.push(command.to_string());
        } else {
            self.record(command);
        }
        if let Some(block) = self.warnings.get(&self.executed) {
            self.lines.extend(block.iter().cloned());
        }
        Ok(())
    }

    fn save_scene(&mut self, path: &Path) -> Result<(), EngineError> {
        self.ensure_configured()?;
        self.record(&Command::SaveSce(path.to_path_buf()));
        fs::write(path, "% YASARA scene\n").map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn close(&mut self) -> Result<bool, EngineError> {
        if !self.configured {
            return Ok(!self.unclean_exit);
        }
        if self.drop_exit_record {
            self.issued.push(Command::Exit.to_string());
        } else {
            self.record(&Command::Exit);
        }
        if let Some(path) = &self.transcript {
            if !self.drop_transcript {
                let mut text = self.lines.join("\n");
                text.push('\n');
                fs::write(path, text).map_err(|source| EngineError::Io {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        self.configured = false;
        Ok(!self.unclean_exit)
    }
}
