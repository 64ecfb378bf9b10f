use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CPU_THREADS: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Everything one scene task needs besides the parsed list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfig {
    /// Engine process identifier, unique among concurrently running tasks.
    pub pid: u32,
    pub structure_path: PathBuf,
    pub scene_path: PathBuf,
    /// Transcript location without the `.log` extension the engine appends.
    pub transcript_stem: PathBuf,
    pub cpu_threads: u32,
}

#[derive(Default)]
pub struct TaskConfigBuilder {
    pid: Option<u32>,
    structure_path: Option<PathBuf>,
    scene_path: Option<PathBuf>,
    transcript_stem: Option<PathBuf>,
    cpu_threads: Option<u32>,
}

impl TaskConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }
    pub fn structure_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.structure_path = Some(path.into());
        self
    }
    pub fn scene_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = Some(path.into());
        self
    }
    pub fn transcript_stem(mut self, stem: impl Into<PathBuf>) -> Self {
        self.transcript_stem = Some(stem.into());
        self
    }
    pub fn cpu_threads(mut self, threads: u32) -> Self {
        self.cpu_threads = Some(threads);
        self
    }

    pub fn build(self) -> Result<TaskConfig, ConfigError> {
        let cpu_threads = self.cpu_threads.unwrap_or(DEFAULT_CPU_THREADS);
        if cpu_threads == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "cpu_threads",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(TaskConfig {
            pid: self.pid.ok_or(ConfigError::MissingParameter("pid"))?,
            structure_path: self
                .structure_path
                .ok_or(ConfigError::MissingParameter("structure_path"))?,
            scene_path: self
                .scene_path
                .ok_or(ConfigError::MissingParameter("scene_path"))?,
            transcript_stem: self
                .transcript_stem
                .ok_or(ConfigError::MissingParameter("transcript_stem"))?,
            cpu_threads,
        })
    }
}
