use crate::error::{CliError, Result};
use crate::layout::SceneMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use yas_scenes::engine::config::DEFAULT_CPU_THREADS;

const DEFAULT_ION_NAME: &str = "ion-sites";
const DEFAULT_ION_WHYNOT_TAG: &str = "ION_SITE";
const DEFAULT_SYMM_NAME: &str = "sym-contacts";
const DEFAULT_SYMM_WHYNOT_TAG: &str = "SYMM_CON";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSceneName {
    name: Option<String>,
    whynot_tag: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialScenes {
    ion: Option<PartialSceneName>,
    symm: Option<PartialSceneName>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialSettings {
    scenes_root: Option<PathBuf>,
    yasara_executable: Option<PathBuf>,
    cpu_threads: Option<u32>,
    scenes: Option<PartialScenes>,
}

/// File-name suffix and why-not database tag of one scene mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneName {
    pub name: String,
    pub whynot_tag: String,
}

impl SceneName {
    fn merge(partial: Option<PartialSceneName>, name: &str, whynot_tag: &str) -> Self {
        let partial = partial.unwrap_or_default();
        Self {
            name: partial.name.unwrap_or_else(|| name.to_string()),
            whynot_tag: partial.whynot_tag.unwrap_or_else(|| whynot_tag.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub scenes_root: PathBuf,
    pub yasara_executable: PathBuf,
    pub cpu_threads: u32,
    pub ion: SceneName,
    pub symm: SceneName,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        PartialSettings::from_file(path)?.resolve()
    }

    pub fn scene(&self, mode: SceneMode) -> &SceneName {
        match mode {
            SceneMode::Ion => &self.ion,
            SceneMode::Symm => &self.symm,
        }
    }
}

impl PartialSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading settings from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Please provide the YASARA scenes settings in {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn resolve(self) -> Result<Settings> {
        let scenes = self.scenes.unwrap_or_default();
        Ok(Settings {
            scenes_root: self
                .scenes_root
                .ok_or_else(|| CliError::Config("`scenes-root` is required.".to_string()))?,
            yasara_executable: self.yasara_executable.ok_or_else(|| {
                CliError::Config("`yasara-executable` is required.".to_string())
            })?,
            cpu_threads: self.cpu_threads.unwrap_or(DEFAULT_CPU_THREADS),
            ion: SceneName::merge(scenes.ion, DEFAULT_ION_NAME, DEFAULT_ION_WHYNOT_TAG),
            symm: SceneName::merge(scenes.symm, DEFAULT_SYMM_NAME, DEFAULT_SYMM_WHYNOT_TAG),
        })
    }
}
