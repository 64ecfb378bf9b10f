pub mod ion;
pub mod symm;

use crate::cli::{Cli, Source};
use crate::error::{CliError, Result};
use crate::layout::OutputLayout;
use crate::settings::{SceneName, Settings};
use crate::utils::progress::CliProgressHandler;
use crate::whynot;
use std::path::Path;
use tracing::{error, info, warn};
use yas_scenes::engine::binding::SceneEngine;
use yas_scenes::engine::config::TaskConfigBuilder;
use yas_scenes::engine::progress::ProgressReporter;
use yas_scenes::engine::scene::SceneInput;
use yas_scenes::engine::state::OutcomeReport;
use yas_scenes::engine::yasara::YasaraMacroEngine;
use yas_scenes::workflows;

/// One structure and scene mode, resolved from arguments and settings.
pub struct SceneTask<'a> {
    pub pid: u32,
    pub pdb_id: &'a str,
    pub source: Source,
    pub pdb_file_path: &'a Path,
    pub list_file_path: &'a Path,
    pub scene: &'a SceneName,
    pub layout: &'a OutputLayout,
    pub cpu_threads: u32,
}

impl<'a> SceneTask<'a> {
    pub fn new(
        cli: &'a Cli,
        list_file_path: &'a Path,
        settings: &'a Settings,
        layout: &'a OutputLayout,
    ) -> Self {
        Self {
            pid: cli.ypid,
            pdb_id: &cli.pdb_id,
            source: cli.source,
            pdb_file_path: &cli.pdb_file_path,
            list_file_path,
            scene: settings.scene(cli.command.mode()),
            layout,
            cpu_threads: settings.cpu_threads,
        }
    }
}

/// Runs the scene task with YASARA and handles its outcome.
pub fn run_with_yasara(
    task: &SceneTask,
    input: SceneInput<'_>,
    settings: &Settings,
    quiet: bool,
) -> Result<OutcomeReport> {
    let mut engine = YasaraMacroEngine::new(&settings.yasara_executable, &task.layout.macro_file);
    let handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    run_scene(&mut engine, task, input, &reporter)
}

/// Runs the scene task and, on failure, removes the scene and writes the
/// why-not entry.
///
/// A failed scene is a normal outcome; only clean-up errors are returned.
pub fn run_scene<E: SceneEngine + ?Sized>(
    engine: &mut E,
    task: &SceneTask,
    input: SceneInput<'_>,
    reporter: &ProgressReporter,
) -> Result<OutcomeReport> {
    let config = TaskConfigBuilder::new()
        .pid(task.pid)
        .structure_path(task.pdb_file_path)
        .scene_path(&task.layout.scene)
        .transcript_stem(&task.layout.transcript_stem)
        .cpu_threads(task.cpu_threads)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    info!(
        "Will try to create {} YASARA scene {} from {} and {} for PDB ID {}",
        input.name(),
        task.layout.scene.display(),
        task.pdb_file_path.display(),
        task.list_file_path.display(),
        task.pdb_id
    );
    let report = workflows::scene::run(engine, &config, input, reporter);

    if report.success {
        info!("{}: {}", task.pdb_id, report.message);
    } else {
        error!("{}: {}", task.pdb_id, report.message);
        whynot::delete_scene(&task.layout.scene)?;
        let database = whynot::database_tag(task.source, &task.scene.whynot_tag);
        if !whynot::write_whynot(&task.layout.whynot, task.pdb_id, &report.message, &database) {
            warn!(
                "{}: no WHY NOT entry recorded for failed scene {}",
                task.pdb_id,
                task.scene.name
            );
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SceneMode;
    use std::fs;
    use std::path::PathBuf;
    use yas_scenes::core::models::contact::SymmetryContacts;
    use yas_scenes::engine::recording::RecordingEngine;

    struct Fixture {
        _root: tempfile::TempDir,
        layout: OutputLayout,
        scene: SceneName,
        pdb: PathBuf,
        contacts: SymmetryContacts,
    }

    fn fixture() -> Fixture {
        let root = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(root.path(), SceneMode::Symm, "1crn", "sym-contacts");
        layout.ensure_dir().unwrap();
        let pdb = root.path().join("1crn.pdb");
        fs::write(&pdb, "ATOM\n").unwrap();
        Fixture {
            _root: root,
            layout,
            scene: SceneName {
                name: "sym-contacts".to_string(),
                whynot_tag: "SYMM_CON".to_string(),
            },
            pdb,
            contacts: [("1 mol A".to_string(), 3), ("2 mol A".to_string(), 0)]
                .into_iter()
                .collect(),
        }
    }

    fn task(fixture: &Fixture) -> SceneTask<'_> {
        SceneTask {
            pid: 5,
            pdb_id: "1crn",
            source: Source::Pdb,
            pdb_file_path: &fixture.pdb,
            list_file_path: Path::new("1crn.ss2.bz2"),
            scene: &fixture.scene,
            layout: &fixture.layout,
            cpu_threads: 1,
        }
    }

    #[test]
    fn successful_scene_keeps_scene_and_writes_no_whynot() {
        let fixture = fixture();
        let mut engine = RecordingEngine::new();
        let report = run_scene(
            &mut engine,
            &task(&fixture),
            SceneInput::Symmetry(&fixture.contacts),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(report.success);
        assert!(fixture.layout.scene.exists());
        assert!(!fixture.layout.whynot.exists());
        assert!(
            fixture
                .layout
                .dir
                .join("1crn_sym-contacts_yasara.log")
                .exists()
        );
    }

    #[test]
    fn failed_verification_deletes_scene_and_writes_whynot() {
        let fixture = fixture();
        let mut engine = RecordingEngine::new().dropping(1);
        let report = run_scene(
            &mut engine,
            &task(&fixture),
            SceneInput::Symmetry(&fixture.contacts),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(!report.success);
        assert!(!fixture.layout.scene.exists());
        let entry = fs::read_to_string(&fixture.layout.whynot).unwrap();
        assert_eq!(
            entry,
            format!("COMMENT: {}\nPDB_SCENE_SYMM_CON,1crn\n", report.message)
        );
    }

    #[test]
    fn build_failure_writes_whynot_with_generic_reason() {
        let fixture = fixture();
        let mut engine = RecordingEngine::new().failing_on(1);
        run_scene(
            &mut engine,
            &task(&fixture),
            SceneInput::Symmetry(&fixture.contacts),
            &ProgressReporter::new(),
        )
        .unwrap();

        let entry = fs::read_to_string(&fixture.layout.whynot).unwrap();
        assert!(entry.starts_with("COMMENT: Error creating YASARA scene\n"));
    }

    #[test]
    fn unwritable_whynot_still_returns_failed_report() {
        let fixture = fixture();
        fs::remove_dir_all(&fixture.layout.dir).unwrap();
        let mut engine = RecordingEngine::new().failing_on(1);
        let report = run_scene(
            &mut engine,
            &task(&fixture),
            SceneInput::Symmetry(&fixture.contacts),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(!report.success);
        assert!(!fixture.layout.whynot.exists());
    }
}
