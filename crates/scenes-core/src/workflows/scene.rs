use crate::engine::binding::{EngineSetup, SceneEngine, transcript_path};
use crate::engine::config::TaskConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scene::{self, SceneInput};
use crate::engine::state::{OutcomeReport, TaskState};
use crate::engine::verify::{self, VerifyError};
use tracing::{debug, error, info, instrument, warn};

pub const MSG_SCENE_CREATED: &str = "Scene created";
pub const MSG_BUILD_FAILED: &str = "Error creating YASARA scene";
pub const MSG_TEARDOWN_FAILED: &str = "Error terminating YASARA";

/// Runs one scene task: configure the engine, build the scene, close the
/// engine whatever happened, then verify the transcript.
///
/// Build failures take precedence over teardown failures, which take
/// precedence over verification failures.
#[instrument(skip_all, name = "scene_workflow", fields(scene = input.name()))]
pub fn run<E: SceneEngine + ?Sized>(
    engine: &mut E,
    config: &TaskConfig,
    input: SceneInput<'_>,
    reporter: &ProgressReporter,
) -> OutcomeReport {
    enter(reporter, TaskState::Idle);

    // === Phase 1: Engine setup and scene construction ===
    reporter.report(Progress::PhaseStart {
        name: "Building scene",
    });
    info!(
        records = input.record_count(),
        "Building {} scene {}",
        input.name(),
        config.scene_path.display()
    );
    let built = build(engine, config, &input, reporter);
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Teardown ===
    reporter.report(Progress::PhaseStart {
        name: "Closing engine",
    });
    let closed = engine.close();
    reporter.report(Progress::PhaseFinish);

    if let Err(e) = built {
        error!("Scene {} could not be created: {}", config.scene_path.display(), e);
        if !matches!(closed, Ok(true)) {
            warn!("YASARA did not terminate cleanly after the failed build");
        }
        return OutcomeReport::failed(TaskState::BuildFailed, MSG_BUILD_FAILED);
    }

    match closed {
        Ok(true) => enter(reporter, TaskState::EngineClosed),
        Ok(false) => return teardown_failed(reporter, None),
        Err(e) => return teardown_failed(reporter, Some(e)),
    }

    // === Phase 3: Verification ===
    let transcript = transcript_path(&config.transcript_stem);
    let expected = input.expected_transcript_lines();
    match verify::verify(&transcript, expected) {
        Ok(stats) => {
            debug!(
                lines = stats.total_lines,
                expected, "YASARA log has the expected number of lines"
            );
            enter(reporter, TaskState::Verified { passed: true });
            OutcomeReport::passed(MSG_SCENE_CREATED)
        }
        Err(e) => {
            error!("Verification of {} failed: {}", transcript.display(), e);
            enter(reporter, TaskState::Verified { passed: false });
            OutcomeReport::failed(TaskState::Verified { passed: false }, verify_message(&e))
        }
    }
}

fn build<E: SceneEngine + ?Sized>(
    engine: &mut E,
    config: &TaskConfig,
    input: &SceneInput<'_>,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    let result = engine
        .configure(&EngineSetup::from(config))
        .inspect(|_| enter(reporter, TaskState::EngineReady))
        .and_then(|()| {
            scene::build(
                engine,
                input,
                &config.structure_path,
                &config.scene_path,
                reporter,
            )
        });
    enter(
        reporter,
        if result.is_ok() {
            TaskState::SceneBuilt
        } else {
            TaskState::BuildFailed
        },
    );
    result
}

fn teardown_failed(reporter: &ProgressReporter, cause: Option<EngineError>) -> OutcomeReport {
    match cause {
        Some(e) => error!("Closing YASARA failed: {}", e),
        None => error!("YASARA did not terminate cleanly"),
    }
    enter(reporter, TaskState::TeardownFailed);
    OutcomeReport::failed(TaskState::TeardownFailed, MSG_TEARDOWN_FAILED)
}

fn verify_message(error: &VerifyError) -> String {
    match error {
        VerifyError::NotTerminated => {
            format!("{MSG_TEARDOWN_FAILED}: no Exit statement in YASARA log")
        }
        VerifyError::CountMismatch { .. } => {
            format!("{MSG_BUILD_FAILED}: some commands could not be executed ({error})")
        }
        VerifyError::Unreadable { .. } => format!("{MSG_BUILD_FAILED}: {error}"),
    }
}

fn enter(reporter: &ProgressReporter, state: TaskState) {
    debug!(%state, "Scene task state changed");
    reporter.report(Progress::StateChanged(state));
}
