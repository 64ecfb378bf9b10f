use std::fmt;

/// Lifecycle of a single scene task.
///
/// The happy path is `Idle -> EngineReady -> SceneBuilt -> EngineClosed ->
/// Verified`. `BuildFailed` and `TeardownFailed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    EngineReady,
    SceneBuilt,
    BuildFailed,
    EngineClosed,
    TeardownFailed,
    Verified { passed: bool },
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::EngineReady => write!(f, "engine ready"),
            Self::SceneBuilt => write!(f, "scene built"),
            Self::BuildFailed => write!(f, "build failed"),
            Self::EngineClosed => write!(f, "engine closed"),
            Self::TeardownFailed => write!(f, "teardown failed"),
            Self::Verified { passed: true } => write!(f, "verified"),
            Self::Verified { passed: false } => write!(f, "verification failed"),
        }
    }
}

/// The pass/fail result of one scene task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeReport {
    pub success: bool,
    pub message: String,
    /// Terminal state the task ended in.
    pub state: TaskState,
}

impl OutcomeReport {
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            state: TaskState::Verified { passed: true },
        }
    }

    pub fn failed(state: TaskState, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            state,
        }
    }
}
