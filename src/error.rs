//! Error types for the gestos training pipeline

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stages in execution order.
///
/// Every failure surfaced by [`TrainingPipeline::run`](crate::pipeline::TrainingPipeline::run)
/// is tagged with the stage that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ArchiveStaging,
    ConfigDiscovery,
    ConfigMaterialization,
    TrainingInvocation,
    ArtifactValidation,
    ArtifactPlacement,
    Cleanup,
    ResultAssembly,
}

impl Stage {
    /// Human-readable stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ArchiveStaging => "archive staging",
            Stage::ConfigDiscovery => "config discovery",
            Stage::ConfigMaterialization => "config materialization",
            Stage::TrainingInvocation => "training invocation",
            Stage::ArtifactValidation => "artifact validation",
            Stage::ArtifactPlacement => "artifact placement",
            Stage::Cleanup => "cleanup",
            Stage::ResultAssembly => "result assembly",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("required input not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("malformed configuration {}: {reason}", .path.display())]
    MalformedConfig { path: PathBuf, reason: String },

    #[error("training process failed ({}): {stderr}", exit_desc(.code))]
    TrainingFailed { code: Option<i32>, stderr: String },

    #[error("trained weights not found at {}", .path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("training process exceeded the {limit_secs}s time limit")]
    Timeout { limit_secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn exit_desc(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

/// A pipeline failure tagged with the stage that raised it.
///
/// Stages perform no local recovery; the first error aborts the run and
/// surfaces to the caller wrapped in this type.
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

impl StageError {
    pub fn new(stage: Stage, source: Error) -> Self {
        Self { stage, source }
    }
}
