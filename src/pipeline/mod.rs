//! Training pipeline orchestration
//!
//! [`TrainingPipeline::run`] executes a strict linear sequence:
//!
//! 1. Stage the dataset archive into the working directory
//! 2. Discover the class count from the ingestion stage's `data.yaml`
//! 3. Materialize a dataset-specific architecture config
//! 4. Invoke the external trainer and capture its output
//! 5. Validate the expected weights artifact exists
//! 6. Copy the weights into the output directory
//! 7. Clean up intermediate state (best effort)
//! 8. Return the [`TrainingArtifact`]
//!
//! The first failing stage aborts the run; there are no retries and no
//! checkpoint/resume. The working directory is assumed exclusive to this
//! run for its duration.

mod archive;
mod artifact;
mod dataset;
mod invoke;
mod model_config;

pub use artifact::TrainingArtifact;
pub use dataset::DatasetMetadata;
pub use invoke::TrainerOutput;

use crate::config::PipelineSpec;
use crate::error::{Error, Stage, StageError};
use crate::logging::Logger;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One-shot orchestrator for a single training run
pub struct TrainingPipeline {
    spec: PipelineSpec,
    logger: Logger,
    workdir: PathBuf,
}

impl TrainingPipeline {
    pub fn new(spec: PipelineSpec, logger: Logger) -> Self {
        Self {
            spec,
            logger,
            workdir: PathBuf::from("."),
        }
    }

    /// Resolve relative spec paths against `dir` instead of the current
    /// directory.
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }

    /// Run the full pipeline, returning the placed weights artifact.
    pub fn run(&self) -> Result<TrainingArtifact, StageError> {
        let spec = &self.spec;

        let archive_path = self.resolve(&spec.dataset.archive);
        self.logger
            .info(format!("Staging dataset archive {}", archive_path.display()));
        let entries = archive::stage_dataset(&archive_path, &self.workdir)
            .map_err(at(Stage::ArchiveStaging))?;
        self.logger.verbose(format!("  {entries} entries extracted"));

        let metadata_path = self.resolve(&spec.dataset.metadata);
        let metadata =
            dataset::read_metadata(&metadata_path).map_err(at(Stage::ConfigDiscovery))?;
        self.logger
            .info(format!("Training {} gesture classes", metadata.class_count));

        let trainer_dir = self.resolve(&spec.trainer.dir);
        let derived_cfg = model_config::derive_model_config(
            &trainer_dir.join("models"),
            &spec.training.weights,
            metadata.class_count,
        )
        .map_err(at(Stage::ConfigMaterialization))?;
        self.logger
            .verbose(format!("  derived config {}", derived_cfg.display()));

        // the trainer resolves paths from its own working directory, so
        // hand it absolute ones
        let data_abs = fs::canonicalize(&metadata_path)
            .map_err(|e| StageError::new(Stage::TrainingInvocation, e.into()))?;
        let cfg_abs = fs::canonicalize(&derived_cfg)
            .map_err(|e| StageError::new(Stage::TrainingInvocation, e.into()))?;

        let args = invoke::trainer_args(
            spec.training.img_size,
            spec.training.batch_size,
            spec.training.epochs,
            &data_abs,
            &cfg_abs,
            &spec.training.weights,
            &spec.training.run_name,
        );
        let timeout = spec.training.timeout_secs.map(Duration::from_secs);

        self.logger.info(format!(
            "Invoking {} {} ({} epochs, batch {})",
            spec.trainer.program, spec.trainer.script, spec.training.epochs, spec.training.batch_size
        ));
        let output = invoke::run_trainer(
            &spec.trainer.program,
            &spec.trainer.script,
            &trainer_dir,
            &args,
            timeout,
        )
        .map_err(at(Stage::TrainingInvocation))?;

        if !output.stdout.is_empty() {
            self.logger.verbose(&output.stdout);
        }
        if !output.success {
            return Err(StageError::new(
                Stage::TrainingInvocation,
                Error::TrainingFailed {
                    code: output.code,
                    stderr: output.stderr,
                },
            ));
        }

        let weights = artifact::locate_weights(&trainer_dir, &spec.training.run_name)
            .map_err(at(Stage::ArtifactValidation))?;

        let placed = artifact::place_artifact(&weights, &trainer_dir, &self.resolve(&spec.output.dir))
            .map_err(at(Stage::ArtifactPlacement))?;
        self.logger.info(format!(
            "Trained weights placed at {}",
            placed.weights_path.display()
        ));

        self.cleanup(&trainer_dir, &metadata_path);

        Ok(placed)
    }

    /// Best-effort removal of the trainer's run directory, the extracted
    /// dataset directories, and the metadata file. Failures are reported
    /// as warnings and do not fail a completed run.
    fn cleanup(&self, trainer_dir: &Path, metadata_path: &Path) {
        let dirs = [
            trainer_dir.join("runs"),
            self.workdir.join("train"),
            self.workdir.join("test"),
        ];
        for dir in dirs {
            if !dir.exists() {
                continue;
            }
            if let Err(e) = fs::remove_dir_all(&dir) {
                self.logger
                    .warn(format!("cleanup: could not remove {}: {e}", dir.display()));
            }
        }

        if metadata_path.exists() {
            if let Err(e) = fs::remove_file(metadata_path) {
                self.logger.warn(format!(
                    "cleanup: could not remove {}: {e}",
                    metadata_path.display()
                ));
            }
        }
    }
}

fn at(stage: Stage) -> impl FnOnce(Error) -> StageError {
    move |source| StageError::new(stage, source)
}
