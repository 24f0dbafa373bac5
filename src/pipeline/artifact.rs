//! Trained weights validation and placement

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reference to the trained weights file
///
/// Valid only when the pipeline's terminal stage succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingArtifact {
    /// Final weights location under the configured output directory
    pub weights_path: PathBuf,
}

/// Locate the weights the trainer is expected to have produced.
///
/// The trainer writes its best checkpoint to
/// `<trainer dir>/runs/train/<run name>/weights/best.pt`. An absent file
/// means the tool reported success without producing output, or the run
/// name convention diverged; either way it is fatal.
pub fn locate_weights(trainer_dir: &Path, run_name: &str) -> Result<PathBuf> {
    let path = trainer_dir
        .join("runs")
        .join("train")
        .join(run_name)
        .join("weights")
        .join("best.pt");

    if !path.exists() {
        return Err(Error::ArtifactMissing { path });
    }

    Ok(path)
}

/// Copy the weights into the output directory, creating it if needed.
///
/// A second copy is left at the top of the trainer checkout alongside the
/// tool's own working files. The source is copied, not moved.
pub fn place_artifact(
    weights: &Path,
    trainer_dir: &Path,
    output_dir: &Path,
) -> Result<TrainingArtifact> {
    let file_name = weights
        .file_name()
        .ok_or_else(|| Error::ArtifactMissing {
            path: weights.to_path_buf(),
        })?;

    fs::create_dir_all(output_dir)?;

    fs::copy(weights, trainer_dir.join(file_name))?;

    let dest = output_dir.join(file_name);
    fs::copy(weights, &dest)?;

    Ok(TrainingArtifact { weights_path: dest })
}
