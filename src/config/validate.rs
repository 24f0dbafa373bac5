//! Specification validation

use super::schema::PipelineSpec;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid image size: {0} (must be > 0)")]
    InvalidImgSize(u32),

    #[error("Base weights identifier must not be empty")]
    EmptyWeights,

    #[error("Run name must not be empty")]
    EmptyRunName,

    #[error("Invalid timeout: 0 seconds (omit the field to wait forever)")]
    ZeroTimeout,
}

/// Validate a pipeline specification
///
/// Checks numeric ranges and required identifiers. Input file existence
/// is deliberately not checked here; the pipeline stages report missing
/// files themselves so the failure is tagged with the right stage.
pub fn validate_spec(spec: &PipelineSpec) -> Result<(), ValidationError> {
    if spec.training.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(spec.training.batch_size));
    }

    if spec.training.epochs == 0 {
        return Err(ValidationError::InvalidEpochs(spec.training.epochs));
    }

    if spec.training.img_size == 0 {
        return Err(ValidationError::InvalidImgSize(spec.training.img_size));
    }

    if spec.training.weights.trim().is_empty() {
        return Err(ValidationError::EmptyWeights);
    }

    if spec.training.run_name.trim().is_empty() {
        return Err(ValidationError::EmptyRunName);
    }

    if spec.training.timeout_secs == Some(0) {
        return Err(ValidationError::ZeroTimeout);
    }

    Ok(())
}
