//! Loading the pipeline specification from YAML

use super::schema::PipelineSpec;
use super::validate::validate_spec;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and validate a pipeline spec from a YAML file
///
/// A missing file is [`Error::MissingInput`]; a parse or validation
/// failure is [`Error::MalformedConfig`] carrying the reason.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<PipelineSpec> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let yaml_content = fs::read_to_string(path)?;

    let spec: PipelineSpec =
        serde_yaml::from_str(&yaml_content).map_err(|e| Error::MalformedConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    validate_spec(&spec).map_err(|e| Error::MalformedConfig {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(spec)
}
