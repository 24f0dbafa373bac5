//! Dataset metadata discovery

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Metadata exposed by the ingestion stage's `data.yaml`
///
/// Only the class count is consumed; the rest of the file is passed
/// through to the external trainer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetMetadata {
    /// Number of distinct gesture classes the detector must learn
    pub class_count: usize,
}

/// Read the class count (`nc` key) from the dataset metadata file.
///
/// The value must coerce to a positive integer; YAML integers and
/// integer-valued strings are both accepted. Missing file is
/// [`Error::MissingInput`]; a parse failure or a missing, null, or
/// non-coercible `nc` is [`Error::MalformedConfig`].
pub fn read_metadata(path: &Path) -> Result<DatasetMetadata> {
    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;

    let doc: serde_yaml::Value = serde_yaml::from_str(&text).map_err(|e| Error::MalformedConfig {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let nc = doc.get("nc").ok_or_else(|| malformed(path, "missing 'nc' key"))?;

    let class_count = coerce_class_count(nc)
        .ok_or_else(|| malformed(path, &format!("'nc' is not a positive integer: {nc:?}")))?;

    Ok(DatasetMetadata { class_count })
}

/// Accept integers and integer-valued strings, rejecting everything else.
fn coerce_class_count(value: &serde_yaml::Value) -> Option<usize> {
    let n = match value {
        serde_yaml::Value::Number(n) => n.as_u64()?,
        serde_yaml::Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    if n == 0 {
        return None;
    }
    usize::try_from(n).ok()
}

fn malformed(path: &Path, reason: &str) -> Error {
    Error::MalformedConfig {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
