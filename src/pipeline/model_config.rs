//! Architecture config materialization
//!
//! The base weights identifier locates an architecture template under the
//! trainer's `models/` directory (`yolov5s.pt` -> `models/yolov5s.yaml`).
//! A dataset-specific copy with the class count overwritten is written
//! next to it as `custom_<stem>.yaml` for the trainer to consume.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The template file stem for a base weights identifier.
///
/// Matches the trainer's convention: everything before the first dot
/// (`yolov5s.pt` -> `yolov5s`).
pub fn template_stem(weights: &str) -> &str {
    weights.split('.').next().unwrap_or(weights)
}

/// Derive the dataset-specific architecture config.
///
/// Loads `<models_dir>/<stem>.yaml`, overwrites only its `nc` field with
/// `class_count`, and writes the result to
/// `<models_dir>/custom_<stem>.yaml`, silently overwriting any previous
/// derived config. All other template fields survive the round trip.
pub fn derive_model_config(models_dir: &Path, weights: &str, class_count: usize) -> Result<PathBuf> {
    let stem = template_stem(weights);
    let template = models_dir.join(format!("{stem}.yaml"));

    if !template.exists() {
        return Err(Error::MissingInput { path: template });
    }

    let text = fs::read_to_string(&template)?;
    let mut doc: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|e| Error::MalformedConfig {
            path: template.clone(),
            reason: e.to_string(),
        })?;

    let mapping = doc.as_mapping_mut().ok_or_else(|| Error::MalformedConfig {
        path: template.clone(),
        reason: "template is not a YAML mapping".to_string(),
    })?;
    mapping.insert(
        serde_yaml::Value::String("nc".to_string()),
        serde_yaml::Value::Number((class_count as u64).into()),
    );

    let derived = models_dir.join(format!("custom_{stem}.yaml"));
    let dumped = serde_yaml::to_string(&doc).map_err(|e| Error::MalformedConfig {
        path: derived.clone(),
        reason: e.to_string(),
    })?;
    fs::write(&derived, dumped)?;

    Ok(derived)
}
