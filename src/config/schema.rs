//! YAML schema for the training pipeline specification

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete pipeline specification
///
/// Loaded from a YAML file (`gestos.yaml` by convention) and treated as
/// immutable input for one orchestration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Dataset inputs produced by the ingestion stage
    pub dataset: DatasetConfig,

    /// Training hyperparameters
    pub training: TrainingParams,

    /// External trainer location and entry point
    #[serde(default)]
    pub trainer: TrainerConfig,

    /// Artifact output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Packaged dataset archive to extract into the working directory
    pub archive: PathBuf,

    /// `data.yaml` written by the ingestion stage; its `nc` field is the
    /// class count
    pub metadata: PathBuf,
}

/// Training hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingParams {
    /// Base weights identifier, e.g. `yolov5s.pt`; its stem locates the
    /// architecture template under `<trainer.dir>/models/`
    pub weights: String,

    /// Batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Number of epochs
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Input image size in pixels
    #[serde(default = "default_img_size")]
    pub img_size: u32,

    /// Label namespacing the trainer's output directory
    #[serde(default = "default_run_name")]
    pub run_name: String,

    /// Wall-clock limit on the external trainer; absent = wait forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// External trainer location and entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// YOLOv5 checkout directory; also the trainer's working directory
    #[serde(default = "default_trainer_dir")]
    pub dir: PathBuf,

    /// Interpreter used to launch the training script
    #[serde(default = "default_program")]
    pub program: String,

    /// Training script, relative to `dir`
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            dir: default_trainer_dir(),
            program: default_program(),
            script: default_script(),
        }
    }
}

/// Artifact output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the trained weights copy
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_batch_size() -> usize {
    16
}

fn default_epochs() -> usize {
    50
}

fn default_img_size() -> u32 {
    416
}

fn default_run_name() -> String {
    "yolov5s_results".to_string()
}

fn default_trainer_dir() -> PathBuf {
    PathBuf::from("yolov5")
}

fn default_program() -> String {
    "python3".to_string()
}

fn default_script() -> String {
    "train.py".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("artifacts/model_trainer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let yaml = r#"
dataset:
  archive: signs.v1.yolov5pytorch.zip
  metadata: artifacts/feature_store/data.yaml

training:
  weights: yolov5s.pt
"#;

        let spec: PipelineSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.dataset.archive, PathBuf::from("signs.v1.yolov5pytorch.zip"));
        assert_eq!(spec.training.weights, "yolov5s.pt");
        assert_eq!(spec.training.batch_size, 16);
        assert_eq!(spec.training.epochs, 50);
        assert_eq!(spec.training.img_size, 416);
        assert_eq!(spec.training.run_name, "yolov5s_results");
        assert_eq!(spec.training.timeout_secs, None);
        assert_eq!(spec.trainer.dir, PathBuf::from("yolov5"));
        assert_eq!(spec.trainer.program, "python3");
        assert_eq!(spec.trainer.script, "train.py");
        assert_eq!(spec.output.dir, PathBuf::from("artifacts/model_trainer"));
    }

    #[test]
    fn test_deserialize_full_spec() {
        let yaml = r#"
dataset:
  archive: data.zip
  metadata: data.yaml

training:
  weights: yolov5m.pt
  batch_size: 8
  epochs: 100
  img_size: 640
  run_name: experiment-3
  timeout_secs: 7200

trainer:
  dir: tools/yolov5
  program: python
  script: train.py

output:
  dir: out/models
"#;

        let spec: PipelineSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.training.batch_size, 8);
        assert_eq!(spec.training.epochs, 100);
        assert_eq!(spec.training.img_size, 640);
        assert_eq!(spec.training.run_name, "experiment-3");
        assert_eq!(spec.training.timeout_secs, Some(7200));
        assert_eq!(spec.trainer.dir, PathBuf::from("tools/yolov5"));
        assert_eq!(spec.trainer.program, "python");
        assert_eq!(spec.output.dir, PathBuf::from("out/models"));
    }

    #[test]
    fn test_missing_weights_is_a_parse_error() {
        let yaml = r#"
dataset:
  archive: data.zip
  metadata: data.yaml

training:
  batch_size: 8
"#;

        let result: Result<PipelineSpec, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_preserves_values() {
        let yaml = r#"
dataset:
  archive: data.zip
  metadata: data.yaml

training:
  weights: yolov5s.pt
  epochs: 25
"#;

        let spec: PipelineSpec = serde_yaml::from_str(yaml).unwrap();
        let dumped = serde_yaml::to_string(&spec).unwrap();
        let reparsed: PipelineSpec = serde_yaml::from_str(&dumped).unwrap();
        assert_eq!(reparsed.training.epochs, 25);
        assert_eq!(reparsed.training.weights, spec.training.weights);
    }
}
