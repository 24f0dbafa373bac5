//! Pipeline specification: YAML schema, loading, validation, CLI
//!
//! # Example
//!
//! ```yaml
//! dataset:
//!   archive: signs.v1.yolov5pytorch.zip
//!   metadata: artifacts/feature_store/data.yaml
//!
//! training:
//!   weights: yolov5s.pt
//!   batch_size: 16
//!   epochs: 50
//!
//! output:
//!   dir: artifacts/model_trainer
//! ```

mod cli;
mod load;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, InfoArgs, OutputFormat, TrainArgs, ValidateArgs,
};
pub use load::load_spec;
pub use schema::{DatasetConfig, OutputConfig, PipelineSpec, TrainerConfig, TrainingParams};
pub use validate::{validate_spec, ValidationError};
