//! # Gestos: sign-language detector training pipeline
//!
//! Gestos orchestrates the training of a YOLOv5 sign-language gesture
//! detector. One run stages a packaged dataset, derives a
//! dataset-specific architecture config from a base template, invokes
//! the external YOLOv5 training script, validates and places the
//! resulting weights, and cleans up intermediate state.
//!
//! ## Architecture
//!
//! - **config**: declarative YAML pipeline specification, validation, CLI
//! - **pipeline**: the staged training orchestrator
//! - **error**: typed error kinds tagged with the failing stage
//! - **logging**: caller-owned, level-gated progress output
//!
//! ## Example
//!
//! ```no_run
//! use gestos::config::load_spec;
//! use gestos::logging::{Logger, LogLevel};
//! use gestos::pipeline::TrainingPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = load_spec("gestos.yaml")?;
//! let pipeline = TrainingPipeline::new(spec, Logger::new(LogLevel::Normal));
//! let artifact = pipeline.run()?;
//! println!("weights at {}", artifact.weights_path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, Result, Stage, StageError};
pub use logging::{LogLevel, Logger};
pub use pipeline::{TrainingArtifact, TrainingPipeline};
