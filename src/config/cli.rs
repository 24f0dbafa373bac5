//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! gestos train gestos.yaml
//! gestos train gestos.yaml --epochs 100 --batch-size 8
//! gestos validate gestos.yaml --detailed
//! gestos info gestos.yaml --format json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gestos: sign-language detector training pipeline
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gestos")]
#[command(version)]
#[command(about = "Train a YOLOv5 sign-language gesture detector from a packaged dataset")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the full training pipeline from a YAML specification
    Train(TrainArgs),

    /// Validate a specification file without training
    Validate(ValidateArgs),

    /// Display the resolved specification
    Info(InfoArgs),
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Path to the YAML pipeline specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Override number of epochs
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override the trainer time limit in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Dry run (validate and print the plan, don't train)
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the YAML pipeline specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to the YAML pipeline specification
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {}. Valid formats: text, json, yaml",
                s
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a loaded spec
pub fn apply_overrides(spec: &mut super::PipelineSpec, args: &TrainArgs) {
    if let Some(epochs) = args.epochs {
        spec.training.epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        spec.training.batch_size = batch_size;
    }
    if let Some(output_dir) = &args.output_dir {
        spec.output.dir = output_dir.clone();
    }
    if let Some(timeout_secs) = args.timeout_secs {
        spec.training.timeout_secs = Some(timeout_secs);
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Strategy for valid spec paths
    fn spec_path_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_-]{0,20}\\.(yaml|yml)"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_train_command_parses(spec in spec_path_strategy()) {
            let result = parse_args(["gestos", "train", &spec]);
            prop_assert!(result.is_ok());
            let cli = result.unwrap();
            match cli.command {
                Command::Train(args) => {
                    prop_assert_eq!(args.spec.to_str().unwrap(), &spec);
                }
                _ => prop_assert!(false, "Expected Train command"),
            }
        }

        #[test]
        fn prop_epochs_override_positive(
            spec in spec_path_strategy(),
            epochs in 1usize..10000
        ) {
            let epochs_str = epochs.to_string();
            let result = parse_args([
                "gestos", "train", &spec,
                "--epochs", &epochs_str,
            ]);
            prop_assert!(result.is_ok());
            let cli = result.unwrap();
            match cli.command {
                Command::Train(args) => {
                    prop_assert_eq!(args.epochs, Some(epochs));
                }
                _ => prop_assert!(false, "Expected Train command"),
            }
        }

        #[test]
        fn prop_batch_size_override_positive(
            spec in spec_path_strategy(),
            batch_size in 1usize..1024
        ) {
            let batch_str = batch_size.to_string();
            let result = parse_args([
                "gestos", "train", &spec,
                "--batch-size", &batch_str,
            ]);
            prop_assert!(result.is_ok());
            let cli = result.unwrap();
            match cli.command {
                Command::Train(args) => {
                    prop_assert_eq!(args.batch_size, Some(batch_size));
                }
                _ => prop_assert!(false, "Expected Train command"),
            }
        }

        #[test]
        fn prop_output_format_case_insensitive(
            format in prop::sample::select(vec!["text", "TEXT", "Text", "json", "JSON", "yaml", "YAML"])
        ) {
            let result = format.parse::<OutputFormat>();
            prop_assert!(result.is_ok());
        }

        #[test]
        fn prop_verbose_quiet_flags(spec in spec_path_strategy()) {
            let cli_v = parse_args(["gestos", "-v", "validate", &spec]).unwrap();
            let cli_q = parse_args(["gestos", "-q", "validate", &spec]).unwrap();

            prop_assert!(cli_v.verbose && !cli_v.quiet);
            prop_assert!(!cli_q.verbose && cli_q.quiet);
        }
    }
}
