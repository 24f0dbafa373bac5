//! Gestos CLI
//!
//! Training pipeline entry point.
//!
//! # Usage
//!
//! ```bash
//! # Run the full pipeline
//! gestos train gestos.yaml
//!
//! # Run with overrides
//! gestos train gestos.yaml --epochs 100 --batch-size 8
//!
//! # Validate the spec
//! gestos validate gestos.yaml --detailed
//!
//! # Show the resolved spec
//! gestos info gestos.yaml --format json
//! ```

use clap::Parser;
use gestos::config::{
    apply_overrides, load_spec, validate_spec, Cli, Command, InfoArgs, OutputFormat, TrainArgs,
    ValidateArgs,
};
use gestos::logging::{LogLevel, Logger};
use gestos::pipeline::TrainingPipeline;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = Logger::from_flags(cli.verbose, cli.quiet);

    let result = match cli.command {
        Command::Train(args) => run_train(args, logger),
        Command::Validate(args) => run_validate(args, logger),
        Command::Info(args) => run_info(args, logger),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_train(args: TrainArgs, logger: Logger) -> Result<(), String> {
    logger.info(format!("Gestos: training from {}", args.spec.display()));

    let mut spec = load_spec(&args.spec).map_err(|e| format!("Spec error: {e}"))?;

    apply_overrides(&mut spec, &args);
    validate_spec(&spec).map_err(|e| format!("Spec error: {e}"))?;

    if args.dry_run {
        logger.info("Dry run - spec validated successfully");
        logger.info(format!("  Archive: {}", spec.dataset.archive.display()));
        logger.info(format!("  Metadata: {}", spec.dataset.metadata.display()));
        logger.info(format!("  Weights: {}", spec.training.weights));
        logger.info(format!(
            "  Epochs: {} (batch {}, img {})",
            spec.training.epochs, spec.training.batch_size, spec.training.img_size
        ));
        logger.info(format!("  Output dir: {}", spec.output.dir.display()));
        return Ok(());
    }

    let artifact = TrainingPipeline::new(spec, logger)
        .run()
        .map_err(|e| e.to_string())?;

    logger.info(format!(
        "Training complete: {}",
        artifact.weights_path.display()
    ));
    Ok(())
}

fn run_validate(args: ValidateArgs, logger: Logger) -> Result<(), String> {
    logger.info(format!("Validating spec: {}", args.spec.display()));

    let spec = load_spec(&args.spec).map_err(|e| format!("Spec error: {e}"))?;

    logger.info("Specification is valid");

    if args.detailed {
        println!();
        println!("Specification Summary:");
        println!("  Dataset archive: {}", spec.dataset.archive.display());
        println!("  Dataset metadata: {}", spec.dataset.metadata.display());
        println!();
        println!("  Base weights: {}", spec.training.weights);
        println!("  Batch size: {}", spec.training.batch_size);
        println!("  Epochs: {}", spec.training.epochs);
        println!("  Image size: {}", spec.training.img_size);
        println!("  Run name: {}", spec.training.run_name);
        if let Some(timeout) = spec.training.timeout_secs {
            println!("  Timeout: {timeout}s");
        }
        println!();
        println!("  Trainer: {} {}", spec.trainer.program, spec.trainer.script);
        println!("  Trainer dir: {}", spec.trainer.dir.display());
        println!("  Output dir: {}", spec.output.dir.display());
    }

    Ok(())
}

fn run_info(args: InfoArgs, logger: Logger) -> Result<(), String> {
    let spec = load_spec(&args.spec).map_err(|e| format!("Spec error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            logger.info("Specification Info:");
            println!();
            println!("Archive: {}", spec.dataset.archive.display());
            println!("Metadata: {}", spec.dataset.metadata.display());
            println!("Weights: {}", spec.training.weights);
            println!(
                "Epochs: {} (batch {}, img {})",
                spec.training.epochs, spec.training.batch_size, spec.training.img_size
            );
            println!("Run name: {}", spec.training.run_name);
            println!("Output dir: {}", spec.output.dir.display());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
