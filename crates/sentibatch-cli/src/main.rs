//! SentiBatch CLI
//!
//! Batch sentiment classification and evaluation. Reads a CSV file or
//! a JSON array on stdin, classifies every record against the fixed
//! 3-class taxonomy, and prints exactly one JSON payload to stdout.
//! All diagnostics go to stderr.
//!
//! On structural input failure the payload is an error envelope and
//! the process exits non-zero; a single bad record never aborts the
//! batch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sentibatch_classifiers::{Classifier, PolarityClassifier, ThresholdPolicy};
use sentibatch_eval::{BatchEvaluator, ErrorEnvelope, EvalConfig, ResultEnvelope};
use std::path::PathBuf;
use tracing::{error, info};

mod input;
mod output;

#[derive(Parser, Debug)]
#[command(name = "sentibatch")]
#[command(about = "Batch sentiment classification and evaluation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the positive score threshold
    #[arg(long, global = true, allow_negative_numbers = true)]
    positive_threshold: Option<f64>,

    /// Override the negative score threshold
    #[arg(long, global = true, allow_negative_numbers = true)]
    negative_threshold: Option<f64>,

    /// Override metric rounding (decimal places)
    #[arg(long, global = true)]
    round_digits: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a CSV file with a 'text' column, writing an augmented copy
    Csv {
        /// Input CSV path
        input: PathBuf,

        /// Directory for the augmented output CSV
        #[arg(long, default_value = "backend/uploads")]
        output_dir: PathBuf,
    },

    /// Classify a JSON array of {text, label?} objects read from stdin
    Stream,

    /// Classify a single text and print {"sentiment": ...}
    Text { text: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(payload) => println!("{payload}"),
        Err(err) => {
            error!("{err:#}");
            println!("{}", ErrorEnvelope::new(err.to_string()).to_json());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Csv { input, output_dir } => {
            let config = apply_overrides(EvalConfig::csv_defaults(), cli);
            let batch = input::read_csv_batch(input)?;
            info!(records = batch.records.len(), "classifying csv batch");

            let evaluator = BatchEvaluator::new(config);
            let evaluation = evaluator.evaluate(&batch.records);
            let output_csv = output::write_augmented_csv(&batch, &evaluation, output_dir)?;

            Ok(ResultEnvelope::csv(evaluation, output_csv).to_json()?)
        }
        Command::Stream => {
            let config = apply_overrides(EvalConfig::stream_defaults(), cli);
            let records = input::read_stream_records(std::io::stdin().lock())?;
            info!(records = records.len(), "classifying stream batch");

            let evaluator = BatchEvaluator::new(config);
            let evaluation = evaluator.evaluate(&records);

            Ok(ResultEnvelope::stream(evaluation).to_json()?)
        }
        Command::Text { text } => {
            let classifier = PolarityClassifier::new(ThresholdPolicy::ZERO);
            let classification = classifier.classify(text)?;
            Ok(serde_json::to_string(
                &serde_json::json!({ "sentiment": classification.class }),
            )?)
        }
    }
}

/// Apply shared CLI overrides on top of the mode preset
fn apply_overrides(mut config: EvalConfig, cli: &Cli) -> EvalConfig {
    if let Some(positive) = cli.positive_threshold {
        config.thresholds.positive = positive;
    }
    if let Some(negative) = cli.negative_threshold {
        config.thresholds.negative = negative;
    }
    if let Some(digits) = cli.round_digits {
        config.round_digits = Some(digits);
    }
    config
}

/// Initialize tracing to stderr; stdout carries only the JSON payload
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentibatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentibatch=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
