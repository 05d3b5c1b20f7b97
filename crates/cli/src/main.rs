//! Observation Forecast CLI
//!
//! A command-line tool for running the observation pipeline over a batch:
//! validation, outlier cleaning, one-step prediction, tabular reporting,
//! and descriptive statistics.

mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{predict, report, run};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Observation Forecast CLI
#[derive(Parser)]
#[command(name = "forecast")]
#[command(author, version, about = "CLI for the observation forecast pipeline", long_about = None)]
pub struct Cli {
    /// JSON file of observations (uses built-in sample data if omitted)
    #[arg(long, short, env = "FORECAST_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: validate, clean, predict, report, analyze
    Run {
        /// Outlier band width in standard deviations
        #[arg(long)]
        sigma: Option<f64>,

        /// Keep running the remaining stages when validation fails
        #[arg(long)]
        continue_on_validation_failure: Option<bool>,
    },

    /// Clean the batch and predict the next value
    Predict {
        /// Outlier band width in standard deviations
        #[arg(long)]
        sigma: Option<f64>,
    },

    /// Render the tabular report for the batch
    Report {
        /// Report the raw batch instead of the cleaned one
        #[arg(long)]
        raw: bool,

        /// Outlier band width in standard deviations
        #[arg(long)]
        sigma: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = config::PipelineSettings::load()?;
    let batch = input::load_batch(cli.input.as_deref())?;

    match cli.command {
        Commands::Run {
            sigma,
            continue_on_validation_failure,
        } => run::execute(
            &batch,
            settings.with_overrides(sigma, continue_on_validation_failure),
            cli.format,
        ),
        Commands::Predict { sigma } => {
            predict::execute(&batch, settings.with_overrides(sigma, None), cli.format)
        }
        Commands::Report { raw, sigma } => report::execute(
            &batch,
            raw,
            settings.with_overrides(sigma, None),
            cli.format,
        ),
    }
}
