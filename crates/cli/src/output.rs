//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use forecast_lib::{Observation, StatsSummary};
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Row for the observation table
#[derive(Tabled)]
pub struct ObservationRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Timestamp (ms)")]
    timestamp_ms: i64,
}

impl From<&Observation> for ObservationRow {
    fn from(obs: &Observation) -> Self {
        Self {
            id: obs.id,
            value: format!("{:.2}", obs.value),
            timestamp_ms: obs.timestamp_ms,
        }
    }
}

/// Row for the statistics table
#[derive(Tabled)]
pub struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Print a section banner
pub fn print_section(title: &str) {
    println!("{}", "===================================".bold());
    println!("{}", format!("=== {title} ===").bold());
    println!("{}", "===================================".bold());
}

/// Print a batch as a rounded table
pub fn print_observations(batch: &[Observation]) {
    if batch.is_empty() {
        println!("{}", "No observations".yellow());
        return;
    }
    let rows: Vec<ObservationRow> = batch.iter().map(ObservationRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Print a statistics summary as a rounded table
pub fn print_summary(summary: &StatsSummary) {
    let rows = vec![
        StatRow {
            metric: "Average",
            value: format!("{:.2}", summary.average),
        },
        StatRow {
            metric: "Maximum",
            value: format!("{:.2}", summary.max),
        },
        StatRow {
            metric: "Minimum",
            value: format!("{:.2}", summary.min),
        },
        StatRow {
            metric: "Range",
            value: format!("{:.2}", summary.range),
        },
        StatRow {
            metric: "Sum",
            value: format!("{:.2}", summary.sum),
        },
        StatRow {
            metric: "Count",
            value: summary.count.to_string(),
        },
    ];
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
