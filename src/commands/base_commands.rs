use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::schedule_yaml::OutputFormat;

#[derive(Parser)]
#[command(name = "buildplan", author, version, about)]
pub struct CliArgs {
    /// Optional engine configuration YAML
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a phase schedule for a project and serialize it
    Schedule {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
        /// Output file
        #[arg(short, long)]
        output: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Print a plain-text schedule report
    Report {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
    },
    /// Plot the schedule as a Mermaid gantt chart
    PlotSchedule {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
        /// Output Markdown file
        #[arg(short, long)]
        output: String,
        /// Construction start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
    },
    /// Plot the phase dependency graph as a Mermaid diagram
    PlotPhases {
        /// Output Markdown file
        #[arg(short, long)]
        output: String,
    },
    /// Plot active phases per week into a PNG chart
    PlotProgress {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Ask the text-generation service for a narrative plan analysis
    Advise {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
        /// Base URL of the text-generation service
        #[arg(long)]
        advisor_url: Option<String>,
        /// Model name
        #[arg(long)]
        model: Option<String>,
        /// Skip the service and use rule-based output only
        #[arg(long)]
        offline: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
