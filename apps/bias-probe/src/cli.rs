//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Prompt-framing bias experiment: generate prompts, collect responses,
/// classify them, and check them against ground truth.
#[derive(Parser, Debug)]
#[command(name = "bias-probe")]
#[command(version)]
#[command(about = "LLM framing/selection/confirmation bias experiment", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the prompt catalog to a JSONL file
    #[command(alias = "gen")]
    Generate {
        #[arg(short, long, default_value = "prompts.jsonl")]
        out: PathBuf,
    },

    /// Send every prompt to the model and log responses
    Run {
        #[arg(short, long, default_value = "prompts.jsonl")]
        prompts: PathBuf,

        #[arg(short, long, default_value = "results.jsonl")]
        out: PathBuf,

        /// Model identifier; defaults to BIAS_PROBE_MODEL or the built-in model
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Label responses and print per-condition percentages
    #[command(alias = "classify")]
    Analyze {
        #[arg(short, long, default_value = "results.jsonl")]
        results: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Flag responses that contradict the ground-truth statistics
    Validate {
        #[arg(short, long, default_value = "results.jsonl")]
        results: PathBuf,

        /// JSON ground-truth table; all stats unset when omitted
        #[arg(short, long, env = "BIAS_PROBE_GROUND_TRUTH")]
        ground_truth: Option<PathBuf>,

        /// JSON file overriding any of the default thresholds
        #[arg(short, long)]
        thresholds: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
