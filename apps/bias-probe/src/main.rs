mod analysis;
mod cli;
mod config;
mod errors;
mod experiment;
mod generation;
mod jsonl;
mod llm_client;
mod models;
mod validation;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::llm_client::{Completer, LlmClient, UnconfiguredCompleter};
use crate::validation::ground_truth::{GroundTruth, ValidationThresholds};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only reports.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { out } => {
            generation::catalog::save_prompts(&out)
                .with_context(|| format!("failed to write prompts to {}", out.display()))?;
        }
        Commands::Run {
            prompts,
            out,
            model,
        } => {
            let model_name = model.unwrap_or_else(|| config.model_name.clone());
            let completer = build_completer(&config)?;
            experiment::runner::run_files(&prompts, &out, completer.as_ref(), &model_name)
                .await
                .context("experiment run aborted")?;
        }
        Commands::Analyze { results, format } => {
            let counts = analysis::counts::classify_file(&results)
                .with_context(|| format!("failed to analyze {}", results.display()))?;
            let report = counts.report();
            match format {
                OutputFormat::Text => print!("{}", analysis::counts::render_text(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Validate {
            results,
            ground_truth,
            thresholds,
            format,
        } => {
            let truth = match ground_truth {
                Some(path) => GroundTruth::from_file(&path)?,
                None => {
                    warn!("No ground truth supplied; using the built-in example table");
                    GroundTruth::example()
                }
            };
            let thresholds = match thresholds {
                Some(path) => ValidationThresholds::from_file(&path)?,
                None => ValidationThresholds::default(),
            };
            let summary = validation::report::validate_file(&results, &truth, &thresholds)
                .with_context(|| format!("failed to validate {}", results.display()))?;
            match format {
                OutputFormat::Text => print!("{}", validation::report::render_text(&summary)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
    }

    Ok(())
}

/// Anthropic backend when a key is configured, otherwise the placeholder that skips.
fn build_completer(config: &Config) -> Result<Box<dyn Completer>> {
    match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone()).context("failed to build HTTP client")?;
            info!("LLM client initialized");
            Ok(Box::new(client))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; every prompt will be skipped");
            Ok(Box::new(UnconfiguredCompleter))
        }
    }
}
