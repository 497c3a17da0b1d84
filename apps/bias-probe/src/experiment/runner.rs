//! Experiment Runner — sends each prompt to the completion capability and logs
//! the responses, strictly one prompt at a time and in input order.
//!
//! Outcomes per prompt:
//! - response text → one `ResultRecord` appended
//! - `NotConfigured` → skipped, nothing appended, run continues
//! - any other error → run aborts (records already appended are kept)

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jsonl::{read_jsonl, JsonlWriter};
use crate::llm_client::{CompletionError, Completer};
use crate::models::{PromptRecord, ResultRecord};

/// Tally of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub completed: usize,
    pub skipped: usize,
}

/// Runs every prompt through `completer`, appending results to `sink`.
pub async fn run<W: Write>(
    prompts: &[PromptRecord],
    completer: &dyn Completer,
    model_name: &str,
    sink: &mut JsonlWriter<W>,
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for prompt in prompts {
        let response = match completer.complete(&prompt.question, model_name).await {
            Ok(text) => text,
            Err(CompletionError::NotConfigured) => {
                warn!(
                    "[SKIP] completion capability not configured. prompt_id={}",
                    prompt.prompt_id
                );
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        sink.append(&ResultRecord::from_prompt(prompt, model_name, response))?;
        summary.completed += 1;
        info!(
            "[OK] Logged response for prompt_id={} ({})",
            prompt.prompt_id, prompt.hypothesis
        );
    }

    Ok(summary)
}

/// File-to-file variant: reads `prompts_path`, writes `results_path` (overwriting).
pub async fn run_files(
    prompts_path: &Path,
    results_path: &Path,
    completer: &dyn Completer,
    model_name: &str,
) -> Result<RunSummary, AppError> {
    let prompts: Vec<PromptRecord> = read_jsonl(prompts_path)?;
    info!(
        "Running {} prompts against model {}",
        prompts.len(),
        model_name
    );

    let mut sink = JsonlWriter::create(results_path)?;
    let summary = run(&prompts, completer, model_name, &mut sink).await?;

    info!(
        "Run finished: {} records written, {} skipped, results in {}",
        sink.written(),
        summary.skipped,
        results_path.display()
    );
    Ok(summary)
}
