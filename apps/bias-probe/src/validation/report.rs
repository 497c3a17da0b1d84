//! Validation pass over a results file, with a console/JSON summary.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::jsonl::read_jsonl;
use crate::models::ResultRecord;
use crate::validation::claims::validate;
use crate::validation::ground_truth::{GroundTruth, ValidationThresholds};

/// A record with at least one issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedRecord {
    pub prompt_id: String,
    pub hypothesis: String,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub with_issues: usize,
    pub flagged: Vec<FlaggedRecord>,
}

pub fn validate_records(
    records: &[ResultRecord],
    truth: &GroundTruth,
    thresholds: &ValidationThresholds,
) -> ValidationSummary {
    let mut summary = ValidationSummary::default();
    for record in records {
        summary.total += 1;
        let issues = validate(record, truth, thresholds);
        if issues.is_empty() {
            continue;
        }
        summary.with_issues += 1;
        summary.flagged.push(FlaggedRecord {
            prompt_id: record.prompt_id.clone(),
            hypothesis: record.hypothesis.clone(),
            issues,
        });
    }
    summary
}

pub fn validate_file(
    results_path: &Path,
    truth: &GroundTruth,
    thresholds: &ValidationThresholds,
) -> Result<ValidationSummary, AppError> {
    let records: Vec<ResultRecord> = read_jsonl(results_path)?;
    let summary = validate_records(&records, truth, thresholds);
    info!(
        "Validated {} responses, {} with issues",
        summary.total, summary.with_issues
    );
    Ok(summary)
}

pub fn render_text(summary: &ValidationSummary) -> String {
    let mut out = String::new();
    for flagged in &summary.flagged {
        let _ = writeln!(
            out,
            "\n[ISSUES] prompt_id={}  hypothesis={}",
            flagged.prompt_id, flagged.hypothesis
        );
        for issue in &flagged.issues {
            let _ = writeln!(out, "  - {issue}");
        }
    }
    let _ = writeln!(out, "\n=== Validation Summary ===");
    let _ = writeln!(out, "Total responses checked: {}", summary.total);
    let _ = writeln!(
        out,
        "Responses with at least one potential issue: {}",
        summary.with_issues
    );
    out
}
