//! Label aggregation and the percentage report.
//!
//! Groups keep first-seen order at every level (hypothesis, condition, label),
//! so the report reads in the same order as the results file.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::analysis::labels::label_response;
use crate::errors::AppError;
use crate::jsonl::read_jsonl;
use crate::models::ResultRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionCounts {
    pub condition: String,
    pub labels: Vec<LabelCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HypothesisCounts {
    pub hypothesis: String,
    pub conditions: Vec<ConditionCounts>,
}

/// hypothesis → condition → label → count, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub hypotheses: Vec<HypothesisCounts>,
}

impl ConditionCounts {
    pub fn total(&self) -> u32 {
        self.labels.iter().map(|l| l.count).sum()
    }
}

impl LabelCounts {
    pub fn increment(&mut self, hypothesis: &str, condition: &str, label: &str) {
        let h = match self
            .hypotheses
            .iter()
            .position(|h| h.hypothesis == hypothesis)
        {
            Some(i) => i,
            None => {
                self.hypotheses.push(HypothesisCounts {
                    hypothesis: hypothesis.to_string(),
                    conditions: Vec::new(),
                });
                self.hypotheses.len() - 1
            }
        };
        let conditions = &mut self.hypotheses[h].conditions;

        let c = match conditions.iter().position(|c| c.condition == condition) {
            Some(i) => i,
            None => {
                conditions.push(ConditionCounts {
                    condition: condition.to_string(),
                    labels: Vec::new(),
                });
                conditions.len() - 1
            }
        };
        let labels = &mut conditions[c].labels;

        match labels.iter_mut().find(|l| l.label == label) {
            Some(entry) => entry.count += 1,
            None => labels.push(LabelCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, hypothesis: &str, condition: &str, label: &str) -> u32 {
        self.hypotheses
            .iter()
            .find(|h| h.hypothesis == hypothesis)
            .and_then(|h| h.conditions.iter().find(|c| c.condition == condition))
            .and_then(|c| c.labels.iter().find(|l| l.label == label))
            .map(|l| l.count)
            .unwrap_or(0)
    }

    /// Sum of every count; equals the number of records classified.
    pub fn total(&self) -> u32 {
        self.hypotheses
            .iter()
            .flat_map(|h| &h.conditions)
            .map(ConditionCounts::total)
            .sum()
    }

    /// Per-condition shares, ready for rendering or JSON output.
    pub fn report(&self) -> Vec<HypothesisReport> {
        self.hypotheses
            .iter()
            .map(|h| HypothesisReport {
                hypothesis: h.hypothesis.clone(),
                conditions: h
                    .conditions
                    .iter()
                    .map(|c| {
                        let total = c.total();
                        ConditionReport {
                            condition: c.condition.clone(),
                            total,
                            labels: c
                                .labels
                                .iter()
                                .map(|l| LabelShare {
                                    label: l.label.clone(),
                                    count: l.count,
                                    percent: percent(l.count, total),
                                })
                                .collect(),
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelShare {
    pub label: String,
    pub count: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionReport {
    pub condition: String,
    pub total: u32,
    pub labels: Vec<LabelShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypothesisReport {
    pub hypothesis: String,
    pub conditions: Vec<ConditionReport>,
}

fn percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Labels every record and tallies (hypothesis, condition, label).
pub fn classify(records: &[ResultRecord]) -> LabelCounts {
    let mut counts = LabelCounts::default();
    for record in records {
        let label = label_response(record.hypothesis(), &record.response);
        counts.increment(&record.hypothesis, &record.condition, label);
    }
    counts
}

/// Reads `results_path` and classifies every record in it.
pub fn classify_file(results_path: &Path) -> Result<LabelCounts, AppError> {
    let records: Vec<ResultRecord> = read_jsonl(results_path)?;
    let counts = classify(&records);
    info!(
        "Classified {} responses across {} hypotheses",
        counts.total(),
        counts.hypotheses.len()
    );
    Ok(counts)
}

/// Renders the nested percentage report as console text.
pub fn render_text(report: &[HypothesisReport]) -> String {
    let mut out = String::new();
    for hyp in report {
        let _ = writeln!(out, "\n=== Hypothesis: {} ===", hyp.hypothesis);
        for cond in &hyp.conditions {
            let _ = writeln!(out, "  Condition: {}", cond.condition);
            for share in &cond.labels {
                let _ = writeln!(
                    out,
                    "    {}: {} ({:.1}%)",
                    share.label, share.count, share.percent
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hypothesis: &str, condition: &str, response: &str) -> ResultRecord {
        ResultRecord {
            prompt_id: format!("{hypothesis}_{condition}"),
            hypothesis: hypothesis.to_string(),
            condition: condition.to_string(),
            prompt: "prompt".to_string(),
            model_name: "model".to_string(),
            response: response.to_string(),
        }
    }

    #[test]
    fn test_two_to_one_split_percentages() {
        let records = vec![
            record("H1_framing_primary_scorer", "negative_frame", "inefficient"),
            record("H1_framing_primary_scorer", "negative_frame", "very inefficient"),
            record("H1_framing_primary_scorer", "negative_frame", "developing"),
        ];
        let counts = classify(&records);
        let text = render_text(&counts.report());

        assert!(text.contains("inefficient: 2 (66.7%)"), "got:\n{text}");
        assert!(text.contains("developing: 1 (33.3%)"), "got:\n{text}");
        assert_eq!(counts.total(), records.len() as u32);
    }

    #[test]
    fn test_counts_sum_to_record_count() {
        let records = vec![
            record("H2_selection_playerB", "defense_focus", "weak defender"),
            record("H2_selection_playerB", "offense_focus", "great spacing"),
            record("H3_confirmation_causeA_vs_causeB", "neutral", "turnovers"),
            record("H9_unknown", "neutral", "anything"),
        ];
        let counts = classify(&records);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("H9_unknown", "neutral", "unclassified"), 1);
        assert_eq!(
            counts.get("H2_selection_playerB", "offense_focus", "offensive_spacing"),
            1
        );
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let records = vec![
            record("H4_framing_playerC", "neutral", "x"),
            record("H1_framing_primary_scorer", "positive_frame", "x"),
            record("H1_framing_primary_scorer", "negative_frame", "x"),
            record("H4_framing_playerC", "anchor_frame", "x"),
        ];
        let counts = classify(&records);
        let hyps: Vec<&str> = counts
            .hypotheses
            .iter()
            .map(|h| h.hypothesis.as_str())
            .collect();
        assert_eq!(hyps, vec!["H4_framing_playerC", "H1_framing_primary_scorer"]);

        let h1_conds: Vec<&str> = counts.hypotheses[1]
            .conditions
            .iter()
            .map(|c| c.condition.as_str())
            .collect();
        assert_eq!(h1_conds, vec!["positive_frame", "negative_frame"]);

        let text = render_text(&counts.report());
        let h4_pos = text.find("H4_framing_playerC").unwrap();
        let h1_pos = text.find("H1_framing_primary_scorer").unwrap();
        assert!(h4_pos < h1_pos);
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let counts = classify(&[]);
        assert_eq!(counts.total(), 0);
        assert!(counts.report().is_empty());
        assert_eq!(render_text(&counts.report()), "");
    }

    #[test]
    fn test_percent_zero_total() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let counts = classify(&[record("H1_framing_primary_scorer", "neutral", "inefficient")]);
        let json = serde_json::to_value(counts.report()).unwrap();
        assert_eq!(json[0]["hypothesis"], "H1_framing_primary_scorer");
        assert_eq!(json[0]["conditions"][0]["total"], 1);
        assert_eq!(json[0]["conditions"][0]["labels"][0]["label"], "inefficient");
        assert_eq!(json[0]["conditions"][0]["labels"][0]["percent"], 100.0);
    }

    #[test]
    fn test_classify_file_reads_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");
        crate::jsonl::write_jsonl(
            &path,
            &[
                record("H3_confirmation_causeA_vs_causeB", "causeB_primed", "3-point woes"),
                record("H3_confirmation_causeA_vs_causeB", "causeB_primed", "no idea"),
            ],
        )
        .unwrap();

        let counts = classify_file(&path).unwrap();
        assert_eq!(
            counts.get("H3_confirmation_causeA_vs_causeB", "causeB_primed", "causeB_focus"),
            1
        );
        assert_eq!(
            counts.get("H3_confirmation_causeA_vs_causeB", "causeB_primed", "mixed_or_other"),
            1
        );
    }
}
