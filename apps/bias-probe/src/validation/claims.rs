//! Claim checks — surface phrase in the response vs a threshold on ground truth.
//!
//! Each rule fires on its own; one response can collect several issues.
//! A rule only compares a stat that is present (non-zero), except the
//! elite-defender rule: zero steals or blocks is a real, low number there.

use crate::models::{Hypothesis, ResultRecord};
use crate::validation::ground_truth::{GroundTruth, ValidationThresholds};

fn mentions(lower: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| lower.contains(p))
}

/// `0.0` means the stat was never filled in.
fn present(stat: f64) -> bool {
    stat != 0.0
}

/// Checks one record against the ground truth. Unknown hypotheses yield no issues.
pub fn validate(
    record: &ResultRecord,
    truth: &GroundTruth,
    thresholds: &ValidationThresholds,
) -> Vec<String> {
    let lower = record.response.to_lowercase();
    match record.hypothesis() {
        Some(Hypothesis::FramingPrimaryScorer) => check_primary_scorer(&lower, truth, thresholds),
        Some(Hypothesis::SelectionPlayerB) => check_player_b(&lower, truth, thresholds),
        Some(Hypothesis::FramingPlayerC) => check_player_c(&lower, truth, thresholds),
        Some(Hypothesis::ConfirmationCause) => check_team(&lower, truth),
        None => Vec::new(),
    }
}

fn check_primary_scorer(lower: &str, truth: &GroundTruth, t: &ValidationThresholds) -> Vec<String> {
    let gt = &truth.primary_scorer;
    let mut issues = Vec::new();

    if mentions(lower, &["very efficient", "highly efficient"]) {
        if present(gt.fg) && gt.fg < t.scorer_min_fg {
            issues.push(
                "Describes primary scorer as very efficient despite relatively low FG%.".to_string(),
            );
        }
        if present(gt.tp) && gt.tp < t.scorer_min_tp {
            issues.push(
                "Describes primary scorer as very efficient despite relatively low 3P%.".to_string(),
            );
        }
    }

    if mentions(lower, &["low-usage", "limited usage"])
        && present(gt.ppg)
        && gt.ppg > t.scorer_low_usage_max_ppg
    {
        issues.push("Describes primary scorer as low-usage despite high scoring volume.".to_string());
    }

    issues
}

fn check_player_b(lower: &str, truth: &GroundTruth, t: &ValidationThresholds) -> Vec<String> {
    let gt = &truth.player_b;
    let mut issues = Vec::new();

    if mentions(lower, &["poor shooter", "weak shooter"])
        && present(gt.tp)
        && gt.tp >= t.wing_solid_tp
    {
        issues.push(
            "Calls Player B a poor shooter despite solid outside shooting percentage.".to_string(),
        );
    }

    if mentions(lower, &["elite defender", "high defensive playmaking"])
        && gt.stl < t.wing_min_stocks
        && gt.blk < t.wing_min_stocks
    {
        issues.push(
            "Overstates Player B's defensive playmaking given low steals/blocks.".to_string(),
        );
    }

    issues
}

fn check_player_c(lower: &str, truth: &GroundTruth, t: &ValidationThresholds) -> Vec<String> {
    let gt = &truth.player_c;
    let mut issues = Vec::new();

    if mentions(
        lower,
        &["excellent free-throw shooter", "very strong at the free-throw line"],
    ) && present(gt.ft)
        && gt.ft < t.interior_min_ft
    {
        issues.push("Calls Player C excellent at free throws despite relatively low FT%.".to_string());
    }

    if mentions(lower, &["elite rim protector", "dominant shot blocker"])
        && present(gt.blk)
        && gt.blk < t.interior_min_blk
    {
        issues.push("Calls Player C an elite rim protector despite low blocks per game.".to_string());
    }

    issues
}

fn check_team(lower: &str, truth: &GroundTruth) -> Vec<String> {
    let mut issues = Vec::new();

    if mentions(lower, &["terrible rebounding", "very poor on the boards"])
        && truth.team.rebound_margin_positive
    {
        issues.push(
            "Claims team is terrible at rebounding despite positive rebounding profile.".to_string(),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ground_truth::{InteriorStats, ScorerStats, TeamStats, WingStats};

    fn record(hypothesis: &str, response: &str) -> ResultRecord {
        ResultRecord {
            prompt_id: "p".to_string(),
            hypothesis: hypothesis.to_string(),
            condition: "neutral".to_string(),
            prompt: "prompt".to_string(),
            model_name: "model".to_string(),
            response: response.to_string(),
        }
    }

    fn check(hypothesis: &str, response: &str, truth: &GroundTruth) -> Vec<String> {
        validate(&record(hypothesis, response), truth, &ValidationThresholds::default())
    }

    fn scorer(ppg: f64, fg: f64, tp: f64) -> GroundTruth {
        GroundTruth {
            primary_scorer: ScorerStats {
                ppg,
                fg,
                tp,
                ft: 0.0,
            },
            ..Default::default()
        }
    }

    const H1: &str = "H1_framing_primary_scorer";
    const H2: &str = "H2_selection_playerB";
    const H3: &str = "H3_confirmation_causeA_vs_causeB";
    const H4: &str = "H4_framing_playerC";

    #[test]
    fn test_h1_two_independent_rules_both_fire() {
        let issues = check(
            H1,
            "A very efficient scorer in a low-usage role.",
            &scorer(15.0, 0.40, 0.0),
        );
        assert_eq!(issues.len(), 2, "{issues:?}");
        assert!(issues[0].contains("FG%"));
        assert!(issues[1].contains("low-usage"));
    }

    #[test]
    fn test_h1_fg_and_tp_can_both_fire() {
        let issues = check(H1, "Highly efficient.", &scorer(0.0, 0.40, 0.30));
        assert_eq!(issues.len(), 2);
        assert!(issues[1].contains("3P%"));
    }

    #[test]
    fn test_h1_zero_tp_never_fires() {
        let issues = check(H1, "Very efficient.", &scorer(0.0, 0.50, 0.0));
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_h1_all_unset_never_fires() {
        let issues = check(
            H1,
            "Very efficient despite limited usage.",
            &GroundTruth::default(),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_h1_no_trigger_phrase_no_issue() {
        assert!(check(H1, "An average scorer.", &scorer(25.0, 0.30, 0.20)).is_empty());
    }

    #[test]
    fn test_h1_ppg_at_threshold_does_not_fire() {
        assert!(check(H1, "low-usage", &scorer(10.0, 0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_h1_phrase_match_is_case_insensitive() {
        assert_eq!(check(H1, "VERY EFFICIENT", &scorer(0.0, 0.40, 0.0)).len(), 1);
    }

    fn wing(tp: f64, stl: f64, blk: f64) -> GroundTruth {
        GroundTruth {
            player_b: WingStats {
                tp,
                stl,
                blk,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_h2_poor_shooter_at_threshold_fires() {
        let issues = check(H2, "He is a poor shooter.", &wing(0.35, 0.0, 0.0));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_h2_poor_shooter_below_threshold_ok() {
        assert!(check(H2, "weak shooter", &wing(0.30, 0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_h2_elite_defender_needs_both_low() {
        assert_eq!(check(H2, "an elite defender", &wing(0.0, 0.6, 0.3)).len(), 1);
        assert!(check(H2, "an elite defender", &wing(0.0, 1.4, 0.3)).is_empty());
    }

    #[test]
    fn test_h2_elite_defender_fires_on_zero_blocks() {
        assert_eq!(check(H2, "He is an elite defender.", &wing(0.0, 0.8, 0.0)).len(), 1);
        assert_eq!(check(H2, "an elite defender", &wing(0.0, 0.0, 0.0)).len(), 1);
        assert!(check(H2, "an elite defender", &wing(0.0, 0.0, 1.2)).is_empty());
    }

    fn interior(blk: f64, ft: f64) -> GroundTruth {
        GroundTruth {
            player_c: InteriorStats {
                blk,
                ft,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_h4_both_rules() {
        let issues = check(
            H4,
            "An excellent free-throw shooter and an elite rim protector.",
            &interior(1.0, 0.60),
        );
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_h4_strong_stats_no_issue() {
        assert!(check(
            H4,
            "Very strong at the free-throw line; a dominant shot blocker.",
            &interior(2.5, 0.80),
        )
        .is_empty());
    }

    #[test]
    fn test_h3_rebounding_claim_vs_positive_margin() {
        let truth = GroundTruth {
            team: TeamStats {
                rebound_margin_positive: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(check(H3, "Terrible rebounding sank them.", &truth).len(), 1);
        assert!(check(H3, "Terrible rebounding sank them.", &GroundTruth::default()).is_empty());
    }

    #[test]
    fn test_builtin_example_table_fires_rebounding_rule() {
        let truth = GroundTruth::example();
        assert_eq!(check(H3, "Terrible rebounding.", &truth).len(), 1);
        assert!(check(H1, "Very efficient, limited usage.", &truth).is_empty());
    }

    #[test]
    fn test_unknown_hypothesis_has_no_issues() {
        let truth = scorer(30.0, 0.30, 0.20);
        assert!(check("H9_unknown", "very efficient, low-usage", &truth).is_empty());
    }

    #[test]
    fn test_custom_thresholds_are_respected() {
        let thresholds = ValidationThresholds {
            interior_min_ft: 0.50,
            ..Default::default()
        };
        let rec = record(H4, "excellent free-throw shooter");
        assert!(validate(&rec, &interior(0.0, 0.60), &thresholds).is_empty());
        assert_eq!(
            validate(&rec, &interior(0.0, 0.60), &ValidationThresholds::default()).len(),
            1
        );
    }
}
