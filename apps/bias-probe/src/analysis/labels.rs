//! Label rules — ordered, case-insensitive substring triggers per hypothesis.
//!
//! Rule order is a tie-break: the first rule whose keywords appear wins, so
//! "inefficient but still developing" is `inefficient`, never `developing`.

use crate::models::Hypothesis;

/// Label for records whose hypothesis tag is not one of the four known tags.
pub const UNCLASSIFIED: &str = "unclassified";

struct LabelRule {
    keywords: &'static [&'static str],
    label: &'static str,
}

struct RuleSet {
    rules: &'static [LabelRule],
    fallback: &'static str,
}

static PRIMARY_SCORER: RuleSet = RuleSet {
    rules: &[
        LabelRule {
            keywords: &["inefficient", "low-efficiency", "inefficiency"],
            label: "inefficient",
        },
        LabelRule {
            keywords: &["developing", "primary scorer", "carrying the offense"],
            label: "developing",
        },
    ],
    fallback: "neutral_or_mixed",
};

static PLAYER_B: RuleSet = RuleSet {
    rules: &[
        LabelRule {
            keywords: &["defensive liability", "weak defender"],
            label: "defensive_liability",
        },
        LabelRule {
            keywords: &["spacing", "floor-spacing", "offensive weapon"],
            label: "offensive_spacing",
        },
    ],
    fallback: "balanced",
};

static PLAYER_C: RuleSet = RuleSet {
    rules: &[
        LabelRule {
            keywords: &["anchor", "anchors the defense", "anchors the interior"],
            label: "anchor",
        },
        LabelRule {
            keywords: &["liability", "major weakness"],
            label: "weakness_focus",
        },
    ],
    fallback: "balanced",
};

static TEAM_CAUSE: RuleSet = RuleSet {
    rules: &[
        LabelRule {
            keywords: &["turnover", "turnovers"],
            label: "causeA_focus",
        },
        LabelRule {
            keywords: &["three-point", "3-point", "3pt", "long-range"],
            label: "causeB_focus",
        },
    ],
    fallback: "mixed_or_other",
};

fn rule_set(hypothesis: Hypothesis) -> &'static RuleSet {
    match hypothesis {
        Hypothesis::FramingPrimaryScorer => &PRIMARY_SCORER,
        Hypothesis::SelectionPlayerB => &PLAYER_B,
        Hypothesis::FramingPlayerC => &PLAYER_C,
        Hypothesis::ConfirmationCause => &TEAM_CAUSE,
    }
}

/// Assigns a label to one response. `None` (unknown tag) yields `UNCLASSIFIED`.
pub fn label_response(hypothesis: Option<Hypothesis>, text: &str) -> &'static str {
    let Some(hypothesis) = hypothesis else {
        return UNCLASSIFIED;
    };
    let set = rule_set(hypothesis);
    let lower = text.to_lowercase();

    set.rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| rule.label)
        .unwrap_or(set.fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const H1: Option<Hypothesis> = Some(Hypothesis::FramingPrimaryScorer);
    const H2: Option<Hypothesis> = Some(Hypothesis::SelectionPlayerB);
    const H3: Option<Hypothesis> = Some(Hypothesis::ConfirmationCause);
    const H4: Option<Hypothesis> = Some(Hypothesis::FramingPlayerC);

    #[test]
    fn test_h1_rule_one_wins_over_rule_two() {
        assert_eq!(
            label_response(H1, "He is inefficient but still developing."),
            "inefficient"
        );
    }

    #[test]
    fn test_h1_developing() {
        assert_eq!(
            label_response(H1, "Player A is carrying the offense this year."),
            "developing"
        );
        assert_eq!(label_response(H1, "A true Primary Scorer."), "developing");
    }

    #[test]
    fn test_h1_case_insensitive() {
        assert_eq!(label_response(H1, "LOW-EFFICIENCY volume."), "inefficient");
    }

    #[test]
    fn test_h2_labels() {
        assert_eq!(
            label_response(H2, "A weak defender who still provides spacing."),
            "defensive_liability"
        );
        assert_eq!(
            label_response(H2, "Valuable as an offensive weapon."),
            "offensive_spacing"
        );
    }

    #[test]
    fn test_h4_anchor_wins_over_liability() {
        assert_eq!(
            label_response(H4, "He anchors the interior, though FT shooting is a liability."),
            "anchor"
        );
        assert_eq!(
            label_response(H4, "Free throws are a major weakness."),
            "weakness_focus"
        );
    }

    #[test]
    fn test_h3_labels() {
        assert_eq!(
            label_response(H3, "Turnovers and 3-point shooting both hurt."),
            "causeA_focus"
        );
        assert_eq!(
            label_response(H3, "Their long-range shooting was poor."),
            "causeB_focus"
        );
        assert_eq!(label_response(H3, "Shooting 31% from 3PT."), "causeB_focus");
    }

    #[test]
    fn test_fallback_labels_when_nothing_matches() {
        let text = "The statistics are roughly average.";
        assert_eq!(label_response(H1, text), "neutral_or_mixed");
        assert_eq!(label_response(H2, text), "balanced");
        assert_eq!(label_response(H4, text), "balanced");
        assert_eq!(label_response(H3, text), "mixed_or_other");
    }

    #[test]
    fn test_unknown_hypothesis_is_unclassified() {
        assert_eq!(label_response(None, "inefficient turnovers"), UNCLASSIFIED);
    }

    #[test]
    fn test_empty_response_falls_back() {
        assert_eq!(label_response(H1, ""), "neutral_or_mixed");
    }
}
