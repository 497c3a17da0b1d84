//! Experiment catalog — three conditions (negative/selective, positive/selective, neutral)
//! for each of the four hypotheses.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::*;
use crate::jsonl::write_jsonl;
use crate::models::{Hypothesis, PromptRecord};

/// Static description of one prompt variant before the base context is substituted.
struct Variant {
    prompt_id: &'static str,
    hypothesis: Hypothesis,
    condition: &'static str,
    base: &'static str,
    clause: &'static str,
    notes: &'static str,
}

const CATALOG: &[Variant] = &[
    Variant {
        prompt_id: "H1_primary_scorer_negative",
        hypothesis: Hypothesis::FramingPrimaryScorer,
        condition: "negative_frame",
        base: PLAYER_BASE_CONTEXT,
        clause: H1_NEGATIVE,
        notes: "Negative framing of Player A as struggling/inefficient.",
    },
    Variant {
        prompt_id: "H1_primary_scorer_positive",
        hypothesis: Hypothesis::FramingPrimaryScorer,
        condition: "positive_frame",
        base: PLAYER_BASE_CONTEXT,
        clause: H1_POSITIVE,
        notes: "Positive framing of Player A as developing/primary scorer.",
    },
    Variant {
        prompt_id: "H1_primary_scorer_neutral",
        hypothesis: Hypothesis::FramingPrimaryScorer,
        condition: "neutral",
        base: PLAYER_BASE_CONTEXT,
        clause: H1_NEUTRAL,
        notes: "Neutral baseline for Player A.",
    },
    Variant {
        prompt_id: "H2_playerB_defense_focus",
        hypothesis: Hypothesis::SelectionPlayerB,
        condition: "defense_focus",
        base: PLAYER_BASE_CONTEXT,
        clause: H2_DEFENSE_FOCUS,
        notes: "Restricts Player B to defensive and rebounding stats.",
    },
    Variant {
        prompt_id: "H2_playerB_offense_focus",
        hypothesis: Hypothesis::SelectionPlayerB,
        condition: "offense_focus",
        base: PLAYER_BASE_CONTEXT,
        clause: H2_OFFENSE_FOCUS,
        notes: "Restricts Player B to shooting and spacing stats.",
    },
    Variant {
        prompt_id: "H2_playerB_balanced",
        hypothesis: Hypothesis::SelectionPlayerB,
        condition: "balanced",
        base: PLAYER_BASE_CONTEXT,
        clause: H2_BALANCED,
        notes: "Balanced baseline for Player B.",
    },
    Variant {
        prompt_id: "H3_causeA_primed",
        hypothesis: Hypothesis::ConfirmationCause,
        condition: "causeA_primed",
        base: TEAM_BASE_CONTEXT,
        clause: H3_CAUSE_A_PRIMED,
        notes: "Primed with turnovers (cause A) as the main issue.",
    },
    Variant {
        prompt_id: "H3_causeB_primed",
        hypothesis: Hypothesis::ConfirmationCause,
        condition: "causeB_primed",
        base: TEAM_BASE_CONTEXT,
        clause: H3_CAUSE_B_PRIMED,
        notes: "Primed with long-range shooting (cause B) as the main issue.",
    },
    Variant {
        prompt_id: "H3_team_neutral",
        hypothesis: Hypothesis::ConfirmationCause,
        condition: "neutral",
        base: TEAM_BASE_CONTEXT,
        clause: H3_NEUTRAL,
        notes: "Neutral baseline: the model picks the factors.",
    },
    Variant {
        prompt_id: "H4_playerC_anchor",
        hypothesis: Hypothesis::FramingPlayerC,
        condition: "anchor_frame",
        base: PLAYER_BASE_CONTEXT,
        clause: H4_ANCHOR,
        notes: "Positive framing of Player C.",
    },
    Variant {
        prompt_id: "H4_playerC_weakness_focus",
        hypothesis: Hypothesis::FramingPlayerC,
        condition: "weakness_frame",
        base: PLAYER_BASE_CONTEXT,
        clause: H4_WEAKNESS,
        notes: "Negative framing focused on a specific weakness.",
    },
    Variant {
        prompt_id: "H4_playerC_neutral",
        hypothesis: Hypothesis::FramingPlayerC,
        condition: "neutral",
        base: PLAYER_BASE_CONTEXT,
        clause: H4_NEUTRAL,
        notes: "Neutral baseline for Player C.",
    },
];

/// Builds the full prompt catalog. Deterministic; always 12 records.
pub fn generate() -> Vec<PromptRecord> {
    CATALOG
        .iter()
        .map(|v| PromptRecord {
            prompt_id: v.prompt_id.to_string(),
            hypothesis: v.hypothesis,
            condition: v.condition.to_string(),
            question: format!("{}\n\n{}", v.base, v.clause),
            notes: v.notes.to_string(),
        })
        .collect()
}

/// Generates the catalog and writes it to `path`, overwriting any existing file.
pub fn save_prompts(path: &Path) -> Result<Vec<PromptRecord>, AppError> {
    let prompts = generate();
    write_jsonl(path, &prompts)?;
    info!("Saved {} prompts to {}", prompts.len(), path.display());
    Ok(prompts)
}
