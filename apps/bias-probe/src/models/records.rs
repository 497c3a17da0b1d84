use serde::{Deserialize, Serialize};

use crate::models::Hypothesis;

/// One prompt variant in the experiment catalog. One line of `prompts.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    /// Unique within a generated set, e.g. `H1_primary_scorer_negative`.
    pub prompt_id: String,
    pub hypothesis: Hypothesis,
    /// e.g. `negative_frame`, `positive_frame`, `neutral`
    pub condition: String,
    /// Natural-language prompt sent to the model.
    pub question: String,
    #[serde(default)]
    pub notes: String,
}

/// A model response logged by the runner. One line of `results.jsonl`.
///
/// `hypothesis` stays a raw string: results files may be hand-edited or come
/// from a manual workflow, and an unknown tag must degrade to a fallback label
/// rather than reject the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub prompt_id: String,
    pub hypothesis: String,
    pub condition: String,
    pub prompt: String,
    pub model_name: String,
    #[serde(default)]
    pub response: String,
}

impl ResultRecord {
    pub fn from_prompt(prompt: &PromptRecord, model_name: &str, response: String) -> Self {
        Self {
            prompt_id: prompt.prompt_id.clone(),
            hypothesis: prompt.hypothesis.tag().to_string(),
            condition: prompt.condition.clone(),
            prompt: prompt.question.clone(),
            model_name: model_name.to_string(),
            response,
        }
    }

    pub fn hypothesis(&self) -> Option<Hypothesis> {
        Hypothesis::from_tag(&self.hypothesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_record_notes_default_to_empty() {
        let json = r#"{
            "prompt_id": "H2_playerB_balanced",
            "hypothesis": "H2_selection_playerB",
            "condition": "balanced",
            "question": "Describe Player B."
        }"#;
        let record: PromptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hypothesis, Hypothesis::SelectionPlayerB);
        assert_eq!(record.notes, "");
    }

    #[test]
    fn test_prompt_record_rejects_unknown_hypothesis() {
        let json = r#"{
            "prompt_id": "x",
            "hypothesis": "H9_nope",
            "condition": "neutral",
            "question": "q"
        }"#;
        assert!(serde_json::from_str::<PromptRecord>(json).is_err());
    }

    #[test]
    fn test_result_record_keeps_unknown_hypothesis() {
        let json = r#"{
            "prompt_id": "x",
            "hypothesis": "H9_nope",
            "condition": "neutral",
            "prompt": "q",
            "model_name": "m",
            "response": "r"
        }"#;
        let record: ResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hypothesis, "H9_nope");
        assert_eq!(record.hypothesis(), None);
    }

    #[test]
    fn test_result_record_response_defaults_to_empty() {
        let json = r#"{
            "prompt_id": "x",
            "hypothesis": "H4_framing_playerC",
            "condition": "neutral",
            "prompt": "q",
            "model_name": "m"
        }"#;
        let record: ResultRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.response, "");
        assert_eq!(record.hypothesis(), Some(Hypothesis::FramingPlayerC));
    }

    #[test]
    fn test_from_prompt_copies_metadata() {
        let prompt = PromptRecord {
            prompt_id: "H3_causeA_primed".to_string(),
            hypothesis: Hypothesis::ConfirmationCause,
            condition: "causeA_primed".to_string(),
            question: "Why did they lose?".to_string(),
            notes: "primed".to_string(),
        };
        let result = ResultRecord::from_prompt(&prompt, "claude-sonnet-4-5", "Turnovers.".into());
        assert_eq!(result.prompt_id, "H3_causeA_primed");
        assert_eq!(result.hypothesis, "H3_confirmation_causeA_vs_causeB");
        assert_eq!(result.condition, "causeA_primed");
        assert_eq!(result.prompt, "Why did they lose?");
        assert_eq!(result.model_name, "claude-sonnet-4-5");
        assert_eq!(result.response, "Turnovers.");
    }
}
