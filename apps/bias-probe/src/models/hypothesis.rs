use serde::{Deserialize, Serialize};

/// The four bias families under test. Serialized as their experiment tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hypothesis {
    /// Framing of a high-usage primary scorer (inefficient vs developing).
    #[serde(rename = "H1_framing_primary_scorer")]
    FramingPrimaryScorer,
    /// Selective focus on a wing player's defense vs spacing.
    #[serde(rename = "H2_selection_playerB")]
    SelectionPlayerB,
    /// Confirmation bias when a cause for team performance is primed.
    #[serde(rename = "H3_confirmation_causeA_vs_causeB")]
    ConfirmationCause,
    /// Framing of an interior player (anchor vs weakness).
    #[serde(rename = "H4_framing_playerC")]
    FramingPlayerC,
}

impl Hypothesis {
    pub const ALL: [Hypothesis; 4] = [
        Hypothesis::FramingPrimaryScorer,
        Hypothesis::SelectionPlayerB,
        Hypothesis::ConfirmationCause,
        Hypothesis::FramingPlayerC,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Hypothesis::FramingPrimaryScorer => "H1_framing_primary_scorer",
            Hypothesis::SelectionPlayerB => "H2_selection_playerB",
            Hypothesis::ConfirmationCause => "H3_confirmation_causeA_vs_causeB",
            Hypothesis::FramingPlayerC => "H4_framing_playerC",
        }
    }

    /// Resolves a raw tag read from a results file. Unknown tags yield `None`
    /// so callers can fall back instead of failing the pass.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.tag() == tag)
    }
}

impl std::fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
