//! Ground-truth statistics and the thresholds the claim rules compare against.
//!
//! Both are plain values handed to the validator; nothing here is global.
//! A numeric stat of `0.0` means "not provided" and disables the rules that read it,
//! apart from the elite-defender check.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Primary scorer (Player A).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerStats {
    /// points per game
    pub ppg: f64,
    /// field-goal percentage (0–1)
    pub fg: f64,
    /// three-point percentage (0–1)
    pub tp: f64,
    /// free-throw percentage (0–1)
    pub ft: f64,
}

/// Wing / role player (Player B).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingStats {
    pub ppg: f64,
    pub fg: f64,
    pub tp: f64,
    pub rpg: f64,
    /// steals per game
    pub stl: f64,
    /// blocks per game
    pub blk: f64,
}

/// Interior player (Player C).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteriorStats {
    pub ppg: f64,
    pub rpg: f64,
    pub blk: f64,
    pub ft: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub ppg: f64,
    pub opp_ppg: f64,
    pub tov: f64,
    pub opp_tov: f64,
    pub tp: f64,
    pub opp_tp: f64,
    pub rebound_margin_positive: bool,
}

/// Reference statistics per entity. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundTruth {
    pub primary_scorer: ScorerStats,
    #[serde(rename = "playerB")]
    pub player_b: WingStats,
    #[serde(rename = "playerC")]
    pub player_c: InteriorStats,
    pub team: TeamStats,
}

impl GroundTruth {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        load_json(path)
    }

    /// The table `validate` uses when no file is given: every stat unset,
    /// rebounding margin positive. Mirrors `data/ground_truth.example.json`.
    pub fn example() -> Self {
        Self {
            team: TeamStats {
                rebound_margin_positive: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Cut-offs used by the claim rules. The defaults are example values;
/// override them per dataset with a JSON file naming any subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationThresholds {
    /// "very efficient" contradicts FG% below this.
    pub scorer_min_fg: f64,
    /// "very efficient" contradicts 3P% below this.
    pub scorer_min_tp: f64,
    /// "low-usage" contradicts PPG above this.
    pub scorer_low_usage_max_ppg: f64,
    /// "poor shooter" contradicts 3P% at or above this.
    pub wing_solid_tp: f64,
    /// "elite defender" contradicts steals and blocks both below this.
    pub wing_min_stocks: f64,
    /// "excellent free-throw shooter" contradicts FT% below this.
    pub interior_min_ft: f64,
    /// "elite rim protector" contradicts blocks per game below this.
    pub interior_min_blk: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            scorer_min_fg: 0.44,
            scorer_min_tp: 0.32,
            scorer_low_usage_max_ppg: 10.0,
            wing_solid_tp: 0.35,
            wing_min_stocks: 1.0,
            interior_min_ft: 0.75,
            interior_min_blk: 1.5,
        }
    }
}

impl ValidationThresholds {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        load_json(path)
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Config(format!("invalid JSON in {}: {e}", path.display())))
}
