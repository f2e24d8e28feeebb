//! Evaluation configuration

use serde::{Deserialize, Serialize};

use rehab_core::{RehabError, RehabResult};

/// Evaluation thresholds and retention settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Key frames retained in the stored record
    pub key_frame_count: usize,
    /// Totals below this raise `low_score`
    pub low_score_threshold: u32,
    /// Stability below this raises `low_stability`
    pub low_stability_threshold: f64,
    /// Fraction of expected reps below which `incomplete_reps` is raised
    pub incomplete_reps_ratio: f64,
    /// Distinct per-frame warnings carried into the session warnings
    pub max_frame_warnings: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            key_frame_count: 5,
            low_score_threshold: 40,
            low_stability_threshold: 50.0,
            incomplete_reps_ratio: 0.7,
            max_frame_warnings: 3,
        }
    }
}

impl EvaluationConfig {
    /// Tighter thresholds for the early post-operative phase
    pub fn strict() -> Self {
        EvaluationConfig {
            low_score_threshold: 50,
            low_stability_threshold: 60.0,
            incomplete_reps_ratio: 0.8,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> RehabResult<()> {
        if self.key_frame_count == 0 {
            return Err(RehabError::InvalidKeyFrameCount(0));
        }
        Ok(())
    }
}
