//! Exercise score aggregation
//!
//! | component  | max |
//! |------------|-----|
//! | angle      | 40  |
//! | reps       | 30  |
//! | stability  | 20  |
//! | completion | 10  |

use serde::{Deserialize, Serialize};

pub const ANGLE_WEIGHT: f64 = 40.0;
pub const REP_WEIGHT: f64 = 30.0;
pub const STABILITY_WEIGHT: f64 = 20.0;
pub const COMPLETION_BONUS: f64 = 10.0;

/// Final score with its breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseScore {
    /// Rounded and clamped to 0-100
    pub total: u32,
    pub angle_score: f64,
    pub rep_score: f64,
    pub stability_points: f64,
    pub completion_score: f64,
}

impl ExerciseScore {
    /// Unrounded sum of the four components
    pub fn raw_sum(&self) -> f64 {
        self.angle_score + self.rep_score + self.stability_points + self.completion_score
    }
}

/// Combine accuracy, reps, stability and completion into one score
///
/// `angle_accuracy` and `stability_score` are 0-100. Reps beyond the
/// expected count earn nothing extra. With nothing expected the rep
/// component is full.
pub fn calculate_exercise_score(
    angle_accuracy: f64,
    reps_completed: u32,
    reps_expected: u32,
    stability_score: f64,
    has_completed: bool,
) -> ExerciseScore {
    let rep_ratio = if reps_expected == 0 {
        1.0
    } else {
        (reps_completed as f64 / reps_expected as f64).min(1.0)
    };

    let mut score = ExerciseScore {
        total: 0,
        angle_score: angle_accuracy / 100.0 * ANGLE_WEIGHT,
        rep_score: rep_ratio * REP_WEIGHT,
        stability_points: stability_score / 100.0 * STABILITY_WEIGHT,
        completion_score: if has_completed { COMPLETION_BONUS } else { 0.0 },
    };
    score.total = score.raw_sum().round().clamp(0.0, 100.0) as u32;
    score
}
