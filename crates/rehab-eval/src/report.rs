//! Evaluation record - the persisted outcome of one session

use serde::{Deserialize, Serialize};

use rehab_core::{ExerciseId, Warning};

use crate::KeyFrameSnapshot;

/// Stored result of one patient session
///
/// All scores are whole numbers. `patient_pose` holds only key-frame
/// angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub exercise_id: ExerciseId,
    /// Final score, 0-100
    pub score: u32,
    /// Mean frame similarity, 0-100
    pub accuracy: u32,
    pub reps_completed: u32,
    pub reps_expected: u32,
    /// Angle component, 0-40
    pub angle_score: u32,
    /// Rep component, 0-30
    pub rep_score: u32,
    /// Stability component, 0-20
    pub stability_score: u32,
    /// Completion bonus, 0 or 10
    pub completion_score: u32,
    pub warnings: Vec<Warning>,
    pub has_alerts: bool,
    pub patient_pose: KeyFrameSnapshot,
}
