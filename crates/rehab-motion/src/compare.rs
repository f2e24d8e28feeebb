//! Frame comparison - reference vs patient joint angles
//!
//! Scores fall linearly from 100 at zero difference to 0 at one
//! tolerance. A difference of exactly one tolerance still matches but
//! scores 0.

use serde::{Deserialize, Serialize};

use rehab_core::{Joint, JointAngles, Recommendation, Warning};

/// Deviation factor (in tolerances) above which a joint is flagged
pub const DEVIATION_FACTOR: f64 = 1.5;

/// Result of comparing a single angle pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleComparison {
    pub matched: bool,
    pub difference: f64,
    /// 0-100
    pub score: f64,
}

/// Compare one reference angle with one patient angle
///
/// `tolerance` must be > 0; callers validate it once per exercise.
pub fn compare_angles(reference: f64, patient: f64, tolerance: f64) -> AngleComparison {
    let difference = (reference - patient).abs();
    AngleComparison {
        matched: difference <= tolerance,
        difference,
        score: (100.0 - (difference / tolerance) * 100.0).max(0.0),
    }
}

/// Per-joint difference record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleDifference {
    pub joint: Joint,
    pub reference_angle: f64,
    pub patient_angle: f64,
    pub difference: f64,
}

/// Comparison of one reference frame against one patient frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameComparison {
    /// Mean per-joint score over joints present in both frames, 0-100
    pub similarity: f64,
    pub angle_differences: Vec<AngleDifference>,
    pub warnings: Vec<Warning>,
    pub recommendations: Vec<Recommendation>,
}

impl FrameComparison {
    /// Number of joints that were compared
    pub fn valid_joints(&self) -> usize {
        self.angle_differences.len()
    }
}

/// Compare two frames' angles joint by joint
///
/// Joints missing from either side are skipped. No comparable joints
/// gives similarity 0.
pub fn compare_pose_frames(
    reference: &JointAngles,
    patient: &JointAngles,
    tolerance: f64,
) -> FrameComparison {
    let mut result = FrameComparison::default();
    let mut total_score = 0.0;

    for &joint in Joint::all() {
        let (Some(ref_angle), Some(pat_angle)) = (reference.get(joint), patient.get(joint)) else {
            continue;
        };

        let cmp = compare_angles(ref_angle, pat_angle, tolerance);
        total_score += cmp.score;

        result.angle_differences.push(AngleDifference {
            joint,
            reference_angle: ref_angle,
            patient_angle: pat_angle,
            difference: cmp.difference,
        });

        if cmp.difference > tolerance * DEVIATION_FACTOR {
            result.warnings.push(Warning::Deviation(joint));
            if let Some(rec) = Recommendation::for_joint(joint, pat_angle < ref_angle) {
                result.recommendations.push(rec);
            }
        }
    }

    let valid = result.angle_differences.len();
    if valid > 0 {
        result.similarity = total_score / valid as f64;
    }

    result
}
