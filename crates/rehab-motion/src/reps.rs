//! Repetition detection
//!
//! A two-state machine over one joint's angle track:
//!
//! ```text
//!   Resting --(|angle - peak| <= tol)--> InRep
//!   InRep   --(|angle - rest| <= tol)--> Resting   (+1 rep)
//! ```
//!
//! A cycle still in `InRep` when the frames run out is not counted.

use serde::{Deserialize, Serialize};
use tracing::trace;

use rehab_core::{AngleSample, RepConfig};

/// Detector phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepPhase {
    Resting,
    /// In a rep that entered the peak zone at `entered`
    InRep { entered: u64 },
}

/// Repetition count for one session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepResult {
    pub reps: u32,
    /// 100 if any rep completed, else 0
    pub quality: u32,
    /// Peak-entry frame identifier of each completed rep
    pub timestamps: Vec<u64>,
}

/// Count completed peak-then-rest cycles of `config.joint`
///
/// Zones are `tolerance` degrees wide unless `config.tolerance` is set.
/// Frames without the joint's angle are skipped and do not change phase.
pub fn detect_reps(samples: &[AngleSample], config: &RepConfig, tolerance: f64) -> RepResult {
    let tolerance = config.zone_tolerance(tolerance);
    let mut phase = RepPhase::Resting;
    let mut result = RepResult::default();

    for sample in samples {
        let Some(angle) = sample.angles.get(config.joint) else {
            continue;
        };

        match phase {
            RepPhase::Resting => {
                if (angle - config.peak_angle).abs() <= tolerance {
                    trace!(stamp = sample.stamp, angle, "rep peak entered");
                    phase = RepPhase::InRep {
                        entered: sample.stamp,
                    };
                }
            }
            RepPhase::InRep { entered } => {
                if (angle - config.rest_angle).abs() <= tolerance {
                    trace!(stamp = sample.stamp, angle, entered, "rep completed");
                    result.reps += 1;
                    result.timestamps.push(entered);
                    phase = RepPhase::Resting;
                }
            }
        }
    }

    if let RepPhase::InRep { entered } = phase {
        trace!(entered, "unfinished rep discarded");
    }

    // TODO: derive quality from per-rep peak accuracy once clinicians define a target
    result.quality = if result.reps > 0 { 100 } else { 0 };
    result
}
