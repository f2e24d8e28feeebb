//! Exercises - clinician-recorded reference performances
//!
//! An exercise and its reference pose are created together and are
//! read-only to the scoring engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{validate_tolerance, ExerciseId, Frame, Joint, RehabError, RehabResult};

/// Exercise difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Repetition detection settings for one exercise
///
/// A rep is the designated joint entering the peak zone and then
/// returning to the rest zone. Both zones are `tolerance` degrees wide
/// on either side; with no tolerance set, the exercise tolerance applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepConfig {
    /// Joint whose angle drives the rep cycle
    pub joint: Joint,
    /// Peak angle in degrees
    pub peak_angle: f64,
    /// Rest angle in degrees
    pub rest_angle: f64,
    /// Zone half-width in degrees, overriding the exercise tolerance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

impl Default for RepConfig {
    fn default() -> Self {
        // Shoulder abduction to horizontal and back
        RepConfig {
            joint: Joint::LeftShoulder,
            peak_angle: 90.0,
            rest_angle: 30.0,
            tolerance: None,
        }
    }
}

impl RepConfig {
    pub fn new(joint: Joint, peak_angle: f64, rest_angle: f64, tolerance: f64) -> Self {
        RepConfig {
            joint,
            peak_angle,
            rest_angle,
            tolerance: Some(tolerance),
        }
    }

    /// Zone half-width, falling back to `exercise_tolerance`
    pub fn zone_tolerance(&self, exercise_tolerance: f64) -> f64 {
        self.tolerance.unwrap_or(exercise_tolerance)
    }
}

/// Maximum safe angle per joint
///
/// Used for post-operative range-of-motion restrictions. A patient
/// joint above its limit is tagged `unsafe_angle`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetyLimits(BTreeMap<Joint, f64>);

impl SafetyLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max(mut self, joint: Joint, max_degrees: f64) -> Self {
        self.0.insert(joint, max_degrees);
        self
    }

    pub fn max(&self, joint: Joint) -> Option<f64> {
        self.0.get(&joint).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joints with a configured limit
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f64)> + '_ {
        self.0.iter().map(|(j, m)| (*j, *m))
    }
}

/// Reference pose - the clinician's recorded frame sequence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferencePose {
    pub frames: Vec<Frame>,
    /// Capture rate
    pub fps: f64,
    /// Recording length
    pub duration_secs: f64,
    /// Indices of representative frames, if the clinician marked any
    #[serde(default)]
    pub key_frames: Vec<usize>,
}

impl ReferencePose {
    pub fn new(frames: Vec<Frame>, fps: f64) -> Self {
        let duration_secs = if fps > 0.0 {
            frames.len() as f64 / fps
        } else {
            0.0
        };
        Self {
            frames,
            fps,
            duration_secs,
            key_frames: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Exercise entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    /// Allowed angular deviation in degrees
    pub tolerance: f64,
    /// Repetitions the patient is asked to perform
    pub expected_reps: u32,
    /// Hold time at the peak, informational
    #[serde(default)]
    pub hold_duration_secs: f64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub rep_config: RepConfig,
    #[serde(default)]
    pub safety_limits: SafetyLimits,
    pub reference: ReferencePose,
}

impl Exercise {
    /// New exercise with default rep detection and no safety limits
    pub fn new(
        id: ExerciseId,
        name: impl Into<String>,
        tolerance: f64,
        expected_reps: u32,
        reference: ReferencePose,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tolerance,
            expected_reps,
            hold_duration_secs: 0.0,
            difficulty: Difficulty::default(),
            rep_config: RepConfig::default(),
            safety_limits: SafetyLimits::default(),
            reference,
        }
    }

    pub fn with_rep_config(mut self, rep_config: RepConfig) -> Self {
        self.rep_config = rep_config;
        self
    }

    pub fn with_safety_limits(mut self, limits: SafetyLimits) -> Self {
        self.safety_limits = limits;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Check the invariants the scoring engine divides by
    pub fn validate(&self) -> RehabResult<()> {
        validate_tolerance(self.tolerance)?;
        if let Some(tolerance) = self.rep_config.tolerance {
            validate_tolerance(tolerance)?;
        }
        if self.expected_reps == 0 {
            return Err(RehabError::InvalidExpectedReps(0));
        }
        if self.reference.is_empty() {
            return Err(RehabError::EmptyReference);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JointAngles;

    fn reference() -> ReferencePose {
        let angles = JointAngles::new().with(Joint::LeftShoulder, 90.0);
        ReferencePose::new(vec![Frame::from_angles(0, angles)], 30.0)
    }

    #[test]
    fn test_default_rep_config() {
        let config = RepConfig::default();
        assert_eq!(config.joint, Joint::LeftShoulder);
        assert_eq!(config.peak_angle, 90.0);
        assert_eq!(config.rest_angle, 30.0);
        assert_eq!(config.tolerance, None);
        assert_eq!(config.zone_tolerance(10.0), 10.0);
    }

    #[test]
    fn test_rep_tolerance_override() {
        let config = RepConfig::new(Joint::LeftElbow, 150.0, 60.0, 5.0);
        assert_eq!(config.zone_tolerance(20.0), 5.0);
    }

    #[test]
    fn test_rep_config_json_without_tolerance() {
        let config: RepConfig = serde_json::from_str(
            r#"{"joint":"right_knee","peak_angle":90.0,"rest_angle":170.0}"#,
        )
        .unwrap();
        assert_eq!(config.joint, Joint::RightKnee);
        assert_eq!(config.tolerance, None);
        assert!(!serde_json::to_string(&config).unwrap().contains("tolerance"));
    }

    #[test]
    fn test_reference_duration() {
        let pose = ReferencePose::new(vec![Frame::default(); 60], 30.0);
        assert!((pose.duration_secs - 2.0).abs() < 1e-12);

        let pose = ReferencePose::new(vec![Frame::default(); 3], 0.0);
        assert_eq!(pose.duration_secs, 0.0);
    }

    #[test]
    fn test_validate() {
        let ok = Exercise::new(ExerciseId::new(1), "abduction", 15.0, 10, reference());
        assert!(ok.validate().is_ok());

        let mut bad = ok.clone();
        bad.tolerance = 0.0;
        assert_eq!(bad.validate(), Err(RehabError::InvalidTolerance(0.0)));

        let mut bad = ok.clone();
        bad.expected_reps = 0;
        assert_eq!(bad.validate(), Err(RehabError::InvalidExpectedReps(0)));

        let mut bad = ok.clone();
        bad.reference.frames.clear();
        assert_eq!(bad.validate(), Err(RehabError::EmptyReference));

        let bad = ok.with_rep_config(RepConfig::new(Joint::LeftElbow, 150.0, 60.0, -5.0));
        assert_eq!(bad.validate(), Err(RehabError::InvalidTolerance(-5.0)));
    }

    #[test]
    fn test_safety_limits() {
        let limits = SafetyLimits::new().with_max(Joint::LeftShoulder, 120.0);
        assert_eq!(limits.max(Joint::LeftShoulder), Some(120.0));
        assert_eq!(limits.max(Joint::RightShoulder), None);
        assert!(!limits.is_empty());
    }
}
