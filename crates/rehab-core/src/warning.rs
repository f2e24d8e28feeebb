//! Warning and recommendation tags
//!
//! Tags are emitted, not acted upon. Escalation policy belongs to the
//! clinician workflow downstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Joint, JointKind};

/// Clinical warning tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Warning {
    /// `{joint}_deviation`: joint off by more than 1.5x tolerance
    Deviation(Joint),
    /// Patient joint beyond the exercise's safety limit
    UnsafeAngle,
    LowScore,
    LowStability,
    IncompleteReps,
    SafetyConcern,
}

impl Warning {
    /// Tags that require clinician attention
    pub fn is_alert(self) -> bool {
        matches!(
            self,
            Warning::LowScore | Warning::SafetyConcern | Warning::UnsafeAngle
        )
    }

    /// Tags whose name mentions an unsafe movement
    pub fn is_unsafe(self) -> bool {
        self.to_string().contains("unsafe")
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Deviation(joint) => write!(f, "{}_deviation", joint),
            Warning::UnsafeAngle => f.write_str("unsafe_angle"),
            Warning::LowScore => f.write_str("low_score"),
            Warning::LowStability => f.write_str("low_stability"),
            Warning::IncompleteReps => f.write_str("incomplete_reps"),
            Warning::SafetyConcern => f.write_str("safety_concern"),
        }
    }
}

/// Unrecognised tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for Warning {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let warning = match s {
            "unsafe_angle" => Warning::UnsafeAngle,
            "low_score" => Warning::LowScore,
            "low_stability" => Warning::LowStability,
            "incomplete_reps" => Warning::IncompleteReps,
            "safety_concern" => Warning::SafetyConcern,
            other => other
                .strip_suffix("_deviation")
                .and_then(Joint::from_name)
                .map(Warning::Deviation)
                .ok_or_else(|| UnknownTag(s.to_string()))?,
        };
        Ok(warning)
    }
}

impl From<Warning> for String {
    fn from(w: Warning) -> String {
        w.to_string()
    }
}

impl TryFrom<String> for Warning {
    type Error = UnknownTag;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Directional correction for a deviating joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    RaiseArmHigher,
    LowerArmSlightly,
    StraightenArm,
    BendElbowMore,
    BendKneeMore,
    StraightenLeg,
}

impl Recommendation {
    /// Correction for `joint` given whether the patient is below the reference.
    /// Hips have no directional cue.
    pub fn for_joint(joint: Joint, below_reference: bool) -> Option<Recommendation> {
        let rec = match (joint.kind(), below_reference) {
            (JointKind::Shoulder, true) => Recommendation::RaiseArmHigher,
            (JointKind::Shoulder, false) => Recommendation::LowerArmSlightly,
            (JointKind::Elbow, true) => Recommendation::StraightenArm,
            (JointKind::Elbow, false) => Recommendation::BendElbowMore,
            (JointKind::Knee, true) => Recommendation::BendKneeMore,
            (JointKind::Knee, false) => Recommendation::StraightenLeg,
            (JointKind::Hip, _) => return None,
        };
        Some(rec)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::RaiseArmHigher => "raise_arm_higher",
            Recommendation::LowerArmSlightly => "lower_arm_slightly",
            Recommendation::StraightenArm => "straighten_arm",
            Recommendation::BendElbowMore => "bend_elbow_more",
            Recommendation::BendKneeMore => "bend_knee_more",
            Recommendation::StraightenLeg => "straighten_leg",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
