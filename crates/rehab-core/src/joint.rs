//! Named joints and joint-angle sets

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BodyLandmark;

/// Body side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Joint family, independent of side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    Shoulder,
    Elbow,
    Hip,
    Knee,
}

/// A named joint angle measured by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
}

impl Joint {
    /// All joints in comparison order
    pub fn all() -> &'static [Joint] {
        &[
            Joint::LeftShoulder,
            Joint::RightShoulder,
            Joint::LeftElbow,
            Joint::RightElbow,
            Joint::LeftHip,
            Joint::RightHip,
            Joint::LeftKnee,
            Joint::RightKnee,
        ]
    }

    /// Number of joints
    pub fn count() -> usize {
        8
    }

    pub fn side(self) -> Side {
        match self {
            Joint::LeftShoulder | Joint::LeftElbow | Joint::LeftHip | Joint::LeftKnee => Side::Left,
            _ => Side::Right,
        }
    }

    pub fn kind(self) -> JointKind {
        match self {
            Joint::LeftShoulder | Joint::RightShoulder => JointKind::Shoulder,
            Joint::LeftElbow | Joint::RightElbow => JointKind::Elbow,
            Joint::LeftHip | Joint::RightHip => JointKind::Hip,
            Joint::LeftKnee | Joint::RightKnee => JointKind::Knee,
        }
    }

    /// Defining landmark triple `(p1, vertex, p2)`; the angle is measured at `vertex`
    ///
    /// - shoulder: hip, shoulder, elbow
    /// - elbow: shoulder, elbow, wrist
    /// - hip: shoulder, hip, knee
    /// - knee: hip, knee, ankle
    pub fn triple(self) -> (BodyLandmark, BodyLandmark, BodyLandmark) {
        use BodyLandmark::*;

        match self {
            Joint::LeftShoulder => (LeftHip, LeftShoulder, LeftElbow),
            Joint::RightShoulder => (RightHip, RightShoulder, RightElbow),
            Joint::LeftElbow => (LeftShoulder, LeftElbow, LeftWrist),
            Joint::RightElbow => (RightShoulder, RightElbow, RightWrist),
            Joint::LeftHip => (LeftShoulder, LeftHip, LeftKnee),
            Joint::RightHip => (RightShoulder, RightHip, RightKnee),
            Joint::LeftKnee => (LeftHip, LeftKnee, LeftAnkle),
            Joint::RightKnee => (RightHip, RightKnee, RightAnkle),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
        }
    }

    /// Parse a snake_case joint name
    pub fn from_name(name: &str) -> Option<Joint> {
        Joint::all().iter().copied().find(|j| j.as_str() == name)
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angles in degrees keyed by joint
///
/// A joint is absent when it could not be measured. Absent is never
/// the same as 0 degrees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointAngles(BTreeMap<Joint, f64>);

impl JointAngles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, joint: Joint) -> Option<f64> {
        self.0.get(&joint).copied()
    }

    pub fn set(&mut self, joint: Joint, degrees: f64) {
        self.0.insert(joint, degrees);
    }

    /// Builder form of [`JointAngles::set`]
    pub fn with(mut self, joint: Joint, degrees: f64) -> Self {
        self.set(joint, degrees);
        self
    }

    pub fn remove(&mut self, joint: Joint) -> Option<f64> {
        self.0.remove(&joint)
    }

    pub fn contains(&self, joint: Joint) -> bool {
        self.0.contains_key(&joint)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present angles in joint order
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f64)> + '_ {
        self.0.iter().map(|(j, a)| (*j, *a))
    }
}

impl FromIterator<(Joint, f64)> for JointAngles {
    fn from_iter<I: IntoIterator<Item = (Joint, f64)>>(iter: I) -> Self {
        JointAngles(iter.into_iter().collect())
    }
}
