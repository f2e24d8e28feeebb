//! Landmarks - tracked body keypoints in the 33-point body model
//!
//! Coordinates arrive pre-normalized to roughly [0, 1] by the upstream
//! tracker. Nothing in this crate re-normalizes or validates counts.

use serde::{Deserialize, Serialize};

/// Number of landmarks in one body pose
pub const LANDMARK_COUNT: usize = 33;

/// Minimum visibility for a landmark to take part in an angle
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// One tracked body keypoint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Tracker confidence, 0-1
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// Fully visible landmark on the image plane
    pub fn visible(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// Visible enough to contribute to a joint angle (inclusive threshold)
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility >= VISIBILITY_THRESHOLD
    }

    /// Midpoint of two landmarks; visibility is the lower of the two
    pub fn midpoint(&self, other: &Landmark) -> Landmark {
        Landmark {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
            visibility: self.visibility.min(other.visibility),
        }
    }

    /// Euclidean distance in the image plane (z ignored)
    pub fn distance_2d(&self, other: &Landmark) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Landmark index in the standard 33-point body model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BodyLandmark {
    // Face
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,

    // Upper body
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,

    // Hands
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,

    // Lower body
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,

    // Feet
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyLandmark {
    /// Position in the landmark sequence
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
