//! Frames - time-sampled body poses

use serde::{Deserialize, Serialize};

use crate::{BodyLandmark, JointAngles, Landmark};

/// One time-sampled snapshot of all 33 landmarks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Position in the recorded sequence
    pub index: usize,

    /// Capture time in milliseconds, if the tracker supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,

    /// Landmarks in body-model order
    #[serde(default)]
    pub landmarks: Vec<Landmark>,

    /// Pre-annotated joint angles; computed on demand when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angles: Option<JointAngles>,
}

impl Frame {
    /// Frame built from raw landmarks
    pub fn new(index: usize, landmarks: Vec<Landmark>) -> Self {
        Self {
            index,
            timestamp_ms: None,
            landmarks,
            angles: None,
        }
    }

    /// Frame carrying only pre-computed angles
    pub fn from_angles(index: usize, angles: JointAngles) -> Self {
        Self {
            index,
            timestamp_ms: None,
            landmarks: Vec::new(),
            angles: Some(angles),
        }
    }

    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Frame identifier: the timestamp when known, otherwise the index
    pub fn stamp(&self) -> u64 {
        self.timestamp_ms.unwrap_or(self.index as u64)
    }

    /// Landmark by body-model index; `None` for a short frame
    pub fn landmark(&self, which: BodyLandmark) -> Option<&Landmark> {
        self.landmarks.get(which.index())
    }
}

/// Resolved angles for one frame, detached from its landmarks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleSample {
    /// Frame identifier (see [`Frame::stamp`])
    pub stamp: u64,
    pub angles: JointAngles,
}

impl AngleSample {
    pub fn new(stamp: u64, angles: JointAngles) -> Self {
        Self { stamp, angles }
    }
}
