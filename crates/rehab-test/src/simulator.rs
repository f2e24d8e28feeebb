//! Motion simulator - synthetic 33-landmark sessions
//!
//! Generates a standing body performing bilateral shoulder abduction.
//! The arm angle is measured from the hip ray, so the extracted shoulder
//! angle equals the commanded angle when there is no jitter.

use std::f64::consts::PI;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rehab_core::{BodyLandmark, Frame, Landmark, LANDMARK_COUNT};

const UPPER_ARM: f64 = 0.15;
const FULL_ARM: f64 = 0.30;
const HAND: f64 = 0.33;

/// Session generation settings
#[derive(Clone, Debug)]
pub struct MotionConfig {
    /// Repetitions performed
    pub reps: u32,
    /// Frames per rest-peak-rest cycle
    pub frames_per_rep: usize,
    pub rest_angle: f64,
    pub peak_angle: f64,
    /// Capture rate, used for timestamps
    pub fps: f64,
    /// Uniform per-coordinate noise half-width
    pub jitter: f64,
    /// Visibility reported for every landmark
    pub visibility: f64,
    /// Body size relative to the default (camera distance)
    pub scale: f64,
    /// Body displacement in image coordinates
    pub offset: (f64, f64),
    /// RNG seed for jitter
    pub seed: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            reps: 3,
            frames_per_rep: 20,
            rest_angle: 30.0,
            peak_angle: 90.0,
            fps: 10.0,
            jitter: 0.0,
            visibility: 0.95,
            scale: 1.0,
            offset: (0.0, 0.0),
            seed: 7,
        }
    }
}

impl MotionConfig {
    /// Clean reference recording
    pub fn clinician() -> Self {
        Self::default()
    }

    /// Patient matching the reference with light tracker noise
    pub fn steady_patient() -> Self {
        MotionConfig {
            jitter: 0.001,
            seed: 11,
            ..Self::default()
        }
    }

    /// Patient with heavy tremor or poor tracking
    pub fn shaky_patient() -> Self {
        MotionConfig {
            jitter: 0.05,
            seed: 13,
            ..Self::default()
        }
    }

    /// Patient who cannot lift past 60 degrees
    pub fn limited_range_patient() -> Self {
        MotionConfig {
            peak_angle: 60.0,
            ..Self::default()
        }
    }

    /// Patient moving at half the reference pace
    pub fn slow_patient() -> Self {
        MotionConfig {
            frames_per_rep: 40,
            ..Self::default()
        }
    }

    /// Number of frames a session contains
    pub fn frame_count(&self) -> usize {
        self.reps as usize * self.frames_per_rep + 1
    }

    /// Commanded arm angle at frame `t`
    pub fn arm_angle_at(&self, t: usize) -> f64 {
        if self.frames_per_rep == 0 {
            return self.rest_angle;
        }
        let phase = (t % self.frames_per_rep) as f64 / self.frames_per_rep as f64;
        let lift = (1.0 - (2.0 * PI * phase).cos()) / 2.0;
        self.rest_angle + (self.peak_angle - self.rest_angle) * lift
    }
}

/// Standing pose with both arms abducted by `arm_angle` degrees,
/// before scaling and noise
pub fn pose_with_arm_angle(arm_angle: f64) -> Vec<Landmark> {
    use BodyLandmark::*;

    let mut points = [(0.5, 0.5); LANDMARK_COUNT];
    let mut put = |which: BodyLandmark, x: f64, y: f64| points[which.index()] = (x, y);

    put(Nose, 0.5, 0.15);
    put(LeftEyeInner, 0.51, 0.13);
    put(LeftEye, 0.52, 0.13);
    put(LeftEyeOuter, 0.53, 0.13);
    put(RightEyeInner, 0.49, 0.13);
    put(RightEye, 0.48, 0.13);
    put(RightEyeOuter, 0.47, 0.13);
    put(LeftEar, 0.55, 0.14);
    put(RightEar, 0.45, 0.14);
    put(MouthLeft, 0.52, 0.18);
    put(MouthRight, 0.48, 0.18);

    let (sin, cos) = arm_angle.to_radians().sin_cos();
    for (side, shoulder_x) in [(1.0, 0.6), (-1.0, 0.4)] {
        let along = |len: f64| (shoulder_x + side * sin * len, 0.3 + cos * len);
        let left = side > 0.0;
        let pick = |l: BodyLandmark, r: BodyLandmark| if left { l } else { r };

        put(pick(LeftShoulder, RightShoulder), shoulder_x, 0.3);
        let (x, y) = along(UPPER_ARM);
        put(pick(LeftElbow, RightElbow), x, y);
        let (x, y) = along(FULL_ARM);
        put(pick(LeftWrist, RightWrist), x, y);
        let (x, y) = along(HAND);
        put(pick(LeftPinky, RightPinky), x, y);
        put(pick(LeftIndex, RightIndex), x, y);
        put(pick(LeftThumb, RightThumb), x, y);

        put(pick(LeftHip, RightHip), shoulder_x, 0.6);
        put(pick(LeftKnee, RightKnee), shoulder_x, 0.75);
        put(pick(LeftAnkle, RightAnkle), shoulder_x, 0.9);
        put(pick(LeftHeel, RightHeel), shoulder_x, 0.92);
        put(pick(LeftFootIndex, RightFootIndex), shoulder_x + side * 0.02, 0.93);
    }

    points
        .iter()
        .map(|&(x, y)| Landmark::visible(x, y))
        .collect()
}

/// Deterministic session generator
pub struct MotionSimulator {
    config: MotionConfig,
    rng: StdRng,
}

impl MotionSimulator {
    pub fn new(config: MotionConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        MotionSimulator { config, rng }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Landmarks at frame `t`, with scale, offset, visibility and jitter applied
    pub fn landmarks_at(&mut self, t: usize) -> Vec<Landmark> {
        let c = &self.config;
        let noise = Uniform::new_inclusive(-c.jitter.abs(), c.jitter.abs());
        let jittered = c.jitter != 0.0;

        pose_with_arm_angle(c.arm_angle_at(t))
            .into_iter()
            .map(|lm| {
                let mut x = c.offset.0 + 0.5 + (lm.x - 0.5) * c.scale;
                let mut y = c.offset.1 + 0.5 + (lm.y - 0.5) * c.scale;
                if jittered {
                    x += noise.sample(&mut self.rng);
                    y += noise.sample(&mut self.rng);
                }
                Landmark::new(x, y, 0.0, c.visibility)
            })
            .collect()
    }

    /// A full session of timestamped frames
    pub fn session(&mut self) -> Vec<Frame> {
        let frame_ms = if self.config.fps > 0.0 {
            1000.0 / self.config.fps
        } else {
            0.0
        };

        (0..self.config.frame_count())
            .map(|t| {
                Frame::new(t, self.landmarks_at(t)).with_timestamp((t as f64 * frame_ms) as u64)
            })
            .collect()
    }
}
