//! Joint angle extraction
//!
//! Angles are measured in the image plane (x, y). Depth from a
//! monocular tracker is too noisy for this metric, so `z` is ignored.

use rehab_core::{AngleSample, Frame, Joint, JointAngles, Landmark};

/// Angle at `vertex` between the rays to `p1` and `p2`, in degrees
///
/// Always in [0, 180] and symmetric in `p1`/`p2`.
pub fn calculate_angle(p1: &Landmark, vertex: &Landmark, p2: &Landmark) -> f64 {
    let to_p2 = (p2.y - vertex.y).atan2(p2.x - vertex.x);
    let to_p1 = (p1.y - vertex.y).atan2(p1.x - vertex.x);

    let angle = (to_p2 - to_p1).abs().to_degrees();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Angle for one joint, or `None` if any landmark of its triple is
/// missing or below the visibility threshold
pub fn joint_angle(landmarks: &[Landmark], joint: Joint) -> Option<f64> {
    let (a, v, b) = joint.triple();
    let p1 = landmarks.get(a.index())?;
    let vertex = landmarks.get(v.index())?;
    let p2 = landmarks.get(b.index())?;

    if p1.is_visible() && vertex.is_visible() && p2.is_visible() {
        Some(calculate_angle(p1, vertex, p2))
    } else {
        None
    }
}

/// All eight named angles that can be measured from `landmarks`
pub fn extract_angles(landmarks: &[Landmark]) -> JointAngles {
    Joint::all()
        .iter()
        .filter_map(|&joint| joint_angle(landmarks, joint).map(|a| (joint, a)))
        .collect()
}

/// Supplied angles if the frame carries them, otherwise extracted ones
pub fn resolve_angles(frame: &Frame) -> JointAngles {
    match &frame.angles {
        Some(angles) => angles.clone(),
        None => extract_angles(&frame.landmarks),
    }
}

/// Resolve every frame once, keeping only its identifier and angles
pub fn angle_samples(frames: &[Frame]) -> Vec<AngleSample> {
    frames
        .iter()
        .map(|f| AngleSample::new(f.stamp(), resolve_angles(f)))
        .collect()
}
