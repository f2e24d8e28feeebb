//! Pose normalization - body-relative, distance-invariant landmarks
//!
//! Recenters on the hip midpoint and rescales by torso length so poses
//! recorded at different camera distances line up. Joint angles are
//! already translation and scale invariant, so the comparison path does
//! not go through here.

use rehab_core::{BodyLandmark, Landmark, RehabError, RehabResult};

/// Hip midpoint and torso length of a pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub center: Landmark,
    pub torso_length: f64,
}

impl BodyFrame {
    /// Measure the body frame from hips and shoulders
    pub fn measure(landmarks: &[Landmark]) -> RehabResult<Self> {
        let get = |which: BodyLandmark| {
            landmarks
                .get(which.index())
                .ok_or(RehabError::MissingLandmark(which))
        };

        let center = get(BodyLandmark::LeftHip)?.midpoint(get(BodyLandmark::RightHip)?);
        let shoulders =
            get(BodyLandmark::LeftShoulder)?.midpoint(get(BodyLandmark::RightShoulder)?);

        Ok(BodyFrame {
            center,
            torso_length: center.distance_2d(&shoulders),
        })
    }

    /// Scale factor; 1 for a degenerate torso
    pub fn scale(&self) -> f64 {
        if self.torso_length == 0.0 {
            1.0
        } else {
            1.0 / self.torso_length
        }
    }
}

/// Translate by the hip midpoint and scale by inverse torso length.
/// Visibility is passed through.
pub fn normalize_pose(landmarks: &[Landmark]) -> RehabResult<Vec<Landmark>> {
    let body = BodyFrame::measure(landmarks)?;
    let scale = body.scale();
    let c = body.center;

    Ok(landmarks
        .iter()
        .map(|lm| Landmark {
            x: (lm.x - c.x) * scale,
            y: (lm.y - c.y) * scale,
            z: (lm.z - c.z) * scale,
            visibility: lm.visibility,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehab_core::LANDMARK_COUNT;

    fn pose(offset: f64, size: f64) -> Vec<Landmark> {
        let mut lm = vec![Landmark::new(offset, offset, 0.0, 0.8); LANDMARK_COUNT];
        let mut put = |which: BodyLandmark, x: f64, y: f64| {
            lm[which.index()] = Landmark::new(offset + x * size, offset + y * size, 0.0, 0.9);
        };
        put(BodyLandmark::LeftHip, 0.1, 0.5);
        put(BodyLandmark::RightHip, -0.1, 0.5);
        put(BodyLandmark::LeftShoulder, 0.15, 0.0);
        put(BodyLandmark::RightShoulder, -0.15, 0.0);
        put(BodyLandmark::LeftWrist, 0.3, 0.4);
        lm
    }

    #[test]
    fn test_hip_center_maps_to_origin() {
        let out = normalize_pose(&pose(0.2, 1.0)).unwrap();
        let hips = out[BodyLandmark::LeftHip.index()].midpoint(&out[BodyLandmark::RightHip.index()]);
        assert!(hips.x.abs() < 1e-12);
        assert!(hips.y.abs() < 1e-12);
    }

    #[test]
    fn test_torso_length_becomes_one() {
        let out = normalize_pose(&pose(0.1, 0.6)).unwrap();
        let body = BodyFrame::measure(&out).unwrap();
        assert!((body.torso_length - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_and_position_invariant() {
        let near = normalize_pose(&pose(0.0, 1.0)).unwrap();
        let far = normalize_pose(&pose(0.3, 0.4)).unwrap();

        let i = BodyLandmark::LeftWrist.index();
        assert!((near[i].x - far[i].x).abs() < 1e-9);
        assert!((near[i].y - far[i].y).abs() < 1e-9);
    }

    #[test]
    fn test_visibility_passthrough() {
        let input = pose(0.0, 1.0);
        let out = normalize_pose(&input).unwrap();
        for (a, b) in input.iter().zip(out.iter()) {
            assert_eq!(a.visibility, b.visibility);
        }
    }

    #[test]
    fn test_zero_torso_uses_unit_scale() {
        let lm = vec![Landmark::new(0.4, 0.7, 0.1, 1.0); LANDMARK_COUNT];
        let body = BodyFrame::measure(&lm).unwrap();
        assert_eq!(body.torso_length, 0.0);
        assert_eq!(body.scale(), 1.0);

        let out = normalize_pose(&lm).unwrap();
        assert!(out.iter().all(|l| l.x == 0.0 && l.y == 0.0 && l.z == 0.0));
    }

    #[test]
    fn test_missing_landmarks() {
        let lm = vec![Landmark::default(); 20];
        assert_eq!(
            normalize_pose(&lm),
            Err(RehabError::MissingLandmark(BodyLandmark::LeftHip))
        );
    }
}
