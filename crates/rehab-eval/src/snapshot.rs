//! Key-frame snapshot - the retained shape of a patient's movement
//!
//! Only derived angles of a few evenly spaced frames are kept. Raw
//! landmark streams never enter a snapshot.

use serde::{Deserialize, Serialize};

use rehab_core::{AngleSample, JointAngles, RehabError, RehabResult};

/// One retained frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFrame {
    pub timestamp: u64,
    pub angles: JointAngles,
}

/// Down-sampled angle record of a session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyFrameSnapshot {
    #[serde(rename = "keyFrames")]
    pub key_frames: Vec<KeyFrame>,
}

/// Evenly spaced indices into a sequence of `len`, first and last
/// included. Short sequences are kept whole.
pub fn key_frame_indices(len: usize, count: usize) -> Vec<usize> {
    if len <= count {
        return (0..len).collect();
    }
    if count == 1 {
        return vec![0];
    }

    let step = (len - 1) as f64 / (count - 1) as f64;
    (0..count)
        .map(|j| ((j as f64 * step).round() as usize).min(len - 1))
        .collect()
}

impl KeyFrameSnapshot {
    /// Keep `count` evenly spaced samples
    pub fn from_samples(samples: &[AngleSample], count: usize) -> RehabResult<Self> {
        if count == 0 {
            return Err(RehabError::InvalidKeyFrameCount(count));
        }

        let key_frames = key_frame_indices(samples.len(), count)
            .into_iter()
            .map(|i| KeyFrame {
                timestamp: samples[i].stamp,
                angles: samples[i].angles.clone(),
            })
            .collect();

        Ok(KeyFrameSnapshot { key_frames })
    }

    pub fn len(&self) -> usize {
        self.key_frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehab_core::Joint;

    fn samples(n: usize) -> Vec<AngleSample> {
        (0..n)
            .map(|i| {
                AngleSample::new(
                    i as u64 * 100,
                    JointAngles::new().with(Joint::LeftShoulder, i as f64),
                )
            })
            .collect()
    }

    #[test]
    fn test_indices_evenly_spaced() {
        assert_eq!(key_frame_indices(100, 5), vec![0, 25, 50, 74, 99]);
        assert_eq!(key_frame_indices(9, 5), vec![0, 2, 4, 6, 8]);
        assert_eq!(key_frame_indices(6, 5), vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn test_short_sequence_kept_whole() {
        assert_eq!(key_frame_indices(3, 5), vec![0, 1, 2]);
        assert!(key_frame_indices(0, 5).is_empty());
    }

    #[test]
    fn test_single_key_frame() {
        assert_eq!(key_frame_indices(40, 1), vec![0]);
    }

    #[test]
    fn test_snapshot_keeps_stamps_and_angles() {
        let snapshot = KeyFrameSnapshot::from_samples(&samples(300), 5).unwrap();
        assert_eq!(snapshot.len(), 5);

        let last = &snapshot.key_frames[4];
        assert_eq!(last.timestamp, 29_900);
        assert_eq!(last.angles.get(Joint::LeftShoulder), Some(299.0));
    }

    #[test]
    fn test_zero_count_rejected() {
        assert_eq!(
            KeyFrameSnapshot::from_samples(&samples(10), 0),
            Err(RehabError::InvalidKeyFrameCount(0))
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = KeyFrameSnapshot::from_samples(&samples(1), 5).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"keyFrames":[{"timestamp":0,"angles":{"left_shoulder":0.0}}]}"#
        );
    }
}
