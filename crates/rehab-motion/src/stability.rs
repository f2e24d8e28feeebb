//! Stability scoring - frame-to-frame jitter of raw landmarks
//!
//! Velocity per landmark is the Manhattan displacement `|dx| + |dy|`
//! between consecutive frames. Jitter is how much that velocity changes
//! across each triple of frames. Coordinates must stay in the tracker's
//! [0, 1] convention: the x100 scaling below assumes it.

use rehab_core::{Frame, Landmark};

/// Score for sequences too short to measure jitter
pub const STABLE_SCORE: f64 = 100.0;

/// Visibility a landmark needs to count towards jitter (exclusive)
pub const STABILITY_VISIBILITY: f64 = 0.5;

#[inline]
fn velocity(from: &Landmark, to: &Landmark) -> f64 {
    (to.x - from.x).abs() + (to.y - from.y).abs()
}

/// Mean summed jitter per frame triple; 0 for fewer than 3 frames
pub fn average_jitter(frames: &[Frame]) -> f64 {
    if frames.len() < 3 {
        return 0.0;
    }

    let triples = frames.windows(3);
    let count = triples.len();
    let total: f64 = triples
        .map(|w| {
            let (prev, curr, next) = (&w[0].landmarks, &w[1].landmarks, &w[2].landmarks);
            prev.iter()
                .zip(curr)
                .zip(next)
                .filter(|((_, c), _)| c.visibility > STABILITY_VISIBILITY)
                .map(|((p, c), n)| (velocity(c, n) - velocity(p, c)).abs())
                .sum::<f64>()
        })
        .sum();

    total / count as f64
}

/// Smoothness score, 0-100
///
/// Fewer than 3 frames is defined as perfectly stable.
pub fn calculate_stability(frames: &[Frame]) -> f64 {
    if frames.len() < 3 {
        return STABLE_SCORE;
    }
    (100.0 - average_jitter(frames) * 100.0).max(0.0)
}
