//! Fuzz the individual motion components on raw landmark sets.
//! None of them may panic, whatever the landmark count or values.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rehab_core::{Frame, Landmark};
use rehab_motion::{calculate_stability, extract_angles, normalize_pose};

#[derive(Arbitrary, Debug)]
struct Input {
    frames: Vec<Vec<(f64, f64, f64, f64)>>,
}

fuzz_target!(|input: Input| {
    let frames: Vec<Frame> = input
        .frames
        .iter()
        .enumerate()
        .map(|(i, points)| {
            let landmarks = points
                .iter()
                .map(|&(x, y, z, v)| Landmark::new(x, y, z, v))
                .collect();
            Frame::new(i, landmarks)
        })
        .collect();

    for frame in &frames {
        let angles = extract_angles(&frame.landmarks);
        for (_, angle) in angles.iter() {
            assert!(angle.is_nan() || (0.0..=180.0).contains(&angle));
        }
        let _ = normalize_pose(&frame.landmarks);
    }

    let stability = calculate_stability(&frames);
    assert!(stability.is_nan() || (0.0..=100.0).contains(&stability));
});
