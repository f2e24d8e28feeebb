//! Fuzz the whole evaluation with arbitrary frames and exercise settings.
//! Evaluation must either reject the input or produce an in-range score.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rehab_core::{Exercise, ExerciseId, Frame, Landmark, ReferencePose, RepConfig};
use rehab_eval::Evaluator;

#[derive(Arbitrary, Debug)]
struct Input {
    tolerance: f64,
    expected_reps: u8,
    peak_angle: f64,
    rest_angle: f64,
    reference: Vec<Vec<(f64, f64, f64)>>,
    patient: Vec<Vec<(f64, f64, f64)>>,
}

fn frames(raw: &[Vec<(f64, f64, f64)>]) -> Vec<Frame> {
    raw.iter()
        .enumerate()
        .map(|(i, points)| {
            let landmarks = points
                .iter()
                .map(|&(x, y, visibility)| Landmark::new(x, y, 0.0, visibility))
                .collect();
            Frame::new(i, landmarks)
        })
        .collect()
}

fuzz_target!(|input: Input| {
    let reference = ReferencePose::new(frames(&input.reference), 30.0);
    let exercise = Exercise::new(
        ExerciseId::new(1),
        "fuzz",
        input.tolerance,
        u32::from(input.expected_reps),
        reference,
    )
    .with_rep_config(RepConfig {
        peak_angle: input.peak_angle,
        rest_angle: input.rest_angle,
        ..RepConfig::default()
    });

    if let Ok(record) = Evaluator::new().evaluate_to_record(&exercise, &frames(&input.patient)) {
        assert!(record.score <= 100);
        assert!(record.patient_pose.len() <= 5);
    }
});
