//! Canned exercises and patient sessions

use rehab_core::{
    Difficulty, Exercise, ExerciseId, Frame, Joint, ReferencePose, RepConfig, SafetyLimits,
};
use rehab_eval::InMemoryExerciseStore;

use crate::{MotionConfig, MotionSimulator};

/// Shoulder abduction exercise recorded from the clean simulator
pub fn shoulder_abduction(id: u64) -> Exercise {
    let config = MotionConfig::clinician();
    let reference = ReferencePose::new(MotionSimulator::new(config.clone()).session(), config.fps);

    Exercise::new(
        ExerciseId::new(id),
        "Bilateral shoulder abduction",
        15.0,
        config.reps,
        reference,
    )
    .with_rep_config(RepConfig::new(
        Joint::LeftShoulder,
        config.peak_angle,
        config.rest_angle,
        15.0,
    ))
}

/// Same exercise with an early post-operative shoulder ceiling
pub fn post_op_shoulder_abduction(id: u64, max_shoulder: f64) -> Exercise {
    shoulder_abduction(id)
        .with_difficulty(Difficulty::Beginner)
        .with_safety_limits(
            SafetyLimits::new()
                .with_max(Joint::LeftShoulder, max_shoulder)
                .with_max(Joint::RightShoulder, max_shoulder),
        )
}

/// Generate a patient session
pub fn patient_session(config: MotionConfig) -> Vec<Frame> {
    MotionSimulator::new(config).session()
}

/// Store preloaded with the canned exercises
pub fn demo_store() -> InMemoryExerciseStore {
    [shoulder_abduction(1), post_op_shoulder_abduction(2, 110.0)]
        .into_iter()
        .collect()
}
