//! Evaluator - scores one patient session against an exercise

use tracing::{debug, debug_span, warn};

use rehab_core::{
    AngleSample, Exercise, ExerciseId, Frame, RehabError, RehabResult, SafetyLimits, Warning,
};
use rehab_motion::{
    angle_samples, calculate_exercise_score, calculate_stability, compare_pose_frames,
    detect_reps, ExerciseScore, FrameComparison, RepResult,
};

use crate::{
    has_alerts, session_warnings, EvaluationConfig, EvaluationRecord, ExerciseStore,
    KeyFrameSnapshot, SessionOutcome,
};

/// Everything computed for one session
///
/// Holds per-frame results for the caller's inspection. It is not
/// serializable; storage goes through [`Evaluation::into_record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub exercise_id: ExerciseId,
    /// One comparison per patient frame
    pub comparisons: Vec<FrameComparison>,
    /// Resolved patient angles, one per frame
    pub samples: Vec<AngleSample>,
    /// Mean frame similarity, 0-100
    pub avg_similarity: f64,
    pub reps: RepResult,
    pub reps_expected: u32,
    /// Stability score, 0-100
    pub stability: f64,
    pub score: ExerciseScore,
    pub warnings: Vec<Warning>,
    pub has_alerts: bool,
}

impl Evaluation {
    /// Mean frame similarity rounded to a whole percentage
    pub fn accuracy(&self) -> u32 {
        self.avg_similarity.round().clamp(0.0, 100.0) as u32
    }

    /// Apply the retention policy: keep `key_frame_count` key frames of
    /// angles and drop all per-frame data
    pub fn into_record(self, key_frame_count: usize) -> RehabResult<EvaluationRecord> {
        let patient_pose = KeyFrameSnapshot::from_samples(&self.samples, key_frame_count)?;
        let round = |v: f64| v.round().max(0.0) as u32;

        Ok(EvaluationRecord {
            exercise_id: self.exercise_id,
            score: self.score.total,
            accuracy: self.accuracy(),
            reps_completed: self.reps.reps,
            reps_expected: self.reps_expected,
            angle_score: round(self.score.angle_score),
            rep_score: round(self.score.rep_score),
            stability_score: round(self.score.stability_points),
            completion_score: round(self.score.completion_score),
            warnings: self.warnings,
            has_alerts: self.has_alerts,
            patient_pose,
        })
    }
}

/// Session evaluator
///
/// Holds only immutable configuration, so one evaluator can serve many
/// sessions from many threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    /// Create an evaluator with default thresholds
    pub fn new() -> Self {
        Self::with_config(EvaluationConfig::default())
    }

    pub fn with_config(config: EvaluationConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Load an exercise from `store` and evaluate `frames` against it
    ///
    /// Store failures are returned as-is and nothing is scored.
    pub fn evaluate_by_id<S: ExerciseStore + ?Sized>(
        &self,
        store: &S,
        id: ExerciseId,
        frames: &[Frame],
    ) -> RehabResult<Evaluation> {
        let exercise = store.load(id).map_err(|err| {
            warn!(exercise = %id, %err, "exercise lookup failed");
            err
        })?;
        self.evaluate(&exercise, frames)
    }

    /// Evaluate a patient session against an exercise
    pub fn evaluate(&self, exercise: &Exercise, frames: &[Frame]) -> RehabResult<Evaluation> {
        let span = debug_span!("evaluate", exercise = %exercise.id, frames = frames.len());
        let _enter = span.enter();

        if let Err(err) = self.check_inputs(exercise, frames) {
            warn!(%err, "evaluation rejected");
            return Err(err);
        }

        let reference = angle_samples(&exercise.reference.frames);
        let samples = angle_samples(frames);

        // Index-clamped alignment: frame i against reference min(i, last)
        let last_ref = reference.len() - 1;
        let comparisons: Vec<FrameComparison> = samples
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                let mut cmp = compare_pose_frames(
                    &reference[i.min(last_ref)].angles,
                    &sample.angles,
                    exercise.tolerance,
                );
                if exceeds_limits(&exercise.safety_limits, sample) {
                    cmp.warnings.push(Warning::UnsafeAngle);
                }
                cmp
            })
            .collect();

        let avg_similarity =
            comparisons.iter().map(|c| c.similarity).sum::<f64>() / comparisons.len() as f64;

        let reps = detect_reps(&samples, &exercise.rep_config, exercise.tolerance);
        let stability = calculate_stability(frames);
        let has_completed = reps.reps >= exercise.expected_reps;

        let score = calculate_exercise_score(
            avg_similarity,
            reps.reps,
            exercise.expected_reps,
            stability,
            has_completed,
        );

        let outcome = SessionOutcome {
            total_score: score.total,
            stability,
            reps_completed: reps.reps,
            reps_expected: exercise.expected_reps,
        };
        let warnings = session_warnings(
            &outcome,
            comparisons.iter().flat_map(|c| c.warnings.iter()),
            &self.config,
        );
        let alerts = has_alerts(&warnings);

        debug!(
            avg_similarity,
            reps = reps.reps,
            stability,
            total = score.total,
            "evaluation complete"
        );
        if alerts {
            warn!(total = score.total, warnings = ?warnings, "evaluation raised alerts");
        }

        Ok(Evaluation {
            exercise_id: exercise.id,
            comparisons,
            samples,
            avg_similarity,
            reps,
            reps_expected: exercise.expected_reps,
            stability,
            score,
            warnings,
            has_alerts: alerts,
        })
    }

    /// Evaluate and immediately apply the configured retention policy
    pub fn evaluate_to_record(
        &self,
        exercise: &Exercise,
        frames: &[Frame],
    ) -> RehabResult<EvaluationRecord> {
        self.evaluate(exercise, frames)?
            .into_record(self.config.key_frame_count)
    }

    fn check_inputs(&self, exercise: &Exercise, frames: &[Frame]) -> RehabResult<()> {
        self.config.validate()?;
        exercise.validate()?;
        if frames.is_empty() {
            return Err(RehabError::EmptySession);
        }
        Ok(())
    }
}

fn exceeds_limits(limits: &SafetyLimits, sample: &AngleSample) -> bool {
    limits
        .iter()
        .any(|(joint, max)| sample.angles.get(joint).is_some_and(|a| a > max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehab_core::{Joint, JointAngles, ReferencePose, RepConfig};

    fn angles(left: f64, right: f64) -> JointAngles {
        JointAngles::new()
            .with(Joint::LeftShoulder, left)
            .with(Joint::RightShoulder, right)
    }

    fn frames(track: &[f64]) -> Vec<Frame> {
        track
            .iter()
            .enumerate()
            .map(|(i, &a)| Frame::from_angles(i, angles(a, a)))
            .collect()
    }

    /// Two abduction reps: 30 -> 90 -> 30 -> 90 -> 30
    fn abduction_track() -> Vec<f64> {
        vec![30.0, 60.0, 90.0, 60.0, 30.0, 60.0, 90.0, 60.0, 30.0]
    }

    fn exercise(expected_reps: u32) -> Exercise {
        let reference = ReferencePose::new(frames(&abduction_track()), 10.0);
        Exercise::new(ExerciseId::new(1), "shoulder abduction", 15.0, expected_reps, reference)
    }

    #[test]
    fn test_perfect_session() {
        let eval = Evaluator::new()
            .evaluate(&exercise(2), &frames(&abduction_track()))
            .unwrap();

        assert_eq!(eval.avg_similarity, 100.0);
        assert_eq!(eval.reps.reps, 2);
        assert_eq!(eval.reps.timestamps, vec![2, 6]);
        // Angle-only frames carry no landmarks, so no jitter
        assert_eq!(eval.stability, 100.0);
        assert_eq!(eval.score.total, 100);
        assert!(eval.warnings.is_empty());
        assert!(!eval.has_alerts);
        assert_eq!(eval.comparisons.len(), 9);
    }

    #[test]
    fn test_longer_session_clamps_to_last_reference_frame() {
        let mut track = abduction_track();
        track.extend([30.0, 30.0, 30.0]);

        let eval = Evaluator::new().evaluate(&exercise(2), &frames(&track)).unwrap();
        assert_eq!(eval.comparisons.len(), 12);
        // Trailing frames compare against the final reference frame (30)
        assert_eq!(eval.comparisons[11].similarity, 100.0);
        assert_eq!(eval.comparisons[11].angle_differences[0].reference_angle, 30.0);
    }

    #[test]
    fn test_incomplete_session() {
        // Patient only reaches 60 degrees
        let track = vec![30.0, 45.0, 60.0, 45.0, 30.0, 45.0, 60.0, 45.0, 30.0];
        let eval = Evaluator::new().evaluate(&exercise(2), &frames(&track)).unwrap();

        assert_eq!(eval.reps.reps, 0);
        assert_eq!(eval.score.completion_score, 0.0);
        assert!(eval.warnings.contains(&Warning::IncompleteReps));
        assert!(eval.warnings.contains(&Warning::Deviation(Joint::LeftShoulder)));
    }

    #[test]
    fn test_safety_limit_raises_alert() {
        let exercise =
            exercise(2).with_safety_limits(SafetyLimits::new().with_max(Joint::LeftShoulder, 80.0));
        let eval = Evaluator::new()
            .evaluate(&exercise, &frames(&abduction_track()))
            .unwrap();

        assert!(eval.comparisons[2].warnings.contains(&Warning::UnsafeAngle));
        assert!(!eval.comparisons[0].warnings.contains(&Warning::UnsafeAngle));
        assert_eq!(eval.warnings, vec![Warning::SafetyConcern, Warning::UnsafeAngle]);
        assert!(eval.has_alerts);
    }

    #[test]
    fn test_rep_config_comes_from_exercise() {
        let exercise =
            exercise(2).with_rep_config(RepConfig::new(Joint::RightShoulder, 60.0, 30.0, 5.0));
        let eval = Evaluator::new()
            .evaluate(&exercise, &frames(&abduction_track()))
            .unwrap();

        // Peaks now register on the way up at 60
        assert_eq!(eval.reps.reps, 2);
        assert_eq!(eval.reps.timestamps, vec![1, 5]);
    }

    #[test]
    fn test_default_rep_zones_use_exercise_tolerance() {
        // 78 is within 15 of the 90 degree peak but not within 10
        let track = vec![30.0, 78.0, 30.0];
        let reference = ReferencePose::new(frames(&track), 10.0);
        let loose = Exercise::new(ExerciseId::new(1), "abduction", 15.0, 1, reference.clone());
        let tight = Exercise::new(ExerciseId::new(1), "abduction", 10.0, 1, reference);

        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate(&loose, &frames(&track)).unwrap().reps.reps, 1);

        let eval = evaluator.evaluate(&tight, &frames(&track)).unwrap();
        assert_eq!(eval.reps.reps, 0);
        assert!(eval.warnings.contains(&Warning::IncompleteReps));
    }

    #[test]
    fn test_rejections() {
        let evaluator = Evaluator::new();
        let patient = frames(&abduction_track());

        assert_eq!(
            evaluator.evaluate(&exercise(2), &[]),
            Err(RehabError::EmptySession)
        );
        assert_eq!(
            evaluator.evaluate(&exercise(0), &patient),
            Err(RehabError::InvalidExpectedReps(0))
        );

        let mut bad = exercise(2);
        bad.tolerance = 0.0;
        assert_eq!(
            evaluator.evaluate(&bad, &patient),
            Err(RehabError::InvalidTolerance(0.0))
        );

        let evaluator = Evaluator::with_config(EvaluationConfig {
            key_frame_count: 0,
            ..Default::default()
        });
        assert_eq!(
            evaluator.evaluate(&exercise(2), &patient),
            Err(RehabError::InvalidKeyFrameCount(0))
        );
    }

    #[test]
    fn test_record_keeps_only_key_frames() {
        let mut track = Vec::new();
        for _ in 0..10 {
            track.extend(abduction_track());
        }
        let mut exercise = exercise(2);
        exercise.reference = ReferencePose::new(frames(&track), 10.0);

        let record = Evaluator::new()
            .evaluate_to_record(&exercise, &frames(&track))
            .unwrap();

        assert_eq!(record.patient_pose.len(), 5);
        assert_eq!(record.reps_completed, 20);
        assert_eq!(record.score, 100);
        assert_eq!(record.accuracy, 100);
        assert_eq!(record.angle_score, 40);
        assert_eq!(record.rep_score, 30);
        assert_eq!(record.stability_score, 20);
        assert_eq!(record.completion_score, 10);
        assert_eq!(record.reps_expected, 2);
    }

    #[test]
    fn test_record_json_fields() {
        let record = Evaluator::new()
            .evaluate_to_record(&exercise(2), &frames(&abduction_track()))
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        for field in [
            "score",
            "accuracy",
            "reps_completed",
            "reps_expected",
            "angle_score",
            "rep_score",
            "stability_score",
            "completion_score",
            "warnings",
            "has_alerts",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
        assert!(json["patient_pose"]["keyFrames"].is_array());
        assert!(json.get("comparisons").is_none());
    }
}
