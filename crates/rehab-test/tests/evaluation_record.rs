//! Stored evaluation records keep key-frame angles only

use rehab_eval::{EvaluationConfig, EvaluationRecord, Evaluator};
use rehab_test::{init_test_tracing, patient_session, shoulder_abduction, MotionConfig};

fn record(config: EvaluationConfig) -> EvaluationRecord {
    init_test_tracing();
    Evaluator::with_config(config)
        .evaluate_to_record(
            &shoulder_abduction(1),
            &patient_session(MotionConfig::steady_patient()),
        )
        .unwrap()
}

#[test]
fn test_record_holds_five_key_frames() {
    let record = record(EvaluationConfig::default());

    assert_eq!(record.patient_pose.len(), 5);
    // 61 frames at 100ms: indices 0, 15, 30, 45, 60
    let stamps: Vec<u64> = record
        .patient_pose
        .key_frames
        .iter()
        .map(|k| k.timestamp)
        .collect();
    assert_eq!(stamps, vec![0, 1500, 3000, 4500, 6000]);
    assert!(record.patient_pose.key_frames.iter().all(|k| k.angles.len() == 8));
}

#[test]
fn test_record_breakdown_within_maxima() {
    let record = record(EvaluationConfig::default());

    assert!(record.angle_score <= 40);
    assert!(record.rep_score <= 30);
    assert!(record.stability_score <= 20);
    assert!(record.completion_score == 0 || record.completion_score == 10);
    assert!(record.score <= 100);
    assert_eq!(record.reps_completed, 3);
    assert_eq!(record.reps_expected, 3);
}

#[test]
fn test_record_json_has_no_raw_landmarks() {
    let record = record(EvaluationConfig::default());
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"keyFrames\""));
    assert!(!json.contains("landmarks"));
    assert!(!json.contains("visibility"));

    let back: EvaluationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.score, record.score);
    assert_eq!(back.warnings, record.warnings);
    assert_eq!(back.patient_pose.len(), record.patient_pose.len());
}

#[test]
fn test_key_frame_count_is_configurable() {
    let record = record(EvaluationConfig {
        key_frame_count: 3,
        ..Default::default()
    });
    assert_eq!(record.patient_pose.len(), 3);
}
