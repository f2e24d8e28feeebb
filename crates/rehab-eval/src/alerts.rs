//! Session-level warnings and alerting

use rehab_core::Warning;

use crate::EvaluationConfig;

/// Session measurements the warning rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOutcome {
    pub total_score: u32,
    pub stability: f64,
    pub reps_completed: u32,
    pub reps_expected: u32,
}

/// Session warnings followed by up to `max_frame_warnings` distinct
/// per-frame warnings in first-seen order. No tag appears twice.
pub fn session_warnings<'a>(
    outcome: &SessionOutcome,
    frame_warnings: impl IntoIterator<Item = &'a Warning>,
    config: &EvaluationConfig,
) -> Vec<Warning> {
    let frame_warnings: Vec<Warning> = frame_warnings.into_iter().copied().collect();
    let mut warnings = Vec::new();

    if outcome.total_score < config.low_score_threshold {
        warnings.push(Warning::LowScore);
    }
    if outcome.stability < config.low_stability_threshold {
        warnings.push(Warning::LowStability);
    }
    if (outcome.reps_completed as f64)
        < config.incomplete_reps_ratio * outcome.reps_expected as f64
    {
        warnings.push(Warning::IncompleteReps);
    }
    if frame_warnings.iter().any(|w| w.is_unsafe()) {
        warnings.push(Warning::SafetyConcern);
    }

    let mut distinct: Vec<Warning> = Vec::new();
    for w in frame_warnings {
        if distinct.len() == config.max_frame_warnings {
            break;
        }
        if !distinct.contains(&w) {
            distinct.push(w);
        }
    }
    for w in distinct {
        if !warnings.contains(&w) {
            warnings.push(w);
        }
    }

    warnings
}

/// Whether any warning needs clinician attention
pub fn has_alerts(warnings: &[Warning]) -> bool {
    warnings.iter().any(|w| w.is_alert())
}
