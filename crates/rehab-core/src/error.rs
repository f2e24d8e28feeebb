//! Error types for the rehab engine

use thiserror::Error;

use crate::{BodyLandmark, ExerciseId};

/// Core rehab errors
///
/// Numeric degradations (absent angles, empty comparisons, short
/// sequences) are not errors. These variants reject a whole evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RehabError {
    // Exercise errors
    #[error("Invalid tolerance: {0} (must be finite and > 0)")]
    InvalidTolerance(f64),

    #[error("Invalid expected reps: {0} (must be >= 1)")]
    InvalidExpectedReps(u32),

    #[error("Reference pose has no frames")]
    EmptyReference,

    // Session errors
    #[error("Patient session has no frames")]
    EmptySession,

    // Geometry errors
    #[error("Missing landmark: {0:?}")]
    MissingLandmark(BodyLandmark),

    // Storage policy errors
    #[error("Invalid key frame count: {0}")]
    InvalidKeyFrameCount(usize),

    // Store errors
    #[error("Exercise not found: {0}")]
    ExerciseNotFound(ExerciseId),

    #[error("Exercise store error: {0}")]
    Store(String),
}

/// Result type for rehab operations
pub type RehabResult<T> = Result<T, RehabError>;

/// Check that an angular tolerance is usable as a divisor
pub fn validate_tolerance(tolerance: f64) -> RehabResult<f64> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(tolerance)
    } else {
        Err(RehabError::InvalidTolerance(tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tolerance() {
        assert_eq!(validate_tolerance(15.0), Ok(15.0));
        assert_eq!(
            validate_tolerance(0.0),
            Err(RehabError::InvalidTolerance(0.0))
        );
        assert!(validate_tolerance(-1.0).is_err());
        assert!(validate_tolerance(f64::NAN).is_err());
        assert!(validate_tolerance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = RehabError::ExerciseNotFound(ExerciseId::new(7));
        assert_eq!(err.to_string(), "Exercise not found: 0000000000000007");

        let err = RehabError::MissingLandmark(BodyLandmark::LeftHip);
        assert_eq!(err.to_string(), "Missing landmark: LeftHip");
    }
}
