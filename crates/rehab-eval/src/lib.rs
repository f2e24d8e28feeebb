//! Rehab Eval - per-session exercise evaluation
//!
//! The evaluator runs the motion components in a fixed order:
//! 1. Resolve joint angles for reference and patient frames
//! 2. Compare each patient frame with its index-clamped reference frame
//! 3. Flag frames beyond the exercise's safety limits
//! 4. Count reps on the exercise's designated joint
//! 5. Score stability over the raw patient landmarks
//! 6. Aggregate the final score
//! 7. Derive session warnings and alerts
//!
//! Compute and storage are separate. [`Evaluation`] carries everything
//! that was computed; [`Evaluation::into_record`] applies the retention
//! policy and is the only thing meant to reach storage.

pub mod alerts;
pub mod config;
pub mod evaluator;
pub mod report;
pub mod snapshot;
pub mod store;

pub use alerts::*;
pub use config::*;
pub use evaluator::*;
pub use report::*;
pub use snapshot::*;
pub use store::*;
