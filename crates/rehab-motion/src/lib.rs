//! Rehab Motion - the numeric scoring components
//!
//! Every function here is a pure computation over in-memory sequences.
//! No component holds state between calls; the evaluator composes them.
//!
//! # Components
//!
//! - `angles`: named joint angles from landmark triples
//! - `normalize`: body-relative, distance-invariant landmark frame
//! - `compare`: tolerance-based reference/patient frame comparison
//! - `reps`: peak-then-rest repetition counting
//! - `stability`: frame-to-frame jitter score
//! - `score`: weighted 0-100 exercise score

pub mod angles;
pub mod compare;
pub mod normalize;
pub mod reps;
pub mod score;
pub mod stability;

pub use angles::*;
pub use compare::*;
pub use normalize::*;
pub use reps::*;
pub use score::*;
pub use stability::*;
