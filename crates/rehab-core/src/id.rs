//! Identity types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exercise identity - key into the exercise store
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(pub u64);

impl ExerciseId {
    pub const ZERO: ExerciseId = ExerciseId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        ExerciseId(id)
    }
}

impl fmt::Debug for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exercise({:016x})", self.0)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
