//! Exercise store - where reference exercises come from
//!
//! Persistence is outside the engine. Implementations report their own
//! failures through [`RehabError::Store`] or
//! [`RehabError::ExerciseNotFound`]; the evaluator passes them through.

use std::collections::HashMap;

use rehab_core::{Exercise, ExerciseId, RehabError, RehabResult};

/// Read access to exercises and their reference poses
pub trait ExerciseStore {
    fn load(&self, id: ExerciseId) -> RehabResult<Exercise>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseStore {
    exercises: HashMap<ExerciseId, Exercise>,
}

impl InMemoryExerciseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an exercise
    pub fn insert(&mut self, exercise: Exercise) {
        self.exercises.insert(exercise.id, exercise);
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseStore for InMemoryExerciseStore {
    fn load(&self, id: ExerciseId) -> RehabResult<Exercise> {
        self.exercises
            .get(&id)
            .cloned()
            .ok_or(RehabError::ExerciseNotFound(id))
    }
}

impl FromIterator<Exercise> for InMemoryExerciseStore {
    fn from_iter<I: IntoIterator<Item = Exercise>>(iter: I) -> Self {
        let mut store = Self::new();
        for exercise in iter {
            store.insert(exercise);
        }
        store
    }
}
