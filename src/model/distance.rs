//! Integer distance model
//!
//! The payload ("world") is a single integer and the score is its distance to a
//! target. The search succeeds once some chain lands exactly on the target.

use crate::model::SearchState;
use rand::Rng;
use std::fmt;

/// Default target the reference model searches for
pub const DEFAULT_TARGET: i64 = 500;

/// Default half-width of the uniform mutation window
pub const DEFAULT_SPREAD: i64 = 50_000;

/// How a mutation moves the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStep {
    /// Add a uniform draw from `[-spread, spread)`
    Uniform { spread: i64 },
    /// Add exactly this amount every time
    Fixed(i64),
}

impl Default for MutationStep {
    fn default() -> Self {
        MutationStep::Uniform {
            spread: DEFAULT_SPREAD,
        }
    }
}

impl MutationStep {
    fn delta<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        match *self {
            MutationStep::Uniform { spread } if spread > 0 => rng.random_range(-spread..spread),
            MutationStep::Uniform { .. } => 0,
            MutationStep::Fixed(delta) => delta,
        }
    }
}

/// An integer payload scored by its distance to `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceState {
    target: i64,
    world: i64,
    score: u64,
    step: MutationStep,
}

impl DistanceState {
    /// Create a state at payload zero with its score already computed.
    pub fn new(target: i64, step: MutationStep) -> Self {
        Self::with_world(target, 0, step)
    }

    pub fn with_world(target: i64, world: i64, step: MutationStep) -> Self {
        let mut state = Self {
            target,
            world,
            score: 0,
            step,
        };
        state.rescore();
        state
    }

    pub fn world(&self) -> i64 {
        self.world
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn step(&self) -> MutationStep {
        self.step
    }
}

impl SearchState for DistanceState {
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.world = self.world.saturating_add(self.step.delta(rng));
    }

    fn rescore(&mut self) {
        self.score = self.target.abs_diff(self.world);
    }

    fn score(&self) -> u64 {
        self.score
    }

    fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DistanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "World: {} (score: {})", self.world, self.score)
    }
}
