//! State models explored by the tempering search
//!
//! A state is a payload plus a score derived from it. Lower scores are better
//! and a score of zero is the terminal (success) condition. The coordination
//! layer never looks inside a payload; it only moves states between chains and
//! compares their scores.

pub mod distance;

pub use distance::{DistanceState, MutationStep};

use rand::Rng;

/// A scored search state that chains can mutate and the hub can rank.
///
/// Implementations must keep `score()` equal to the scoring function applied
/// to the current payload whenever the state leaves `propose`.
pub trait SearchState: Clone + Send + 'static {
    /// Apply a random perturbation to the payload.
    ///
    /// The score is stale afterwards until `rescore` runs.
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Recompute the score from the payload.
    fn rescore(&mut self);

    /// The most recently computed score.
    fn score(&self) -> u64;

    /// Human-readable summary used when reporting a terminal state.
    fn dump(&self) -> String;

    /// Build a scored candidate from this state without touching it.
    fn propose<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut candidate = self.clone();
        candidate.mutate(rng);
        candidate.rescore();
        candidate
    }

    fn is_terminal(&self) -> bool {
        self.score() == 0
    }

    /// Whether the stored score matches a fresh rescore of the payload.
    fn score_is_current(&self) -> bool {
        let mut fresh = self.clone();
        fresh.rescore();
        fresh.score() == self.score()
    }
}
