//! Tempering chain worker
//!
//! Each chain is bound to one slot of the heat ladder and loops:
//! 1. Wait for the hub to hand it a state
//! 2. Propose a mutated, rescored candidate
//! 3. Keep the candidate or roll back using the slot's heat
//! 4. Report the resulting state back to the hub
//!
//! The chain has no exit condition of its own. It stops only when the hub
//! drops the resume side of its channel.

use crate::model::SearchState;
use crate::search::parallel::channel::ChainChannels;
use crate::search::result::ChainStatistics;
use crate::search::stochastic::acceptance::HeatAcceptance;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One search worker bound to a fixed heat
pub struct Chain {
    index: usize,
    acceptance: HeatAcceptance,
    rng: ChaCha8Rng,
    statistics: ChainStatistics,
}

impl Chain {
    pub fn new(index: usize, heat: f64, seed: u64) -> Self {
        Self {
            index,
            acceptance: HeatAcceptance::new(heat),
            rng: ChaCha8Rng::seed_from_u64(seed),
            statistics: ChainStatistics::new(index, heat),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn heat(&self) -> f64 {
        self.acceptance.heat()
    }

    pub fn statistics(&self) -> &ChainStatistics {
        &self.statistics
    }

    /// Advance a state by one Metropolis step.
    pub fn step<S: SearchState>(&mut self, incoming: S) -> S {
        let old = incoming;
        let candidate = old.propose(&mut self.rng);
        self.statistics.steps += 1;

        let outgoing = if candidate.score() <= old.score() {
            self.statistics.accepted_non_worsening += 1;
            candidate
        } else if self
            .acceptance
            .accept(&mut self.rng, old.score(), candidate.score())
        {
            self.statistics.accepted_worsening += 1;
            candidate
        } else {
            self.statistics.rejected += 1;
            old
        };

        debug_assert!(
            outgoing.score_is_current(),
            "chain {} produced a state with a stale score",
            self.index
        );
        outgoing
    }

    /// Serve rounds until the hub stops resuming this chain.
    ///
    /// Returns the chain's statistics once its resume channel closes.
    pub fn run<S: SearchState>(mut self, channels: ChainChannels<S>) -> ChainStatistics {
        log::debug!(
            "chain {} started (heat {})",
            self.index,
            self.acceptance.heat()
        );

        while let Ok(state) = channels.resume.recv() {
            let state = self.step(state);
            if channels.report.send(state).is_err() {
                break;
            }
        }

        log::debug!(
            "chain {} stopped after {} steps",
            self.index,
            self.statistics.steps
        );
        self.statistics
    }
}
