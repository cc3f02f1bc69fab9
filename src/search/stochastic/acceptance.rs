//! Heat-based acceptance criterion for tempering chains
//!
//! A proposal that does not worsen the score is always accepted. A worsening
//! proposal is accepted with a fixed probability equal to the chain's heat:
//!   accept if u < heat, u ~ Uniform[0, 1)
//!
//! This is a uniform threshold per chain rather than a Boltzmann factor, so the
//! size of the worsening does not matter.
//! Heat 0 = greedy hill climbing (never accepts worse solutions)
//! Heat 1 = random walk (always accepts)

use rand::Rng;

/// Acceptance criterion bound to one chain's heat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatAcceptance {
    heat: f64,
}

impl HeatAcceptance {
    /// Create a criterion for the given heat.
    ///
    /// Heats come from a validated ladder; out-of-range values are a bug.
    pub fn new(heat: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&heat),
            "heat must be within [0, 1]"
        );
        Self { heat }
    }

    pub fn heat(&self) -> f64 {
        self.heat
    }

    /// Decide whether to accept a proposal
    ///
    /// # Arguments
    /// * `rng` - The chain's random number generator
    /// * `current_score` - Score of the state the chain was handed
    /// * `proposal_score` - Score of the mutated candidate
    ///
    /// # Returns
    /// true if the chain should keep the candidate
    pub fn accept<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        current_score: u64,
        proposal_score: u64,
    ) -> bool {
        if proposal_score <= current_score {
            return true;
        }

        let u: f64 = rng.random();
        u < self.heat
    }

    /// Probability that a proposal with this score is accepted
    pub fn acceptance_probability(&self, current_score: u64, proposal_score: u64) -> f64 {
        if proposal_score <= current_score {
            1.0
        } else {
            self.heat
        }
    }
}
