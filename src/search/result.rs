//! Tempering result types and statistics

use crate::model::SearchState;
use std::time::Duration;

/// The state that ended the run
#[derive(Debug, Clone)]
pub struct TerminalState<S> {
    /// Slot whose chain reported the terminal state
    pub chain_index: usize,
    /// Round in which it was reported (1-based)
    pub round: u64,
    pub state: S,
}

impl<S: SearchState> TerminalState<S> {
    pub fn score(&self) -> u64 {
        self.state.score()
    }
}

impl<S: SearchState> std::fmt::Display for TerminalState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Success in chain {}: {}",
            self.chain_index,
            self.state.dump()
        )
    }
}

/// Per-round snapshot handed to observers after the exchange pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number (1-based)
    pub round: u64,
    /// Scores by slot after the exchange pass
    pub scores: Vec<u64>,
    /// Number of adjacent swaps the pass performed
    pub swaps: usize,
}

impl RoundReport {
    pub fn best_score(&self) -> Option<u64> {
        self.scores.iter().copied().min()
    }
}

/// Statistics kept by one chain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainStatistics {
    /// Slot the chain is bound to
    pub chain_index: usize,
    /// Heat of that slot
    pub heat: f64,
    /// Number of steps taken
    pub steps: u64,
    /// Candidates kept because they did not worsen the score
    pub accepted_non_worsening: u64,
    /// Worsening candidates kept by the heat draw
    pub accepted_worsening: u64,
    /// Candidates rolled back
    pub rejected: u64,
}

impl ChainStatistics {
    pub fn new(chain_index: usize, heat: f64) -> Self {
        Self {
            chain_index,
            heat,
            ..Default::default()
        }
    }

    pub fn accepted(&self) -> u64 {
        self.accepted_non_worsening + self.accepted_worsening
    }

    /// Get acceptance rate (0.0 to 1.0)
    pub fn acceptance_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.accepted() as f64 / self.steps as f64
        }
    }
}

/// Outcome of a completed tempering run
#[derive(Debug)]
pub struct TemperingResult<S> {
    pub terminal: TerminalState<S>,
    /// Rounds completed, including the terminal one
    pub rounds: u64,
    pub elapsed: Duration,
    /// Base seed the chain seeds were derived from
    pub base_seed: u64,
    /// Per-chain statistics, ordered by slot
    pub chain_statistics: Vec<ChainStatistics>,
}

impl<S: SearchState> TemperingResult<S> {
    /// Get rounds completed per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.rounds as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("{}\n", self.terminal));
        s.push_str(&format!("Rounds: {}\n", self.rounds));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed));
        s.push_str(&format!("Throughput: {:.0} rounds/sec\n", self.throughput()));
        s.push_str(&format!("Base seed: {}\n", self.base_seed));

        for stats in &self.chain_statistics {
            s.push_str(&format!(
                "  chain {} (heat {}): {} steps, acceptance {:.2}%, {} worsening kept, {} rejected\n",
                stats.chain_index,
                stats.heat,
                stats.steps,
                stats.acceptance_rate() * 100.0,
                stats.accepted_worsening,
                stats.rejected
            ));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DistanceState, MutationStep};

    #[test]
    fn test_terminal_display() {
        let terminal = TerminalState {
            chain_index: 2,
            round: 17,
            state: DistanceState::with_world(500, 500, MutationStep::default()),
        };
        assert_eq!(terminal.score(), 0);
        assert_eq!(
            terminal.to_string(),
            "Success in chain 2: World: 500 (score: 0)"
        );
    }

    #[test]
    fn test_round_report_best_score() {
        let report = RoundReport {
            round: 1,
            scores: vec![7, 3, 9],
            swaps: 0,
        };
        assert_eq!(report.best_score(), Some(3));
    }

    #[test]
    fn test_chain_acceptance_rate() {
        let mut stats = ChainStatistics::new(1, 0.5);
        stats.steps = 100;
        stats.accepted_non_worsening = 20;
        stats.accepted_worsening = 5;
        stats.rejected = 75;

        assert_eq!(stats.accepted(), 25);
        assert!((stats.acceptance_rate() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_statistics_zero_division() {
        let stats = ChainStatistics::new(0, 0.0);
        assert_eq!(stats.acceptance_rate(), 0.0);

        let result = TemperingResult {
            terminal: TerminalState {
                chain_index: 0,
                round: 1,
                state: DistanceState::with_world(0, 0, MutationStep::Fixed(1)),
            },
            rounds: 1,
            elapsed: Duration::ZERO,
            base_seed: 0,
            chain_statistics: vec![stats],
        };
        assert_eq!(result.throughput(), 0.0);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = ChainStatistics::new(0, 0.0);
        stats.steps = 10;
        stats.accepted_non_worsening = 4;
        stats.rejected = 6;

        let result = TemperingResult {
            terminal: TerminalState {
                chain_index: 0,
                round: 10,
                state: DistanceState::with_world(500, 500, MutationStep::default()),
            },
            rounds: 10,
            elapsed: Duration::from_millis(5),
            base_seed: 42,
            chain_statistics: vec![stats],
        };

        let summary = result.format_summary();
        assert!(summary.contains("Success in chain 0: World: 500 (score: 0)"));
        assert!(summary.contains("Rounds: 10"));
        assert!(summary.contains("Base seed: 42"));
        assert!(summary.contains("chain 0 (heat 0): 10 steps, acceptance 40.00%"));
    }
}
