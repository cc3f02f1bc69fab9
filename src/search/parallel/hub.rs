//! Hub that synchronizes the chains round by round.
//!
//! Each round the hub:
//! 1. Collects one report from every slot (a full barrier)
//! 2. Stops if any reported state is terminal
//! 3. Runs one rank-exchange pass over the slots
//! 4. Hands each state back to the chain of the slot it now occupies

use crate::model::SearchState;
use crate::search::error::SearchError;
use crate::search::parallel::channel::SlotChannels;
use crate::search::parallel::exchange::rank_exchange;
use crate::search::result::{RoundReport, TerminalState};

/// Callback invoked after every exchange pass.
///
/// Runs on the hub thread before chains are resumed, so it must return quickly.
pub type RoundObserver = Box<dyn FnMut(&RoundReport) + Send>;

/// Result of settling one round's reports.
#[derive(Debug)]
pub enum Settlement<S> {
    /// A chain reported a terminal state.
    Terminal(TerminalState<S>),
    /// No terminal state; `slots` holds the states after the exchange pass.
    Exchanged { slots: Vec<S>, swaps: usize },
}

/// What a completed round led to.
#[derive(Debug)]
pub enum RoundOutcome<S> {
    Terminal(TerminalState<S>),
    Continue(RoundReport),
}

/// Terminal check and rank exchange for one round's collected reports.
pub fn settle_round<S: SearchState>(round: u64, mut reports: Vec<S>) -> Settlement<S> {
    if let Some(chain_index) = reports.iter().position(|s| s.is_terminal()) {
        let state = reports.swap_remove(chain_index);
        return Settlement::Terminal(TerminalState {
            chain_index,
            round,
            state,
        });
    }

    let swaps = rank_exchange(&mut reports);
    Settlement::Exchanged {
        slots: reports,
        swaps,
    }
}

/// Coordinator owning the hub side of every slot's channels
pub struct Hub<S> {
    slots: Vec<SlotChannels<S>>,
    round: u64,
    progress_every: u64,
    observer: Option<RoundObserver>,
}

impl<S: SearchState> Hub<S> {
    pub fn new(slots: Vec<SlotChannels<S>>) -> Self {
        Self {
            slots,
            round: 0,
            progress_every: 0,
            observer: None,
        }
    }

    /// Log a progress line every `rounds` rounds (0 disables it).
    pub fn with_progress_every(mut self, rounds: u64) -> Self {
        self.progress_every = rounds;
        self
    }

    pub fn with_observer(mut self, observer: RoundObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Rounds collected so far.
    pub fn rounds(&self) -> u64 {
        self.round
    }

    /// Hand each state to the chain bound to the slot of the same index.
    pub fn resume(&self, states: Vec<S>) -> Result<(), SearchError> {
        if states.len() != self.slots.len() {
            return Err(SearchError::SlotCountMismatch {
                expected: self.slots.len(),
                actual: states.len(),
            });
        }

        for (index, (slot, state)) in self.slots.iter().zip(states).enumerate() {
            slot.resume
                .send(state)
                .map_err(|_| SearchError::ChainDisconnected { index })?;
        }
        Ok(())
    }

    /// Block until every slot has reported for this round.
    fn collect(&self) -> Result<Vec<S>, SearchError> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.report
                    .recv()
                    .map_err(|_| SearchError::ChainDisconnected { index })
            })
            .collect()
    }

    /// Run one full round: collect, check, exchange, resume.
    ///
    /// Chains must already hold a state (see `resume`). On a terminal round no
    /// chain is resumed.
    pub fn run_round(&mut self) -> Result<RoundOutcome<S>, SearchError> {
        let reports = self.collect()?;
        self.round += 1;

        let (slots, swaps) = match settle_round(self.round, reports) {
            Settlement::Terminal(terminal) => {
                log::info!(
                    "chain {} reached a terminal state in round {}",
                    terminal.chain_index,
                    terminal.round
                );
                return Ok(RoundOutcome::Terminal(terminal));
            }
            Settlement::Exchanged { slots, swaps } => (slots, swaps),
        };

        let report = RoundReport {
            round: self.round,
            scores: slots.iter().map(|s| s.score()).collect(),
            swaps,
        };
        log::trace!("round {}: scores {:?}", report.round, report.scores);
        if self.progress_every > 0 && self.round % self.progress_every == 0 {
            log::debug!(
                "round {}: best score {}",
                self.round,
                report.best_score().unwrap_or(u64::MAX)
            );
        }
        if let Some(observer) = self.observer.as_mut() {
            observer(&report);
        }

        self.resume(slots)?;
        Ok(RoundOutcome::Continue(report))
    }

    /// Run rounds until some chain reports a terminal state.
    pub fn run(&mut self) -> Result<TerminalState<S>, SearchError> {
        loop {
            if let RoundOutcome::Terminal(terminal) = self.run_round()? {
                return Ok(terminal);
            }
        }
    }
}
