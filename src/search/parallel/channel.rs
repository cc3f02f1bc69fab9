//! Rendezvous channels between the hub and its chains.
//!
//! Every slot gets two zero-capacity channels: the hub resumes a chain by
//! sending it a state, and the chain reports by sending the state back. A send
//! blocks until the other side receives, so a state is owned by exactly one
//! side at any instant.

use crossbeam_channel::{Receiver, Sender, bounded};

/// Hub-side endpoints for one chain slot.
pub struct SlotChannels<S> {
    /// Hand a state to the chain for its next round.
    pub resume: Sender<S>,
    /// Receive the chain's report for the current round.
    pub report: Receiver<S>,
}

/// Chain-side endpoints for one chain slot.
pub struct ChainChannels<S> {
    /// Wait for the hub to hand over a state.
    pub resume: Receiver<S>,
    /// Report the resulting state to the hub.
    pub report: Sender<S>,
}

/// Create one rendezvous channel pair per slot.
pub fn create_channels<S>(num_slots: usize) -> (Vec<SlotChannels<S>>, Vec<ChainChannels<S>>) {
    let mut slots = Vec::with_capacity(num_slots);
    let mut chains = Vec::with_capacity(num_slots);

    for _ in 0..num_slots {
        let (resume_tx, resume_rx) = bounded(0);
        let (report_tx, report_rx) = bounded(0);
        slots.push(SlotChannels {
            resume: resume_tx,
            report: report_rx,
        });
        chains.push(ChainChannels {
            resume: resume_rx,
            report: report_tx,
        });
    }

    (slots, chains)
}
