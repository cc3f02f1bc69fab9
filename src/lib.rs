//! Replica-exchange Metropolis search.
//!
//! A fixed set of chains, each with its own heat, advance one step per round
//! and report to a hub that exchanges their states by score before resuming
//! them. The search ends when any chain reports a zero score.

pub mod model;
pub mod search;
