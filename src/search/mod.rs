//! Replica-exchange (parallel tempering) Metropolis search
//!
//! This module provides the coordination layer:
//! - Stochastic: per-chain heat acceptance and the chain worker loop
//! - Parallel: rendezvous channels, rank exchange, the hub, and the coordinator
//!   that spawns chains and drives rounds until a terminal state appears

pub mod config;
pub mod error;
pub mod parallel;
pub mod result;
pub mod stochastic;

pub use config::{ConfigError, HeatLadder, TemperingConfig};
pub use error::SearchError;
pub use parallel::{
    Hub, RoundObserver, RoundOutcome, rank_exchange, run_tempering, run_tempering_observed,
};
pub use result::{ChainStatistics, RoundReport, TemperingResult, TerminalState};
pub use stochastic::{Chain, HeatAcceptance};
