//! Metropolis chains for tempering search
//!
//! Each chain mutates the state it is handed and keeps or rolls back the
//! mutation using its slot's heat as a flat acceptance probability for
//! worsening moves.

pub mod acceptance;
pub mod chain;

pub use acceptance::HeatAcceptance;
pub use chain::Chain;
