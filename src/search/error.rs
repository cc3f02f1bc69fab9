//! Errors surfaced by a tempering run

use crate::search::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Chain {index} disconnected before the run finished")]
    ChainDisconnected { index: usize },
    #[error("Chain {index} panicked")]
    ChainPanicked { index: usize },
    #[error("Failed to spawn chain {index}: {source}")]
    Spawn {
        index: usize,
        source: std::io::Error,
    },
    #[error("Expected {expected} initial states, got {actual}")]
    SlotCountMismatch { expected: usize, actual: usize },
}
