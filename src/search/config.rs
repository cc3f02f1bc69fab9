//! Configuration for a tempering run

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Heat ladder used when none is configured
pub const DEFAULT_HEATS: [f64; 6] = [0.0, 0.00001, 0.0001, 0.0005, 0.001, 0.01];

/// Default number of rounds between progress log lines
pub const DEFAULT_PROGRESS_EVERY: u64 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Heat ladder must contain at least one heat")]
    EmptyLadder,
    #[error("Heat {index} is {heat}, expected a value in [0, 1]")]
    HeatOutOfRange { index: usize, heat: f64 },
    #[error("Chain count is {chains} but the heat ladder has {heats} heats")]
    LadderLengthMismatch { chains: usize, heats: usize },
    #[error("Mutation spread must be positive, got {0}")]
    InvalidSpread(i64),
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-slot acceptance heats, validated on construction.
///
/// `heats()[i]` is the probability that chain `i` keeps a worsening move.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatLadder(Vec<f64>);

impl HeatLadder {
    pub fn new(heats: Vec<f64>) -> Result<Self, ConfigError> {
        if heats.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        // NaN fails the range check as well
        if let Some((index, &heat)) = heats
            .iter()
            .enumerate()
            .find(|&(_, &h)| !(0.0..=1.0).contains(&h))
        {
            return Err(ConfigError::HeatOutOfRange { index, heat });
        }
        Ok(Self(heats))
    }

    pub fn heats(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn heat(&self, slot: usize) -> Option<f64> {
        self.0.get(slot).copied()
    }
}

/// Configuration for a tempering run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperingConfig {
    /// Heat per chain slot (slot `i` runs at `heats[i]`).
    pub heats: Vec<f64>,
    /// Expected chain count; must match the ladder length when set.
    pub chains: Option<usize>,
    /// Base random seed (chain `i` gets `seed + i`).
    pub seed: Option<u64>,
    /// Rounds between progress log lines (0 disables them).
    pub progress_every: u64,
}

impl Default for TemperingConfig {
    fn default() -> Self {
        Self {
            heats: DEFAULT_HEATS.to_vec(),
            chains: None,
            seed: None,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl TemperingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_heats(mut self, heats: Vec<f64>) -> Self {
        self.heats = heats;
        self
    }

    pub fn with_chains(mut self, chains: usize) -> Self {
        self.chains = Some(chains);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_progress_every(mut self, rounds: u64) -> Self {
        self.progress_every = rounds;
        self
    }

    /// Check the chain count against the ladder and build the ladder.
    pub fn validate(&self) -> Result<HeatLadder, ConfigError> {
        if let Some(chains) = self.chains
            && chains != self.heats.len()
        {
            return Err(ConfigError::LadderLengthMismatch {
                chains,
                heats: self.heats.len(),
            });
        }
        HeatLadder::new(self.heats.clone())
    }
}

/// Seed for the chain bound to `slot`.
pub fn chain_seed(base_seed: u64, slot: usize) -> u64 {
    base_seed.wrapping_add(slot as u64)
}
