//! Round-based coordination of tempering chains.
//!
//! # Architecture
//!
//! The parallel side of the search consists of:
//! - A **hub** that collects one report per slot, checks for a terminal state,
//!   runs the rank exchange, and resumes every chain
//! - One **chain** thread per heat ladder slot
//! - A **channel system** of zero-capacity rendezvous channels, so each state
//!   is owned by exactly one side at a time
//!
//! # Example
//!
//! ```no_run
//! use tempering::model::{DistanceState, MutationStep};
//! use tempering::search::{TemperingConfig, run_tempering};
//!
//! let config = TemperingConfig::default().with_seed(42);
//! let result = run_tempering(&config, |_| DistanceState::new(500, MutationStep::default()))?;
//! println!("{}", result.terminal);
//! # Ok::<(), tempering::search::SearchError>(())
//! ```

pub mod channel;
pub mod coordinator;
pub mod exchange;
pub mod hub;

pub use coordinator::{run_tempering, run_tempering_observed};
pub use exchange::rank_exchange;
pub use hub::{Hub, RoundObserver, RoundOutcome};
