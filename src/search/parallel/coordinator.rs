//! Tempering coordinator that spawns the chains and drives the hub.

use crate::model::SearchState;
use crate::search::config::{TemperingConfig, chain_seed};
use crate::search::error::SearchError;
use crate::search::parallel::channel::create_channels;
use crate::search::parallel::hub::{Hub, RoundObserver};
use crate::search::result::TemperingResult;
use crate::search::stochastic::chain::Chain;
use rand::Rng;
use std::thread;
use std::time::Instant;

/// Run a tempering search until some chain reports a terminal state.
///
/// `factory(i)` builds the initial state handed to slot `i`.
pub fn run_tempering<S, F>(
    config: &TemperingConfig,
    factory: F,
) -> Result<TemperingResult<S>, SearchError>
where
    S: SearchState,
    F: FnMut(usize) -> S,
{
    run_tempering_observed(config, factory, None)
}

/// Same as `run_tempering`, calling `observer` after every non-terminal round.
pub fn run_tempering_observed<S, F>(
    config: &TemperingConfig,
    factory: F,
    observer: Option<RoundObserver>,
) -> Result<TemperingResult<S>, SearchError>
where
    S: SearchState,
    F: FnMut(usize) -> S,
{
    let start_time = Instant::now();
    let ladder = config.validate()?;
    let num_chains = ladder.len();

    // Unseeded runs still get a concrete seed so they can be replayed
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "starting tempering run: {} chains, base seed {}",
        num_chains,
        base_seed
    );

    let (slot_channels, chain_channels) = create_channels(num_chains);

    let mut handles = Vec::with_capacity(num_chains);
    for (index, (channels, &heat)) in chain_channels
        .into_iter()
        .zip(ladder.heats())
        .enumerate()
    {
        let chain = Chain::new(index, heat, chain_seed(base_seed, index));
        let handle = thread::Builder::new()
            .name(format!("chain-{}", index))
            .spawn(move || chain.run(channels))
            .map_err(|source| SearchError::Spawn { index, source })?;
        handles.push(handle);
    }

    let mut hub = Hub::new(slot_channels).with_progress_every(config.progress_every);
    if let Some(observer) = observer {
        hub = hub.with_observer(observer);
    }

    let initial: Vec<S> = (0..num_chains).map(factory).collect();
    let outcome = hub.resume(initial).and_then(|()| hub.run());
    let rounds = hub.rounds();

    // Dropping the hub closes every resume channel, which ends the chains
    drop(hub);

    let mut chain_statistics = Vec::with_capacity(num_chains);
    let mut panicked = None;
    for (index, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(stats) => chain_statistics.push(stats),
            Err(_) => {
                log::error!("chain {} panicked", index);
                panicked.get_or_insert(index);
            }
        }
    }
    if let Some(index) = panicked {
        return Err(SearchError::ChainPanicked { index });
    }

    let terminal = outcome?;
    let elapsed = start_time.elapsed();
    log::info!(
        "tempering run finished after {} rounds in {:.2?}",
        rounds,
        elapsed
    );

    Ok(TemperingResult {
        terminal,
        rounds,
        elapsed,
        base_seed,
        chain_statistics,
    })
}
