use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tempering::model::distance::{DEFAULT_SPREAD, DEFAULT_TARGET};
use tempering::model::{DistanceState, MutationStep};
use tempering::search::config::ConfigError;
use tempering::search::{TemperingConfig, run_tempering};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "tempering")]
#[command(about = "tempering - replica-exchange Metropolis search")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Heat ladder selection shared by every subcommand
#[derive(clap::Args)]
struct LadderArgs {
    /// Comma-separated heats in [0, 1], one per chain (e.g. 0,0.001,0.01)
    #[arg(long, value_delimiter = ',')]
    heats: Option<Vec<f64>>,
    /// Number of chains; must match the number of heats
    #[arg(long)]
    chains: Option<usize>,
    /// JSON file with heats, chains and seed (flags override file values)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for an integer at zero distance from a target
    Run {
        #[command(flatten)]
        ladder: LadderArgs,

        // --- Model options ---
        /// Integer the search looks for
        #[arg(long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
        target: i64,
        /// Half-width of the uniform mutation window
        #[arg(long, default_value_t = DEFAULT_SPREAD)]
        spread: i64,
        /// Move by exactly this amount every mutation (overrides --spread)
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i64>,

        // --- Run options ---
        /// Base random seed for reproducibility (chain i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Rounds between progress log lines
        #[arg(long)]
        progress_every: Option<u64>,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Validate a heat ladder and print its slots
    Ladder {
        #[command(flatten)]
        ladder: LadderArgs,
    },
}

/// Options for a search run
struct RunOptions {
    target: i64,
    step: MutationStep,
    seed: Option<u64>,
    progress_every: Option<u64>,
    verbose: bool,
}

// --- Configuration ---

fn load_config(ladder: &LadderArgs) -> Result<TemperingConfig, ConfigError> {
    let mut config = match &ladder.config {
        Some(path) => TemperingConfig::from_json_file(path)?,
        None => TemperingConfig::default(),
    };

    if let Some(heats) = &ladder.heats {
        config = config.with_heats(heats.clone());
    }
    if let Some(chains) = ladder.chains {
        config = config.with_chains(chains);
    }

    config.validate()?;
    Ok(config)
}

fn mutation_step(spread: i64, step: Option<i64>) -> Result<MutationStep, ConfigError> {
    match step {
        Some(delta) => Ok(MutationStep::Fixed(delta)),
        None if spread > 0 => Ok(MutationStep::Uniform { spread }),
        None => Err(ConfigError::InvalidSpread(spread)),
    }
}

// --- Commands ---

fn run_search(
    ladder: &LadderArgs,
    options: &RunOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(ladder)?;
    if options.seed.is_some() {
        config = config.with_seed_option(options.seed);
    }
    if let Some(rounds) = options.progress_every {
        config = config.with_progress_every(rounds);
    }

    println!("Running tempering search...");
    println!("  Chains: {}", config.heats.len());
    println!("  Target: {}", options.target);
    match options.step {
        MutationStep::Uniform { spread } => println!("  Mutation: uniform +/- {}", spread),
        MutationStep::Fixed(delta) => println!("  Mutation: fixed {:+}", delta),
    }

    let target = options.target;
    let step = options.step;
    let result = run_tempering(&config, |_| DistanceState::new(target, step))?;

    println!();
    if options.verbose {
        print!("{}", result.format_summary());
    } else {
        println!("{}", result.terminal);
        println!("Rounds: {}", result.rounds);
        println!("Time: {:.2?}", result.elapsed);
        println!("Base seed: {}", result.base_seed);
    }

    Ok(())
}

fn print_ladder(ladder: &LadderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(ladder)?;
    let ladder = config.validate()?;

    println!("Heat ladder ({} chains):", ladder.len());
    for (slot, heat) in ladder.heats().iter().enumerate() {
        println!("  slot {}: heat {}", slot, heat);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_filter = match args.command {
        Commands::Run { verbose: true, .. } => "debug",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match args.command {
        Commands::Run {
            ladder,
            target,
            spread,
            step,
            seed,
            progress_every,
            verbose,
        } => match mutation_step(spread, step) {
            Ok(step) => {
                let options = RunOptions {
                    target,
                    step,
                    seed,
                    progress_every,
                    verbose,
                };
                run_search(&ladder, &options)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Ladder { ladder } => print_ladder(&ladder),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
