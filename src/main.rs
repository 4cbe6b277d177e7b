//! Higher or Lower - CLI
//!
//! Plays and benchmarks the higher-or-lower guessing game with blind,
//! binary and Bayesian search.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use higher_lower::{
    commands::{
        PlayConfig, SimulationConfig, compare, human, play_single, run_benchmark, run_compare,
        run_scaling, run_showdown, scaling,
    },
    core::TargetMode,
    logging::init_logging,
    output::{
        print_benchmark_result, print_compare_rows, print_play_outcome, print_scaling_rows,
        print_showdown_result,
    },
    solver::StrategyKind,
};

#[derive(Parser)]
#[command(
    name = "higher_lower",
    about = "Higher-or-lower simulator comparing blind, binary and Bayesian search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: blind (random), binary (optimal, default) or bayesian
    #[arg(short, long, global = true, default_value = "binary")]
    strategy: String,

    /// Upper bound N of the range 1..=N
    #[arg(
        short = 'n',
        long,
        global = true,
        default_value = "10000",
        env = "HIGHER_LOWER_LIMIT"
    )]
    limit: u32,

    /// Base random seed for reproducible runs
    #[arg(long, global = true, env = "HIGHER_LOWER_SEED")]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and show every guess (default)
    Play {
        /// Target selection: uniform (default) or biased
        #[arg(short, long, default_value = "uniform")]
        mode: String,

        /// Fixed target instead of a random one
        #[arg(short, long)]
        target: Option<u32>,

        /// Show the live range before each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark one strategy over many games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'g', long, default_value = "1000")]
        games: usize,

        /// Target selection: uniform (default) or biased
        #[arg(short, long, default_value = "uniform")]
        mode: String,

        /// Replay the game that needed the most guesses
        #[arg(long)]
        show_worst: bool,
    },

    /// Blind vs binary search across several limits
    Compare {
        /// Games per strategy per limit
        #[arg(short = 'g', long, default_value = "1000")]
        games: usize,

        /// Limits to test (default: 100 to 1,000,000)
        #[arg(long, value_delimiter = ',')]
        limits: Vec<u32>,
    },

    /// How fast the blind-search mean converges to 2 ln N
    Scaling {
        /// Limits to test (default: 100 to 100,000)
        #[arg(long, value_delimiter = ',')]
        limits: Vec<u32>,

        /// Simulation counts to report (default: 10 to 20,000)
        #[arg(long, value_delimiter = ',')]
        sims: Vec<usize>,
    },

    /// Bias model peaks and a strategy showdown on biased targets
    Human {
        /// Number of rounds
        #[arg(short = 'g', long, default_value = "5000")]
        games: usize,

        /// How many bias peaks to list
        #[arg(short, long, default_value_t = human::DEFAULT_PEAKS)]
        peaks: usize,
    },
}

fn parse_mode(name: &str) -> Result<TargetMode> {
    match TargetMode::from_name(name) {
        Some(mode) => Ok(mode),
        None => bail!("unknown target mode '{name}' (expected uniform or biased)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: "uniform".to_string(),
        target: None,
        verbose: false,
    });

    match command {
        Commands::Play {
            mode,
            target,
            verbose,
        } => run_play_command(&cli.strategy, cli.limit, &mode, target, cli.seed, verbose),
        Commands::Benchmark {
            games,
            mode,
            show_worst,
        } => run_benchmark_command(&cli.strategy, cli.limit, games, &mode, cli.seed, show_worst),
        Commands::Compare { games, limits } => run_compare_command(games, &limits, cli.seed),
        Commands::Scaling { limits, sims } => run_scaling_command(&limits, &sims, cli.seed),
        Commands::Human { games, peaks } => {
            run_human_command(cli.limit, games, peaks, cli.seed)
        }
    }
}

fn run_play_command(
    strategy_name: &str,
    limit: u32,
    mode: &str,
    target: Option<u32>,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let mut config = PlayConfig::new(limit, StrategyKind::from_name(strategy_name)?);
    config.mode = parse_mode(mode)?;
    config.target = target;
    config.seed = seed;

    let outcome = play_single(&config).context("game could not be played")?;
    print_play_outcome(&outcome, verbose);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    limit: u32,
    games: usize,
    mode: &str,
    seed: Option<u64>,
    show_worst: bool,
) -> Result<()> {
    let kind = StrategyKind::from_name(strategy_name)?;
    let mode = parse_mode(mode)?;

    println!("Running {kind} search on {games} games (N = {limit}, {mode} targets)...");

    let config = SimulationConfig::new(limit, games)
        .with_seed(seed)
        .with_progress(true);
    let result = run_benchmark(kind, mode, &config)?;
    print_benchmark_result(&result);

    if show_worst {
        match result.worst_outcome().context("worst game could not be replayed")? {
            Some(outcome) => {
                println!("\n🍀 Unluckiest game of the batch:");
                print_play_outcome(&outcome, true);
            }
            None => println!("\nNo games were played."),
        }
    }
    Ok(())
}

fn run_compare_command(games: usize, limits: &[u32], seed: Option<u64>) -> Result<()> {
    let limits = if limits.is_empty() {
        compare::DEFAULT_LIMITS
    } else {
        limits
    };

    println!("Starting head-to-head comparison ({games} games per strategy per limit)...");
    let rows = run_compare(limits, games, seed, true)?;
    print_compare_rows(&rows);
    Ok(())
}

fn run_scaling_command(limits: &[u32], sims: &[usize], seed: Option<u64>) -> Result<()> {
    let limits = if limits.is_empty() {
        scaling::DEFAULT_LIMITS
    } else {
        limits
    };
    let sims = if sims.is_empty() {
        scaling::DEFAULT_SIM_COUNTS
    } else {
        sims
    };

    println!("Starting multi-variable scaling experiment...");
    let rows = run_scaling(limits, sims, seed, true)?;
    print_scaling_rows(&rows);
    Ok(())
}

fn run_human_command(limit: u32, games: usize, peaks: usize, seed: Option<u64>) -> Result<()> {
    println!("Simulating {games} games against a human opponent (N = {limit})...");
    let result = run_showdown(limit, games, peaks, seed, true)?;
    print_showdown_result(&result);
    Ok(())
}
