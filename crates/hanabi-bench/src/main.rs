use std::path::PathBuf;

use clap::Parser;

use hanabi_bench::logging::init_logging;
use hanabi_bench::runner::{AlgorithmKind, RunConfig, StrategyKind, run};
use hanabi_bench::seed;
use hanabi_bench::stats::RunSummary;

/// Benchmark harness for fireworks strategies.
#[derive(Debug, Parser)]
#[command(
    name = "hanabi-bench",
    author,
    version,
    about = "Deterministic fireworks benchmark harness"
)]
struct Cli {
    /// Number of games to play.
    #[arg(long, value_name = "GAMES", default_value_t = 100)]
    games: usize,

    /// Players at the table (2-5).
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    players: usize,

    /// Strategy family seated at every chair.
    #[arg(long, value_enum, default_value_t = StrategyKind::Clue)]
    strategy: StrategyKind,

    /// Clue selection algorithm (only the clue strategy reads it).
    #[arg(long, value_enum, default_value_t = AlgorithmKind::LowestValue)]
    algorithm: AlgorithmKind,

    /// Master RNG seed. Drawn fresh and persisted when omitted.
    #[arg(long, value_name = "SEED", conflicts_with = "replay")]
    seed: Option<u64>,

    /// Replay the seed persisted by the previous run.
    #[arg(long)]
    replay: bool,

    /// Where the master seed is persisted between runs.
    #[arg(long, value_name = "FILE", default_value = "bench/seed.json")]
    seed_file: PathBuf,

    /// Lookahead depth for the search strategy.
    #[arg(long, value_name = "DEPTH", default_value_t = 4)]
    search_depth: usize,

    /// Node budget for the search strategy.
    #[arg(long, value_name = "NODES", default_value_t = 2_000)]
    search_nodes: usize,

    /// Write structured JSON logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logging_guard = init_logging(cli.log_file.as_deref())?;

    let master_seed = if cli.replay {
        let stored = seed::load(&cli.seed_file)?;
        println!("Replaying seed {} from {}", stored.seed, cli.seed_file.display());
        stored.seed
    } else {
        let fresh = cli.seed.unwrap_or_else(rand::random::<u64>);
        seed::store(&cli.seed_file, fresh)?;
        fresh
    };

    let config = RunConfig {
        games: cli.games,
        players: cli.players,
        strategy: cli.strategy,
        algorithm: cli.algorithm.into(),
        seed: master_seed,
        search_depth: cli.search_depth,
        search_nodes: cli.search_nodes,
    };

    println!(
        "Running {} game{} of {} players with '{}' (seed {master_seed})",
        config.games,
        if config.games == 1 { "" } else { "s" },
        config.players,
        config.strategy.name()
    );

    let stats = run(&config)?;
    print!("{}", RunSummary::from_stats(&stats));

    Ok(())
}
