//! Tournament CLI
//!
//! Run matches between engines and save the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arimaa_core::ArimaaConfig;
use clap::{Parser, Subcommand};
use tournament::{create_engine, MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

/// Arimaa Tournament Runner
#[derive(Parser)]
#[command(name = "tournament")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config with search, eval and match settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two engines (minimax, random or random:SEED)
    Match {
        engine1: String,
        engine2: String,
        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,
        /// Search depth in plies
        #[arg(short, long)]
        depth: Option<u8>,
        /// Turn cap before a game is drawn
        #[arg(long)]
        max_turns: Option<u32>,
        /// Save results as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the report of saved results
    Report { path: PathBuf },
}

fn run_match(
    config: &ArimaaConfig,
    engine1_spec: &str,
    engine2_spec: &str,
    games: Option<u32>,
    depth: Option<u8>,
    max_turns: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut search = config.search.clone();
    if let Some(depth) = depth {
        search.depth = depth;
    }
    let match_config = MatchConfig {
        num_games: games.unwrap_or(config.matches.games),
        search,
        max_turns: max_turns.unwrap_or(config.matches.max_turns),
        ..Default::default()
    };

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Depth: {}, Turn cap: {}",
        match_config.num_games, match_config.search.depth, match_config.max_turns
    );
    println!();

    let mut engine1 = create_engine(engine1_spec, &config.eval)?;
    let mut engine2 = create_engine(engine2_spec, &config.eval)?;

    let runner = MatchRunner::new(match_config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = output {
        let mut results = TournamentResults::new(
            &format!("{} vs {}", engine1_spec, engine2_spec),
            vec![engine1_spec.to_string(), engine2_spec.to_string()],
            TournamentConfig {
                games_per_match: match_config.num_games,
                search_depth: match_config.search.depth,
                max_turns: match_config.max_turns,
            },
        );
        results.add_match(engine1_spec, engine2_spec, result);
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ArimaaConfig::load_or_default(cli.config.as_ref())
        .context("loading configuration")?;

    match cli.command {
        Commands::Match {
            engine1,
            engine2,
            games,
            depth,
            max_turns,
            output,
        } => run_match(&config, &engine1, &engine2, games, depth, max_turns, output),
        Commands::Report { path } => {
            let results = TournamentResults::load(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            results.print_report();
            Ok(())
        }
    }
}
