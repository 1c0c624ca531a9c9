//! Arimaa CLI
//!
//! Play against an engine on a text board, or ask an engine for its move.
//!
//! - `arimaa play --human gold` - play Gold against the engine
//! - `arimaa play --human none` - watch the engine play itself
//! - `arimaa bestmove <board> --side silver` - print the engine's choice

mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arimaa_core::{ArimaaConfig, Board, Game, Side, STEPS_PER_TURN, START_BOARD};
use clap::{Parser, Subcommand, ValueEnum};
use tournament::create_engine;
use tracing::info;
use tracing_subscriber::EnvFilter;

use session::{best_move_line, Flow, Session};

/// Arimaa rules engine and alpha-beta player
#[derive(Parser)]
#[command(name = "arimaa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config with search, eval and match settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Engine: minimax, random or random:SEED
    #[arg(short, long, global = true, default_value = "minimax")]
    engine: String,

    /// Search depth in plies (overrides the config)
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Human {
    Gold,
    Silver,
    None,
}

impl Human {
    fn side(self) -> Option<Side> {
        match self {
            Human::Gold => Some(Side::Gold),
            Human::Silver => Some(Side::Silver),
            Human::None => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on a text board
    Play {
        /// Side played from the keyboard
        #[arg(long, value_enum, default_value = "gold")]
        human: Human,
        /// Starting board, ranks 8 to 1 separated by '/'
        #[arg(long, default_value = START_BOARD)]
        board: Board,
        /// Side to move first
        #[arg(long, default_value = "gold")]
        to_move: Side,
    },
    /// Print the engine's best action for a board
    Bestmove {
        #[arg(default_value = START_BOARD)]
        board: Board,
        #[arg(long, default_value = "gold")]
        side: Side,
        /// Steps left in the turn
        #[arg(long, default_value_t = STEPS_PER_TURN)]
        steps: u8,
        /// Print the whole turn instead of one action
        #[arg(long)]
        turn: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config =
        ArimaaConfig::load_or_default(cli.config.as_ref()).context("loading configuration")?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    let mut engine = create_engine(&cli.engine, &config.eval)?;

    match cli.command {
        Commands::Play {
            human,
            board,
            to_move,
        } => {
            info!(engine = engine.name(), depth = config.search.depth, "starting game");
            let game = Game::from_board(board, to_move);
            let mut session = Session::new(
                game,
                engine,
                human.side(),
                config.search.clone(),
                config.matches.max_turns,
            );
            play(&mut session)
        }
        Commands::Bestmove {
            board,
            side,
            steps,
            turn,
        } => {
            let steps = steps.min(STEPS_PER_TURN);
            println!(
                "{}",
                best_move_line(engine.as_mut(), &board, side, steps, &config.search, turn)
            );
            Ok(())
        }
    }
}

fn play(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    session.start(&mut stdout)?;
    writeln!(stdout, "type 'help' for commands")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let flow = session.handle(&line, &mut stdout)?;
        stdout.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
