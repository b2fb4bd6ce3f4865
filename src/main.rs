use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_minimax::config::AppConfig;
use connect_four_minimax::game::{GameState, Player};
use connect_four_minimax::search::{Engine, TraceEvent};

/// Recommend the best Connect Four move for the side to play.
#[derive(Parser)]
#[command(
    name = "connect-four-minimax",
    about = "Connect Four move recommendation via alpha-beta minimax"
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Comma-separated columns replayed from the empty board, X first
    /// (e.g. "3,3,4")
    #[arg(long)]
    moves: Option<String>,

    /// Side to move: x or o (defaults to whoever is on turn after --moves)
    #[arg(long)]
    mover: Option<String>,

    /// Print alpha-beta cutoff events to stderr
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    app_config.validate().context("validating configuration")?;

    let state = match &cli.moves {
        Some(moves) => {
            let columns = parse_moves(moves)?;
            GameState::from_moves(&columns)
                .map_err(|e| anyhow::anyhow!("replaying moves: {e:?}"))?
        }
        None => GameState::initial(),
    };
    if state.is_terminal() {
        bail!("the position is already decided: {:?}", state.outcome());
    }

    let mover = match cli.mover.as_deref() {
        Some("x") | Some("X") => Player::X,
        Some("o") | Some("O") => Player::O,
        Some(other) => bail!("unknown mover '{}' (expected 'x' or 'o')", other),
        None => state.current_player(),
    };

    let mut engine = Engine::new(app_config.search);
    if cli.trace {
        engine.set_trace(Box::new(|event| {
            if let TraceEvent::Cutoff { depth, alpha, beta } = event {
                eprintln!("cutoff at depth {depth} (alpha {alpha}, beta {beta})");
            }
        }));
    }

    println!("{}\n", state.board());
    let result = engine.best_move(state.board(), mover);

    match result.column {
        Some(column) => {
            println!(
                "Best move for {}: column {} (value {})",
                mover.name(),
                column,
                result.value
            );
            let after = state
                .board()
                .child(column, mover.to_cell())
                .map_err(|e| anyhow::anyhow!("applying recommended move: {e:?}"))?;
            println!("\n{}", after);
        }
        None => println!("No legal moves available"),
    }

    Ok(())
}

fn parse_moves(moves: &str) -> Result<Vec<usize>> {
    moves
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid column '{}' in --moves", part.trim()))
        })
        .collect()
}
