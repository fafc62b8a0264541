use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe_negamax::ai::AgentKind;
use tictactoe_negamax::config::AppConfig;
use tictactoe_negamax::game::{GameState, PlayerId, Snapshot};
use tictactoe_negamax::runner::Runner;

/// Play k-in-a-row between humans and negamax searches.
#[derive(Parser)]
#[command(name = "tictactoe", about = "k-in-a-row with negamax players")]
struct Cli {
    /// First player (X): n|negamax, a|negamax-ab, h|human
    #[arg(value_enum)]
    player1: AgentKind,

    /// Second player (O): n|negamax, a|negamax-ab, h|human
    #[arg(value_enum)]
    player2: AgentKind,

    /// Resume from a board snapshot file
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override tokens in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Log every node the searches visit
    #[arg(long)]
    trace_search: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.trace_search { "trace" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(win_length) = cli.win_length {
        config.board.win_length = win_length;
    }
    if cli.trace_search {
        config.enable_search_trace();
    }
    // A snapshot's own size bounds the win length, checked when it is loaded
    if cli.board.is_some() {
        config.validate_search()
    } else {
        config.validate()
    }
    .context("invalid settings")?;

    let state = match &cli.board {
        Some(path) => {
            let snapshot = Snapshot::load(path)?;
            tracing::info!(path = %path.display(), moves = snapshot.moves, "loaded board");
            GameState::from_snapshot(snapshot, config.board.win_length)
                .with_context(|| format!("board from {}", path.display()))?
        }
        None => GameState::new(config.board.rows, config.board.cols, config.board.win_length)?,
    };

    let players = vec![
        cli.player1.build(PlayerId::First, &config),
        cli.player2.build(PlayerId::Second, &config),
    ];

    let mut runner = Runner::new(state, players);
    let mut stdout = std::io::stdout();
    runner.run(&mut stdout)?;
    Ok(())
}
