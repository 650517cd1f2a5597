use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use connect_four::config::AppConfig;
use connect_four::game::{GameController, Player};
use connect_four::input::{AgentInput, ConsoleInput, MoveSource, SourceKind};
use connect_four::logging::{self, LogTarget};
use connect_four::ui::{App, ConsoleRenderer};

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Line-based console game instead of the full-screen board
    #[arg(long)]
    plain: bool,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    columns: Option<usize>,

    /// Move source for player 2
    #[arg(long, value_enum)]
    player_two: Option<SourceKind>,

    /// Override the training-data export directory
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Export the board and chosen column before every accepted move
    #[arg(long)]
    record_moves: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(kind) = cli.player_two {
        config.players.two = kind;
    }
    if let Some(dir) = cli.export_dir {
        config.export.dir = dir;
    }
    if cli.record_moves {
        config.export.record_moves = true;
    }
    config.validate().context("invalid configuration")?;

    if cli.plain {
        logging::init(&config.logging, LogTarget::Stderr)?;
        run_console(&config)
    } else {
        logging::init(&config.logging, LogTarget::File)?;
        run_tui(&config)
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let seat = |kind: SourceKind, player: Player| -> Box<dyn MoveSource> {
        match kind {
            SourceKind::Human => Box::new(ConsoleInput::new(
                player.name(),
                Rc::clone(&stdin),
                io::stdout(),
            )),
            SourceKind::Agent => Box::new(AgentInput::new()),
        }
    };

    let mut controller = GameController::new(
        config,
        seat(config.players.one, Player::One),
        seat(config.players.two, Player::Two),
    )?;
    let mut renderer = ConsoleRenderer::new(io::stdout());
    let outcome = controller.run(&mut renderer)?;
    info!(?outcome, "game finished");
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("terminal UI started");
    let res = app.run(&mut terminal);

    // Restore terminal even if the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
