use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_n::config::MatchConfig;
use connect_n::error::MatchError;
use connect_n::game::MatchController;
use connect_n::input::ConsoleInput;
use connect_n::ui::{App, TextOutput};

/// Play Connect N: two players, configurable grid, first to the target score.
#[derive(Parser)]
#[command(name = "connect-n", about = "Two-player generalized Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-n.toml")]
    config: PathBuf,

    /// Override number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override pieces in a row needed to win a round
    #[arg(long)]
    connect: Option<usize>,

    /// Override round wins needed to win the match
    #[arg(long)]
    target: Option<u32>,

    /// Play in the full-screen terminal UI instead of the console prompt
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.tui);

    if cli.print_default_config {
        print!("{}", MatchConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(connect) = cli.connect {
        config.connect_n = connect;
    }
    if let Some(target) = cli.target {
        config.target_score = target;
    }
    config.validate().context("invalid match configuration")?;

    if cli.tui {
        run_tui(&config)
    } else {
        run_console(&config)
    }
}

/// Logs go to stderr, which shares the terminal with the TUI, so the TUI
/// stays quiet unless asked.
fn init_logging(verbose: u8, tui: bool) {
    let level = match (verbose, tui) {
        (0, true) => "off",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_console(config: &MatchConfig) -> Result<()> {
    let mut game = MatchController::new(config).context("setting up match")?;
    let mut input = ConsoleInput::stdio();
    let mut output = TextOutput::new(io::stdout(), game.players());

    match game.play(&mut input, &mut output) {
        Ok(_) => Ok(()),
        Err(MatchError::InputClosed) => {
            log::warn!("input closed after {} rounds", game.rounds_played());
            println!("\nInput closed, match abandoned.");
            Ok(())
        }
        Err(err) => Err(err).context("playing match"),
    }
}

fn run_tui(config: &MatchConfig) -> Result<()> {
    let mut app = App::new(config).context("setting up match")?;

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
