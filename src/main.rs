use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use wellness_tui::{
    app::{update, AppState},
    event::{poll_key, AppEvent},
    view::render,
};

/// Terminal health & wellness tracker: steps, meals, hydration and mood on
/// one home menu. Nothing is persisted; every run starts fresh.
#[derive(Debug, Parser)]
#[command(name = "wellness-tui", version, about)]
struct Cli {
    /// Render tick interval in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_rate: u64,

    /// Append debug logs to this file (no logging when omitted)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic handler for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs only ever go to a file.
    // The guard keeps the background writer alive until exit.
    let _log_guard = cli.log_file.as_deref().map(init_logging).transpose()?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let state = AppState::new();
    let tick_rate = Duration::from_millis(cli.tick_rate);

    let result = run_event_loop(&mut terminal, state, tick_rate);

    // Terminal cleanup (always execute even if event loop errored)
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop following Elm Architecture.
/// Separated from main() for testability.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state: AppState,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    tracing::info!(tick_ms = tick_rate.as_millis() as u64, "started");

    loop {
        // Render current state
        terminal.draw(|frame| {
            render(&state, frame);
        })?;

        // Poll keyboard events with tick-aligned timeout
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if let Some(key) = poll_key(timeout)? {
            tracing::debug!(?key, page = %state.page, "key");
            state = update(state, AppEvent::Key(key));
        }

        // Tick event
        if last_tick.elapsed() >= tick_rate {
            state = update(state, AppEvent::Tick(Local::now()));
            last_tick = Instant::now();
        }

        // Check quit condition
        if state.should_quit {
            tracing::info!("quit requested");
            break;
        }
    }

    Ok(())
}

/// Set up file logging through a non-blocking appender.
/// Returns the worker guard; dropping it flushes the log.
fn init_logging(path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file = path
        .file_name()
        .ok_or_else(|| eyre!("--log-file must name a file: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
