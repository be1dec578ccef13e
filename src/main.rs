//! homefeed - terminal home feed
//!
//! A small TUI shell: a Home feed with a profile carousel, a hero image,
//! an action row and a footer that switches between five screens.
//!
//! Usage: homefeed [--no-mouse] [--route <name>]

mod app;
mod assets;
mod config;
mod navigator;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::{self, File};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use types::Route;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    help: bool,
    version: bool,
    no_mouse: bool,
    route: Option<Route>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-v" | "--version" => parsed.version = true,
            "--no-mouse" => parsed.no_mouse = true,
            "-r" | "--route" => {
                let name = iter.next().context("--route needs a screen name")?;
                parsed.route = Some(name.parse()?);
            }
            other => anyhow::bail!("unknown argument '{}' (see --help)", other),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    if args.help {
        print_help();
        return Ok(());
    }

    if args.version {
        println!("homefeed {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = run_app(&args);

    // Terminal is already restored here
    if let Err(e) = result {
        tracing::error!(error = ?e, "homefeed exited with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"homefeed - terminal home feed

USAGE:
    homefeed [OPTIONS]

OPTIONS:
    -r, --route <NAME>   Open NAME on top of Home (Home, Search, Friends, Chat, Profile)
        --no-mouse       Do not capture the mouse
    -h, --help           Print help information
    -v, --version        Print version information

KEYBINDINGS:
    1-5              Footer buttons (Search, Friends, Home, Chat, Profile)
    Tab / Shift-Tab  Move focus (Profiles, Actions, Footer)
    h/l, ←/→         Move within the focused row
    Enter            Open the footer button under the cursor
    Esc, Backspace   Back
    t                Cycle theme
    q                Quit

CONFIG:
    ~/.config/homefeed/config.toml

LOGS:
    <cache dir>/homefeed/homefeed.log (filter with RUST_LOG)
"#
    );
}

/// Create `<dir>/homefeed.log`, making `dir` if needed
fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let path = dir.join("homefeed.log");
    File::create(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

/// Log to a file in the cache dir; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("homefeed");
    let file = open_log_file(&dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

/// Apply command line overrides to a freshly built app. Overrides only
/// last for this run and never touch the saved config.
fn build_app(args: &Args, config: config::Config, config_path: Option<PathBuf>) -> App {
    let mut app = App::new(config, config_path);
    if args.no_mouse {
        app.mouse = false;
    }
    if let Some(route) = args.route {
        app.navigate(route);
    }
    app
}

fn run_app(args: &Args) -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Load configuration
    let config_path = config::Config::path()?;
    let config = config::Config::load_from(&config_path)
        .context("Failed to load configuration")?;

    let mut app = build_app(args, config, Some(config_path));
    let mouse = app.mouse;
    tracing::info!(route = %app.route(), mouse, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to release mouse")?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!(depth = app.navigator.depth(), "exiting");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        let completed = terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        app.viewport = completed.area;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                _ => {}
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
