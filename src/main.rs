mod app;
mod config;
mod content;
mod gallery;
mod links;
mod scroll;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, HitMap, Popup};
use config::AppConfig;
use content::Portfolio;
use gallery::{paginator, Breakpoints};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "A single-page personal portfolio for the terminal")]
struct Args {
    /// Portfolio content file (TOML)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Print the loaded portfolio as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Photo autoplay interval in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Print the project pages for a viewport width (pixels) and exit
    #[arg(short, long)]
    width: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let mut config = AppConfig::load().unwrap_or_default();

    // CLI flags win over the config file
    if args.light {
        config.dark_mode = false;
    }
    if let Some(ms) = args.interval_ms.filter(|ms| *ms > 0) {
        config.autoplay_interval_ms = ms;
    }

    let portfolio = load_portfolio(args.content.as_ref().or(config.content_path.as_ref()))?;

    // Handle CLI-only commands
    if args.dump {
        println!("{}", serde_json::to_string_pretty(&portfolio)?);
        return Ok(());
    }

    if let Some(width) = args.width {
        return print_pages(&portfolio, &config, width);
    }

    // Run TUI
    run_tui(portfolio, config).await
}

/// Log to a file only when RUST_LOG is set; the TUI owns the terminal
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let file = AppConfig::config_dir()
        .and_then(|dir| Ok(std::fs::File::create(dir.join("folio.log"))?));

    match file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(std::sync::Mutex::new(file)))
                .with(tracing_subscriber::EnvFilter::from_default_env())
                .init();
        }
        Err(e) => eprintln!("folio: logging disabled: {}", e),
    }
}

fn load_portfolio(path: Option<&PathBuf>) -> Result<Portfolio> {
    match path {
        Some(path) => Ok(Portfolio::from_file(path)?),
        None => {
            tracing::debug!("Using built-in portfolio content");
            Ok(Portfolio::builtin())
        }
    }
}

fn print_pages(portfolio: &Portfolio, config: &AppConfig, width: u32) -> Result<()> {
    let output = page_layout(portfolio, &config.breakpoints, width);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Project titles on each page at a viewport width, as printed by `--width`
fn page_layout(portfolio: &Portfolio, breakpoints: &Breakpoints, width: u32) -> serde_json::Value {
    let page_size = paginator::page_size(width, breakpoints);
    let total = paginator::total_pages(portfolio.projects.len(), page_size);

    let pages: Vec<Vec<&str>> = (0..total)
        .map(|page| {
            paginator::current_slice(&portfolio.projects, page, page_size)
                .iter()
                .map(|p| p.title.as_str())
                .collect()
        })
        .collect();

    serde_json::json!({
        "viewport_width": width,
        "page_size": page_size,
        "total_pages": total,
        "pages": pages,
    })
}

/// Raw mode, alternate screen and mouse capture, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

async fn run_tui(portfolio: Portfolio, config: AppConfig) -> Result<()> {
    // Setup terminal
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    // Create app state; autoplay lives as long as the app
    let mut app = App::new(portfolio, config, size.width, size.height);
    app.mount();
    tracing::info!("Started at {}x{}", size.width, size.height);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    app.unmount();
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app))?;
        app.set_hit_map(hits);

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    _ => {
                        // Handle key and catch any errors to prevent crashes
                        if let Err(e) = app.handle_key(key).await {
                            app.set_status(format!("Error: {}", e));
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if let Err(e) = app.handle_mouse(mouse).await {
                        app.set_status(format!("Error: {}", e));
                    }
                }
                Event::Resize(columns, rows) => app.on_resize(columns, rows),
                _ => {}
            }
        }

        // Autoplay ticks and status timeout
        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_medium_width() {
        let layout = page_layout(&Portfolio::builtin(), &Breakpoints::default(), 900);
        assert_eq!(
            layout,
            serde_json::json!({
                "viewport_width": 900,
                "page_size": 2,
                "total_pages": 2,
                "pages": [
                    ["Chat Application", "Portfolio Website"],
                    ["Weather Dashboard", "E-Commerce Platform"],
                ],
            })
        );
    }

    #[test]
    fn test_page_layout_without_projects() {
        let mut portfolio = Portfolio::builtin();
        portfolio.projects.clear();
        let layout = page_layout(&portfolio, &Breakpoints::default(), 1280);
        assert_eq!(layout["total_pages"], 1);
        assert_eq!(layout["pages"], serde_json::json!([[]]));
    }
}
