//! A terminal storefront for farmhouse stays.
//!
//! Run the binary to launch the interactive browser: three card rails
//! (AI picks, listings, guest reviews) rotate on their own, wrap around
//! seamlessly, and follow keyboard or mouse jumps.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_sources, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::catalog::Catalog;
use crate::ui::slide::SlideAnimator;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Farmhouse-stay marketplace, in your terminal")]
struct Cli {
    /// Auto-advance interval in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Card glide duration in milliseconds (also the wrap settle delay).
    #[arg(long)]
    slide_ms: Option<u64>,

    /// Seconds before the AI-picks rail fetches a fresh batch.
    #[arg(long)]
    ttl_secs: Option<u64>,
}

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── configuration ─────────────────────────────────────────
    let mut config = AppConfig::load();
    if let Some(v) = cli.interval_ms {
        config.advance_interval_ms = v.clamp(500, 60_000);
    }
    if let Some(v) = cli.slide_ms {
        config.slide_ms = v.clamp(100, 3_000);
    }
    if let Some(v) = cli.ttl_secs {
        config.suggestion_ttl_secs = v.clamp(5, 3_600);
    }

    let timing = config.timing()?;
    // The renderer's glide time and the engine's settle delay must be the
    // same value, or the wrap rewrite fires mid-animation.
    let slide = SlideAnimator::with_duration(config.slide_duration(), config::TICK_RATE);
    timing.validate_transition(slide.duration())?;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut state = AppState::new(
        config,
        Catalog::sample(),
        timing,
        slide,
        size.width,
        size.height,
        Instant::now(),
    );

    // ── event loop ────────────────────────────────────────────
    let mut events = spawn_event_sources(config::TICK_RATE);

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k, Instant::now()),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m, Instant::now()),
            AppEvent::Resize(w, h) => state.on_resize(w, h, Instant::now()),
            AppEvent::Tick(now) => state.on_tick(now),
        }

        if state.should_quit {
            break;
        }
    }

    // Disarm every carousel deadline before the terminal goes away.
    state.shutdown();

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
