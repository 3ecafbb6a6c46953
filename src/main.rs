//! Terminal Quantum Flux runner (default binary).
//!
//! Click a particle (or move the cursor with the arrow keys and press space),
//! then click an orthogonal neighbour to swap them. When every particle kind
//! occurs an even number of times the level is cleared.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use quantum_flux::core::GameState;
use quantum_flux::input::{is_force_exit, map_event};
use quantum_flux::term::{GameView, TerminalSurface, Viewport};
use quantum_flux::types::{InputEvent, TARGET_FPS};

#[derive(Parser, Debug)]
#[command(name = "quantum-flux")]
#[command(about = "Swap particles until every kind is paired", long_about = None)]
struct Cli {
    /// Seed for particle placement (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Frame rate cap
    #[arg(long, default_value_t = TARGET_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Append logs to this file (RUST_LOG controls the level, default info)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // TUI apps can't log to stdout, so logging only happens when a file is given.
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, fps = cli.fps, "starting");

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut surface = TerminalSurface::new(Viewport::new(w, h));
    surface.enter()?;

    let result = run(&mut surface, seed, cli.fps);

    // Always try to restore terminal state.
    let _ = surface.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// A quit while the game-over prompt is up leaves the program; the first
/// quit only ends the game.
fn should_exit(game: &GameState, input: InputEvent) -> bool {
    input == InputEvent::Quit && game.game_over()
}

fn run(surface: &mut TerminalSurface, seed: u32, fps: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();

    let frame = Duration::from_micros(1_000_000 / u64::from(fps.max(1)));
    let mut next_frame = Instant::now();

    loop {
        // Render.
        view.apply(&mut game, surface.viewport());
        game.render(surface)?;
        next_frame += frame;

        // Input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }

            let ev = event::read()?;
            match ev {
                Event::Resize(w, h) => {
                    surface.resize(Viewport::new(w, h));
                    view.apply(&mut game, surface.viewport());
                    continue;
                }
                Event::Key(key) if key.kind == KeyEventKind::Press && is_force_exit(key) => {
                    info!("interrupted");
                    return Ok(());
                }
                _ => {}
            }

            let input = map_event(&ev);
            if should_exit(&game, input) {
                info!(score = game.score(), level = game.level(), "exiting");
                return Ok(());
            }
            if game.handle_input(input) {
                debug!(?input, "input applied");
            }
        }

        // Don't try to catch up after a stall (suspend, slow terminal).
        let now = Instant::now();
        if now > next_frame + frame {
            next_frame = now;
        }
    }
}
