mod app;
mod catalog;
mod config;
mod constants;
mod input;
mod matcher;
mod nav;
mod overlay;
mod sidebar;
mod suggest;
mod text;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use ratatui::{
  DefaultTerminal,
  crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
  },
};
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use constants::constants;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Theme name ('sketchbook', 'dusk', or 'paper'); overrides the saved preference
  #[arg(short, long)]
  theme: Option<String>,
}

// --- Logging ---

/// Set up file logging in the platform data dir. A TUI owns the terminal, so
/// logs never go to stdout. Returns the appender guard, which must stay alive
/// for the lifetime of the process.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
  let proj_dirs = ProjectDirs::from("", "", "vidsurf")?;
  let log_dir = proj_dirs.data_dir().join("logs");
  std::fs::create_dir_all(&log_dir).ok()?;

  let appender = tracing_appender::rolling::daily(log_dir, "vidsurf.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
  Some(guard)
}

// --- Main ---

fn main() -> Result<()> {
  let args = Args::parse();
  let _log_guard = init_tracing();
  info!(version = env!("CARGO_PKG_VERSION"), "starting");

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  execute!(std::io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
  let result = run(&mut terminal, args);
  let _ = execute!(std::io::stdout(), DisableMouseCapture);
  ratatui::restore();
  result
}

fn run(terminal: &mut DefaultTerminal, args: Args) -> Result<()> {
  let mut app = App::new(args.theme.as_deref());
  let tick = Duration::from_millis(constants().tick_ms);

  loop {
    terminal.draw(|frame| ui::ui(frame, &mut app))?;

    if event::poll(tick)? {
      match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(&mut app, key);
        }
        Event::Mouse(mouse) => {
          input::handle_mouse_event(&mut app, mouse);
        }
        _ => {}
      }
    }

    // Drive the suggestion debounce off the loop's own cadence.
    app.tick(Instant::now());

    if app.should_quit {
      break;
    }
  }

  app.save_config();
  info!("exiting");
  Ok(())
}
