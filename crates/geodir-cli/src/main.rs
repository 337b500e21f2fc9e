//! `geodir`: terminal front end for the profile directory.
//!
//! # Usage
//!
//! ```
//! geodir                                  # interactive TUI
//! geodir --config ~/.config/geodir.toml
//! geodir list --location seattle --tag Product
//! geodir map 3 --json
//! ```

mod app;
mod form;
mod report;
mod settings;
mod ui;

use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::{Parser, Subcommand};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use geodir_core::{ProfileId, ProfileStore, SearchFilters, seed};
use geodir_map::{MapTarget, renderer_for};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "geodir", version, about = "Browse and manage a profile directory on a map")]
struct Cli {
  /// Path to a TOML config file. Missing files are ignored.
  #[arg(short, long, value_name = "FILE", default_value = "geodir.toml", env = "GEODIR_CONFIG")]
  config: PathBuf,

  /// JSON seed file; overrides `seed_path` from the config.
  #[arg(long, value_name = "FILE")]
  seed: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the profiles matching the given filters.
  List {
    /// Case-insensitive substring of the name.
    #[arg(long)]
    name:     Option<String>,
    /// Case-insensitive substring of any address field.
    #[arg(long)]
    location: Option<String>,
    /// Exact tag; repeat to require several.
    #[arg(long = "tag")]
    tags:     Vec<String>,
    /// Emit JSON instead of text.
    #[arg(long)]
    json:     bool,
  },
  /// Print the map output for one profile, or for every profile.
  Map {
    /// Profile id; all profiles when omitted.
    id:   Option<String>,
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let cli = Cli::parse();
  let mut settings = Settings::load(&cli.config)?;
  if cli.seed.is_some() {
    settings.seed_path = cli.seed.clone();
  }

  init_tracing(&settings, cli.command.is_none())?;

  let mut store = match &settings.seed_path {
    Some(path) => ProfileStore::with_seed(seed::load_file(path)?)
      .with_context(|| format!("loading seed file {}", path.display()))?,
    None => ProfileStore::from_builtin_seed(),
  };

  match cli.command {
    None => run_tui(&mut store, &settings),
    Some(Command::List {
      name,
      location,
      tags,
      json,
    }) => {
      store.set_search_filters(SearchFilters {
        name,
        location,
        tags,
      });
      let profiles = store.filtered_profiles();
      if json {
        println!("{}", report::profiles_json(&profiles)?);
      } else {
        for line in report::profile_lines(&profiles) {
          println!("{line}");
        }
      }
      Ok(())
    }
    Some(Command::Map { id, json }) => {
      let target = match id {
        Some(id) => {
          let id = ProfileId::from(id);
          let profile = store
            .get(&id)
            .ok_or_else(|| geodir_core::Error::ProfileNotFound(id.clone()))?;
          MapTarget::Single(profile)
        }
        None => MapTarget::Many(store.profiles().iter().collect()),
      };
      let rendering = renderer_for(&settings.map).render(&target);
      if json {
        println!("{}", serde_json::to_string_pretty(&report::rendering_json(&rendering))?);
      } else {
        println!("{}", report::rendering_text(&rendering));
      }
      Ok(())
    }
  }
}

/// The TUI owns the terminal, so it logs to `log_file` or not at all.
/// Subcommands log to stderr.
fn init_tracing(settings: &Settings, interactive: bool) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  match (&settings.log_file, interactive) {
    (Some(path), _) => {
      let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    (None, true) => {}
    (None, false) => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
  }
  Ok(())
}

// ─── TUI ──────────────────────────────────────────────────────────────────────

fn run_tui(store: &mut ProfileStore, settings: &Settings) -> Result<()> {
  let mut app = App::new(store, renderer_for(&settings.map), settings.open_command.clone());

  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app);

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  info!(profiles = app.store.len(), "session ended");
  run_result
}

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<'_>,
) -> Result<()> {
  loop {
    app.reap_openers();
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(250)).context("polling terminal events")? {
      continue;
    }
    match event::read().context("reading terminal event")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Redrawn on the next iteration.
      Event::Resize(_, _) => {}
      _ => {}
    }
  }

  Ok(())
}
