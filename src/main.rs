// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Viewer TUI.
//!
//! A terminal rendition of a music app's playlist screen: a cover art header,
//! an action row, the track list and a bottom navigation bar.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** service the commands raised by the screen and
//!   fetch cover art.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod components;
mod config;
mod images;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};
use tracing::{info, warn};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    components::PlaylistView,
    config::{AppConfig, Args},
    images::CoverArtLoader,
    model::{Playlist, catalog},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub playlist: Arc<Playlist>,
    pub playlist_view: PlaylistView,

    pub cover_art: CoverArtLoader,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, playlist: Playlist, command_tx: Sender<AppCommand>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let cover_art = CoverArtLoader::new(config.image_timeout(), event_tx.clone())
            .context("Failed to create cover art loader")?;

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            playlist: Arc::new(playlist),
            playlist_view: PlaylistView::new(),
            cover_art,
        })
    }
}

/// The entry point of the application.
///
/// Reads the configuration, installs logging, loads the playlist, manages
/// the terminal lifecycle, and returns an error if any part of the execution
/// fails.
fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let config = config.merge(args);

    let _log_guard = util::logging::init_logging(&config.resolved_log_dir(), &config.log_filter)?;
    if let Some(e) = config_error {
        warn!(error = %e, "failed to load configuration, using defaults");
    }

    let playlist = match &config.catalog {
        Some(path) => catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => catalog::builtin().context("Failed to load built-in catalog")?,
    };
    info!(
        playlist = %playlist.id(),
        tracks = playlist.tracks().len(),
        now_playing = ?playlist.now_playing(),
        "playlist loaded"
    );

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, playlist, command_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process the [`AppCommand`]s raised by the screen.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(app.playlist.clone(), command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Failed to read terminal input: {e}")));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    let tick_rate = app.config.tick_rate();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
