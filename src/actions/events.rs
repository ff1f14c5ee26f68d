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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (command worker, cover art fetches), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the view state and
//!    forwards user intents to the command worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, ops::ControlFlow};

use anyhow::{Context, Result, anyhow};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error};

use crate::{App, actions::commands::AppCommand, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    CoverArtReady,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a [`AppEvent::FatalError`] or if a frame cannot be
/// drawn, so the caller can restore the terminal and exit.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app)).context("Failed to draw frame")?;

    while let Ok(event) = app.event_rx.recv() {
        if process_event(app, event)?.is_break() {
            break;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app)).context("Failed to draw frame")?;
    }

    Ok(())
}

/// Applies a single event to the application state.
fn process_event(app: &mut App, event: AppEvent) -> Result<ControlFlow<()>> {
    match event {
        AppEvent::ExitApplication => return Ok(ControlFlow::Break(())),
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::CoverArtReady => debug!("cover art resolved"),
        AppEvent::Tick => {}
        AppEvent::Error(message) => error!(%message, "command failed"),
        AppEvent::FatalError(message) => return Err(anyhow!(message)),
    }

    Ok(ControlFlow::Continue(()))
}

/// Maps keyboard input to application actions.
///
/// Quitting is handled here, everything else is offered to the playlist view,
/// which emits its commands straight to the command worker.
///
/// # Errors
///
/// Returns an error if a command fails to send to the background worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.command_tx.send(AppCommand::ExitApplication)?;
        }
        _ => {
            let event = Event::Key(key);
            if !app.playlist_view.process_event(&event, &app.playlist, &app.command_tx) {
                debug!(?key, "unhandled key");
            }
        }
    }

    Ok(())
}
