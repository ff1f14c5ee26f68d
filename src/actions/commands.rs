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

//! Application command processing.
//!
//! This module implements the command pattern used to take work off the UI
//! thread. Components emit [`ViewCommand`]s through a [`CommandSink`]; the
//! sink implemented here forwards them to a dedicated worker loop. No
//! playback, routing or options service exists yet, so the worker records
//! each request in the log and otherwise leaves the screen unchanged.

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    actions::events::AppEvent,
    components::{CommandSink, ViewCommand},
    model::Playlist,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    View(ViewCommand),
    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// # Arguments
///
/// * `playlist` - The playlist on screen, used to describe requests.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    playlist: Arc<Playlist>,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            if let Err(e) = handle_command(&playlist, command, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
fn handle_command(playlist: &Playlist, command: AppCommand, event_tx: &Sender<AppEvent>) -> Result<()> {
    match command {
        AppCommand::View(ViewCommand::PlayPlaylist(id)) => {
            info!(playlist = %id, "play requested, no playback service connected");
        }
        AppCommand::View(ViewCommand::ShowPlaylistOptions(id)) => {
            info!(playlist = %id, "playlist options requested, no options menu connected");
        }
        AppCommand::View(ViewCommand::ShowTrackOptions(track_id)) => {
            let title = playlist
                .track(track_id)
                .map(|t| t.title.as_str())
                .unwrap_or_default();
            info!(track = %track_id, title, "track options requested, no options menu connected");
        }
        AppCommand::View(ViewCommand::Navigate(destination)) => {
            info!(destination = destination.label(), "navigation requested, no router connected");
        }
        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

impl CommandSink for Sender<AppCommand> {
    fn dispatch(&self, command: ViewCommand) {
        if self.send(AppCommand::View(command)).is_err() {
            warn!("command worker has stopped, dropping command");
        }
    }
}
