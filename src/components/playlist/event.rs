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

//! Input handling for the playlist view.
//!
//! This module maps raw terminal keyboard events to cursor movement and
//! scrolling, and turns activations of the screen's affordances into
//! [`ViewCommand`]s delivered to a [`CommandSink`].

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::{CommandSink, Destination, PlaylistView, ViewCommand, playlist::compose},
    model::Playlist,
};

impl PlaylistView {
    /// Handles `event`, returning whether it was consumed.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        playlist: &Playlist,
        sink: &dyn CommandSink,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        let screen = compose(playlist);

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                let lines = self.half_page();
                self.scroll_down(lines, &screen);
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let lines = self.half_page();
                self.scroll_up(lines, &screen);
            }

            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(&screen),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(&screen),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(&screen),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(&screen),

            (KeyCode::Char('p'), _) => sink.dispatch(screen.actions.play.clone()),
            (KeyCode::Char('o'), _) => sink.dispatch(screen.actions.options.clone()),

            (KeyCode::Enter, _) | (KeyCode::Char('m'), _) => {
                if let Some(row) = self.cursor.and_then(|i| screen.rows.get(i)) {
                    sink.dispatch(row.options());
                }
            }

            (KeyCode::Char(c @ '1'..='3'), _) => {
                if let Some(destination) = Destination::from_shortcut(c) {
                    sink.dispatch(ViewCommand::Navigate(destination));
                }
            }

            _ => return false,
        }

        true
    }
}
