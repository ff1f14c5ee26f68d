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

//! Screen components.
//!
//! Each component owns its view state and knows how to draw itself and how
//! to react to input. Components never perform actions themselves; user
//! intents are emitted as [`ViewCommand`]s to an injected [`CommandSink`].

mod cover;
mod nav_bar;
pub(crate) mod playlist;

use crate::model::{PlaylistId, TrackId};

pub(crate) use cover::CoverArt;
pub(crate) use nav_bar::{Destination, NAV_BAR_HEIGHT, NavBar};
pub(crate) use playlist::{PlaylistScreen, PlaylistView, compose};

/// A user intent raised by one of the screen's affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewCommand {
    PlayPlaylist(PlaylistId),
    ShowPlaylistOptions(PlaylistId),
    ShowTrackOptions(TrackId),
    Navigate(Destination),
}

/// Receiver for the commands emitted by components.
pub(crate) trait CommandSink {
    fn dispatch(&self, command: ViewCommand);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        commands: RefCell<Vec<ViewCommand>>,
    }

    impl RecordingSink {
        pub(crate) fn commands(&self) -> Vec<ViewCommand> {
            self.commands.borrow().clone()
        }
    }

    impl CommandSink for RecordingSink {
        fn dispatch(&self, command: ViewCommand) {
            self.commands.borrow_mut().push(command);
        }
    }
}
