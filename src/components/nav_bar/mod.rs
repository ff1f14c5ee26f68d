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

//! Bottom navigation bar.
//!
//! The bar always shows the same three destinations with Home selected.
//! Activating an entry emits a [`ViewCommand::Navigate`]; no router is wired
//! to it, so the selection never moves.
//!
//! [`ViewCommand::Navigate`]: crate::components::ViewCommand::Navigate

mod render;

use crate::render::icons::{ICON_HOME, ICON_LIBRARY, ICON_SEARCH};

pub(crate) const NAV_BAR_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Destination {
    Home,
    Search,
    Library,
}

impl Destination {
    pub(crate) const ALL: [Destination; 3] =
        [Destination::Home, Destination::Search, Destination::Library];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Search => "Search",
            Destination::Library => "Your Library",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Destination::Home => ICON_HOME,
            Destination::Search => ICON_SEARCH,
            Destination::Library => ICON_LIBRARY,
        }
    }

    /// Maps the `1`..`3` number keys to destinations.
    pub(crate) fn from_shortcut(key: char) -> Option<Self> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavEntry {
    pub(crate) destination: Destination,
    pub(crate) selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavBar {
    entries: [NavEntry; 3],
}

impl NavBar {
    pub(crate) fn new() -> Self {
        Self {
            entries: Destination::ALL.map(|destination| NavEntry {
                destination,
                selected: destination == Destination::Home,
            }),
        }
    }

    pub(crate) fn entries(&self) -> &[NavEntry; 3] {
        &self.entries
    }
}
