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

//! Unicode symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent actions and navigation destinations. These are selected for
//! compatibility with most modern terminal emulators and fonts.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_MORE: &str = "\u{22EE}";
pub(crate) const ICON_NOTE: &str = "\u{266A}";
pub(crate) const ICON_BRAND: &str = "\u{25C9}";
pub(crate) const ICON_CURSOR: &str = "\u{258E}";

// Navigation destinations, one distinct glyph each.
pub(crate) const ICON_HOME: &str = "\u{2302}";
pub(crate) const ICON_SEARCH: &str = "\u{2315}";
pub(crate) const ICON_LIBRARY: &str = "\u{25A4}";

// Half-block used to draw two pixels per cell, upper pixel in the foreground.
pub(crate) const UPPER_HALF_BLOCK: &str = "\u{2580}";
pub(crate) const SHADE_LIGHT: &str = "\u{2591}";
