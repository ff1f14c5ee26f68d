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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) subtitle_colour: Color,
    pub(crate) muted_colour: Color,

    pub(crate) now_playing_bg: Color,
    pub(crate) placeholder_fg: Color,
    pub(crate) nav_bar_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(0, 0, 0),
            accent_colour: Color::Rgb(29, 185, 84),
            text_colour: Color::Rgb(255, 255, 255),
            subtitle_colour: Color::Rgb(204, 204, 204),
            muted_colour: Color::Rgb(179, 179, 179),

            now_playing_bg: Color::Rgb(139, 0, 0),
            placeholder_fg: Color::Rgb(60, 60, 60),
            nav_bar_bg: Color::Rgb(0, 0, 0),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours yield `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_convert_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(29, 185, 84)), Some("#1db954".to_string()));
        assert_eq!(Theme::to_hex(Theme::default().background_colour), Some("#000000".to_string()));
    }

    #[test]
    fn named_colours_have_no_hex_form() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
