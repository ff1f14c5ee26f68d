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

//! Playlist screen view state.
//!
//! The playlist itself is immutable; this module only tracks what the user
//! has done to the view: which track row the cursor is on and how far the
//! content is scrolled. Composition lives in [`compose`], input handling in
//! `event` and drawing in `render`.

pub(crate) mod compose;
mod event;
mod render;

pub(crate) use compose::{PlaylistScreen, compose};

use crate::components::NAV_BAR_HEIGHT;

#[derive(Debug, Default)]
pub(crate) struct PlaylistView {
    cursor: Option<usize>,
    scroll: usize,
    viewport_height: u16,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[cfg(test)]
    pub(crate) fn scroll(&self) -> usize {
        self.scroll
    }

    /// Lines of content visible above the navigation bar.
    fn visible_height(&self) -> usize {
        usize::from(self.viewport_height.saturating_sub(NAV_BAR_HEIGHT).max(1))
    }

    fn goto_next(&mut self, screen: &PlaylistScreen) {
        let len = screen.rows.len();
        if len == 0 { return; }
        let i = match self.cursor {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.select(i, screen);
    }

    fn goto_previous(&mut self, screen: &PlaylistScreen) {
        let len = screen.rows.len();
        if len == 0 { return; }
        let i = match self.cursor {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.select(i, screen);
    }

    fn goto_first(&mut self, screen: &PlaylistScreen) {
        if !screen.rows.is_empty() {
            self.select(0, screen);
        }
        self.scroll = 0;
    }

    fn goto_last(&mut self, screen: &PlaylistScreen) {
        if let Some(last) = screen.rows.len().checked_sub(1) {
            self.select(last, screen);
        }
    }

    fn half_page(&self) -> usize {
        (self.visible_height() / 2).max(1)
    }

    fn scroll_down(&mut self, lines: usize, screen: &PlaylistScreen) {
        self.scroll = self.scroll.saturating_add(lines);
        self.clamp_scroll(screen.content_height());
    }

    fn scroll_up(&mut self, lines: usize, screen: &PlaylistScreen) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.clamp_scroll(screen.content_height());
    }

    fn select(&mut self, index: usize, screen: &PlaylistScreen) {
        self.cursor = Some(index);
        if let Some(row) = screen.rows.get(index) {
            self.scroll_into_view(row.top, row.height());
        }
        self.clamp_scroll(screen.content_height());
    }

    fn scroll_into_view(&mut self, top: usize, height: u16) {
        let visible = self.visible_height();
        let bottom = top + usize::from(height);

        if top < self.scroll {
            self.scroll = top;
        } else if bottom > self.scroll + visible {
            self.scroll = bottom - visible;
        }
    }

    fn clamp_scroll(&mut self, content_height: usize) {
        let max = content_height.saturating_sub(usize::from(self.viewport_height));
        self.scroll = self.scroll.min(max);
    }
}
