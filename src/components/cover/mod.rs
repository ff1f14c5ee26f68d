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

//! Cover art widget.
//!
//! Draws a cover image at whatever state its load has reached. Ready images
//! use upper half blocks so each cell carries two vertically stacked pixels,
//! scaled to cover the area and cropped. Pending and failed images draw a
//! placeholder and leave the existing background untouched.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::{
    images::{ImageState, Thumbnail},
    render::icons::{ICON_NOTE, SHADE_LIGHT, UPPER_HALF_BLOCK},
    theme::Theme,
};

pub(crate) struct CoverArt<'a> {
    state: ImageState,
    theme: &'a Theme,
}

impl<'a> CoverArt<'a> {
    pub(crate) fn new(state: ImageState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CoverArt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        match &self.state {
            ImageState::Ready(thumbnail) => render_pixels(thumbnail, area, buf),
            ImageState::Pending => {
                fill(area, buf, SHADE_LIGHT, Style::default().fg(self.theme.placeholder_fg));
            }
            ImageState::Failed => {
                fill(area, buf, " ", Style::default());
                let centre = (area.x + area.width / 2, area.y + area.height / 2);
                if let Some(cell) = buf.cell_mut(centre) {
                    cell.set_symbol(ICON_NOTE).set_fg(self.theme.muted_colour);
                }
            }
        }
    }
}

fn render_pixels(thumbnail: &Thumbnail, area: Rect, buf: &mut Buffer) {
    let width = u32::from(area.width);
    let height = u32::from(area.height) * 2;

    for row in 0..area.height {
        for col in 0..area.width {
            let x = u32::from(col);
            let y = u32::from(row) * 2;
            let top = thumbnail.sample(x, y, width, height);
            let bottom = thumbnail.sample(x, y + 1, width, height);

            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(UPPER_HALF_BLOCK)
                    .set_fg(to_colour(top))
                    .set_bg(to_colour(bottom));
            }
        }
    }
}

fn fill(area: Rect, buf: &mut Buffer, symbol: &str, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

fn to_colour([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
