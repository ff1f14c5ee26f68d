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

//! UI rendering logic for the navigation bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use crate::{components::NavBar, theme::Theme};

impl NavBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // The bar floats over the list, drop whatever was drawn beneath it.
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.nav_bar_bg)),
            area,
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (entry, column) in self.entries().iter().zip(columns.iter()) {
            let style = if entry.selected {
                Style::default()
                    .fg(theme.text_colour)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_colour)
            };

            let lines = vec![
                Line::from(""),
                Line::from(entry.destination.icon()),
                Line::from(entry.destination.label()),
            ];

            f.render_widget(
                Paragraph::new(lines).style(style).alignment(Alignment::Center),
                *column,
            );
        }
    }
}
