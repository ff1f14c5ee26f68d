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

//! UI rendering logic for the playlist view.
//!
//! The scrollable content is a stack of sections. Each section that overlaps
//! the viewport is drawn into its own off-screen buffer and the visible lines
//! are copied into the frame, so partially scrolled sections clip cleanly.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::{
    components::{
        CoverArt, PlaylistView,
        playlist::{
            PlaylistScreen,
            compose::{HeaderBlock, Section, TrackRow},
        },
    },
    images::ImageLoader,
    render::icons::{ICON_BRAND, ICON_CURSOR, ICON_MORE, ICON_PLAY},
    theme::Theme,
};

const THUMBNAIL_WIDTH: u16 = 4;
const THUMBNAIL_HEIGHT: u16 = 2;
const PLAY_BUTTON_WIDTH: u16 = 7;

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        screen: &PlaylistScreen,
        images: &dyn ImageLoader,
        theme: &Theme,
    ) {
        self.viewport_height = area.height;
        self.clamp_scroll(screen.content_height());

        let view_top = self.scroll;
        let view_bottom = view_top + usize::from(area.height);

        for placed in screen.sections() {
            if placed.height == 0 || placed.bottom() <= view_top || placed.top >= view_bottom {
                continue;
            }

            let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, placed.height));
            let scratch_area = scratch.area;
            scratch.set_style(scratch_area, Style::default().bg(theme.background_colour));

            match placed.section {
                Section::Header => draw_header(&mut scratch, scratch_area, &screen.header, images, theme),
                Section::Actions => draw_actions(&mut scratch, scratch_area, theme),
                Section::Track(i) => {
                    let selected = self.cursor == Some(i);
                    draw_track_row(&mut scratch, scratch_area, &screen.rows[i], selected, images, theme);
                }
                Section::Spacer => {}
            }

            blit(&scratch, placed.top, view_top, f.buffer_mut(), area);
        }
    }
}

/// Copies the lines of `src`, which starts at content line `src_top`, that
/// fall inside the viewport starting at content line `view_top`.
fn blit(src: &Buffer, src_top: usize, view_top: usize, dst: &mut Buffer, area: Rect) {
    let width = src.area.width.min(area.width);

    for y in 0..src.area.height {
        let content_y = src_top + usize::from(y);
        if content_y < view_top {
            continue;
        }

        let Some(screen_y) = u16::try_from(content_y - view_top)
            .ok()
            .filter(|&screen_y| screen_y < area.height)
        else {
            break;
        };

        for x in 0..width {
            if let (Some(cell), Some(target)) = (
                src.cell((x, y)),
                dst.cell_mut((area.x + x, area.y + screen_y)),
            ) {
                *target = cell.clone();
            }
        }
    }
}

fn draw_header(
    buf: &mut Buffer,
    area: Rect,
    header: &HeaderBlock,
    images: &dyn ImageLoader,
    theme: &Theme,
) {
    CoverArt::new(images.load(header.cover_art).state(), theme).render(area, buf);

    let lines = vec![
        Line::from(Span::styled(
            header.title,
            Style::default()
                .fg(theme.text_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            header.description,
            Style::default().fg(theme.subtitle_colour),
        )),
        Line::from(vec![
            Span::styled(ICON_BRAND, Style::default().fg(theme.accent_colour)),
            Span::raw(" "),
            Span::styled(
                header.attribution.as_str(),
                Style::default().fg(theme.muted_colour),
            ),
        ]),
    ];

    // Anchor the text block to the bottom of the cover.
    let text_area = area.inner(Margin::new(2, 1));
    let height = (lines.len() as u16).min(text_area.height);
    let text_area = Rect {
        y: text_area.bottom().saturating_sub(height),
        height,
        ..text_area
    };

    Paragraph::new(lines).render(text_area, buf);
}

fn draw_actions(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(PLAY_BUTTON_WIDTH),
            Constraint::Length(2),
        ])
        .split(area);

    let more_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..chunks[1]
    };
    Paragraph::new(ICON_MORE)
        .style(Style::default().fg(theme.muted_colour))
        .render(more_area, buf);

    let button = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_colour));
    let inner = button.inner(chunks[3]);
    button.render(chunks[3], buf);

    Paragraph::new(ICON_PLAY)
        .style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn draw_track_row(
    buf: &mut Buffer,
    area: Rect,
    row: &TrackRow,
    selected: bool,
    images: &dyn ImageLoader,
    theme: &Theme,
) {
    if row.emphasis.is_highlighted() {
        buf.set_style(area, Style::default().bg(theme.now_playing_bg));
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(THUMBNAIL_WIDTH),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    if selected {
        let marker: Vec<Line> = (0..area.height).map(|_| Line::from(ICON_CURSOR)).collect();
        Paragraph::new(marker)
            .style(Style::default().fg(theme.accent_colour))
            .render(chunks[0], buf);
    }

    let thumbnail_area = Rect {
        y: area.y + area.height.saturating_sub(THUMBNAIL_HEIGHT) / 2,
        height: THUMBNAIL_HEIGHT.min(area.height),
        ..chunks[1]
    };
    CoverArt::new(images.load(row.cover_art).state(), theme).render(thumbnail_area, buf);

    let mut title_style = Style::default().fg(theme.text_colour);
    if row.emphasis.is_bold() {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let mut lines = Vec::with_capacity(3);
    if let Some(badge) = row.badge {
        lines.push(Line::from(Span::styled(
            badge,
            Style::default().fg(theme.accent_colour),
        )));
    }
    lines.push(Line::from(Span::styled(row.title, title_style)));
    lines.push(Line::from(Span::styled(
        row.artist,
        Style::default().fg(theme.muted_colour),
    )));
    Paragraph::new(lines).render(chunks[3], buf);

    let more_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..chunks[4]
    };
    Paragraph::new(ICON_MORE)
        .style(Style::default().fg(theme.muted_colour))
        .alignment(Alignment::Right)
        .render(more_area, buf);
}
