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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change. The playlist is composed afresh each frame,
//! so the screen is always a function of the immutable playlist plus the view
//! state (cursor and scroll).

pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    components::{NAV_BAR_HEIGHT, PlaylistScreen, PlaylistView, compose},
    images::ImageLoader,
    theme::Theme,
};

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the
///   playlist view to record the viewport size and clamp its scroll offset.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let screen = compose(&app.playlist);
    draw_screen(f, &screen, &mut app.playlist_view, &app.cover_art, &app.theme);
}

/// Draws the scrolling playlist body with the navigation bar overlaid on its
/// last lines.
pub(crate) fn draw_screen(
    f: &mut Frame,
    screen: &PlaylistScreen,
    view: &mut PlaylistView,
    images: &dyn ImageLoader,
    theme: &Theme,
) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour)),
        area,
    );

    view.draw(f, area, screen, images, theme);

    let nav_height = NAV_BAR_HEIGHT.min(area.height);
    let nav_area = Rect {
        y: area.bottom() - nav_height,
        height: nav_height,
        ..area
    };
    screen.nav.draw(f, nav_area, theme);
}

#[cfg(test)]
mod tests {
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::Buffer,
        style::{Color, Modifier},
    };

    use super::*;
    use crate::{
        components::playlist::compose::{ACTION_ROW_HEIGHT, HEADER_HEIGHT, NEW_RELEASE_BADGE},
        images::{ImageState, testing::FixedImageLoader},
        model::{Playlist, Track, catalog, tests::playlist},
        render::icons::{ICON_HOME, ICON_LIBRARY, ICON_PLAY, ICON_SEARCH},
    };

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 40;
    const TITLE_X: u16 = 8;
    const FIRST_ROW_Y: u16 = HEADER_HEIGHT + ACTION_ROW_HEIGHT;

    fn render(playlist: &Playlist, height: u16) -> Buffer {
        let theme = Theme::default();
        let images = FixedImageLoader(ImageState::Pending);
        let mut view = PlaylistView::new();
        let screen = compose(playlist);

        let mut terminal = Terminal::new(TestBackend::new(WIDTH, height)).unwrap();
        terminal
            .draw(|f| draw_screen(f, &screen, &mut view, &images, &theme))
            .unwrap();

        terminal.backend().buffer().clone()
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn contains(buf: &Buffer, text: &str) -> bool {
        (0..buf.area.height).any(|y| line(buf, y).contains(text))
    }

    #[test]
    fn playing_row_is_highlighted_and_bold() {
        let playlist = catalog::builtin().unwrap();
        let buf = render(&playlist, HEIGHT);
        let theme = Theme::default();

        for (i, track) in playlist.tracks().iter().enumerate() {
            let y = FIRST_ROW_Y + 2 * i as u16;
            let title_cell = &buf[(TITLE_X, y)];

            assert!(line(&buf, y).contains(track.title.as_str()), "row {i} shows its title");
            assert_eq!(
                title_cell.bg == theme.now_playing_bg,
                track.is_now_playing,
                "row {i} background"
            );
            assert_eq!(
                title_cell.modifier.contains(Modifier::BOLD),
                track.is_now_playing,
                "row {i} boldness"
            );
        }

        // The whole third row carries the highlight, not just its text.
        let third = FIRST_ROW_Y + 4;
        assert_eq!(buf[(WIDTH - 1, third)].bg, theme.now_playing_bg);
        assert_eq!(buf[(WIDTH - 1, third + 1)].bg, theme.now_playing_bg);
        assert_eq!(buf[(WIDTH - 1, FIRST_ROW_Y)].bg, theme.background_colour);
    }

    #[test]
    fn badge_and_highlight_render_together() {
        let playlist = playlist(vec![
            Track::new("Plain", "Band", "a.png"),
            Track::new("Fresh Hit", "Band", "a.png").new_release().now_playing(),
        ]);
        let buf = render(&playlist, HEIGHT);
        let theme = Theme::default();

        let badge_y = FIRST_ROW_Y + 2;
        assert!(line(&buf, badge_y).contains(NEW_RELEASE_BADGE));
        assert!(line(&buf, badge_y + 1).contains("Fresh Hit"));
        assert!(buf[(TITLE_X, badge_y + 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(TITLE_X, badge_y)].bg, theme.now_playing_bg);
        assert!(!line(&buf, FIRST_ROW_Y).contains(NEW_RELEASE_BADGE));
    }

    #[test]
    fn rows_follow_input_order() {
        let playlist = playlist(vec![
            Track::new("Zulu", "Band", "a.png"),
            Track::new("Alpha", "Band", "a.png"),
            Track::new("Mike", "Band", "a.png"),
        ]);
        let buf = render(&playlist, HEIGHT);

        assert!(line(&buf, FIRST_ROW_Y).contains("Zulu"));
        assert!(line(&buf, FIRST_ROW_Y + 2).contains("Alpha"));
        assert!(line(&buf, FIRST_ROW_Y + 4).contains("Mike"));
        assert!(line(&buf, FIRST_ROW_Y + 1).contains("Band"));
    }

    #[test]
    fn last_row_of_a_very_long_playlist_is_reachable() {
        use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

        use crate::{components::testing::RecordingSink, render::icons::ICON_CURSOR};

        let playlist = playlist(
            (0..40_000)
                .map(|n| Track::new(&format!("Song {n}"), "Band", "a.png"))
                .collect(),
        );
        let theme = Theme::default();
        let images = FixedImageLoader(ImageState::Pending);
        let sink = RecordingSink::default();
        let mut view = PlaylistView::new();
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, 30)).unwrap();

        let screen = compose(&playlist);
        terminal
            .draw(|f| draw_screen(f, &screen, &mut view, &images, &theme))
            .unwrap();

        let end = Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE));
        assert!(view.process_event(&end, &playlist, &sink));
        terminal
            .draw(|f| draw_screen(f, &screen, &mut view, &images, &theme))
            .unwrap();

        let buf = terminal.backend().buffer();
        let y = (0..buf.area.height)
            .find(|&y| line(buf, y).contains("Song 39999"))
            .expect("last track is on screen");
        assert!(line(buf, y).contains(ICON_CURSOR));
        assert!(y < 30 - NAV_BAR_HEIGHT);
    }

    #[test]
    fn empty_playlist_keeps_header_actions_and_navigation() {
        let playlist = playlist(vec![]);
        let buf = render(&playlist, HEIGHT);

        assert!(contains(&buf, "Test Mix"));
        assert!(contains(&buf, "Tester \u{2022} 1,234 saves \u{2022} 10m"));
        assert!(contains(&buf, ICON_PLAY));
        for label in ["Home", "Search", "Your Library"] {
            assert!(line(&buf, HEIGHT - 1).contains(label), "{label} is shown");
        }
        assert!(line(&buf, FIRST_ROW_Y).trim().is_empty());
    }

    #[test]
    fn navigation_bar_marks_home_selected() {
        let playlist = catalog::builtin().unwrap();
        let buf = render(&playlist, HEIGHT);
        let theme = Theme::default();

        let icons = line(&buf, HEIGHT - 2);
        for icon in [ICON_HOME, ICON_SEARCH, ICON_LIBRARY] {
            assert!(icons.contains(icon));
        }

        let labels = line(&buf, HEIGHT - 1);
        let home_x = labels.find("Home").unwrap() as u16;
        let search_x = labels.chars().take(labels.find("Search").unwrap()).count() as u16;
        assert!(buf[(home_x, HEIGHT - 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(home_x, HEIGHT - 1)].fg, theme.text_colour);
        assert!(!buf[(search_x, HEIGHT - 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(search_x, HEIGHT - 1)].fg, theme.muted_colour);
    }

    #[test]
    fn navigation_bar_overlays_the_list() {
        let tracks = (0..30)
            .map(|n| Track::new(&format!("Song {n}"), "Band", "a.png"))
            .collect();
        let playlist = playlist(tracks);
        let buf = render(&playlist, 24);

        assert!(line(&buf, 19).contains("Song 2"));
        assert!(line(&buf, 20).contains("Band"));
        // Song 3 starts at line 21, under the bar.
        assert!(!line(&buf, 21).contains("Song 3"));
        assert!(line(&buf, 22).contains(ICON_HOME));
        assert!(line(&buf, 23).contains("Your Library"));
    }

    #[test]
    fn header_text_sits_on_the_cover() {
        let playlist = catalog::builtin().unwrap();
        let buf = render(&playlist, HEIGHT);

        let title_y = HEADER_HEIGHT - 4;
        assert!(line(&buf, title_y).contains("Bebe Rexha - Better Mistakes"));
        assert!(buf[(2, title_y)].modifier.contains(Modifier::BOLD));
        assert!(line(&buf, title_y + 2).contains("800,000 saves"));
        // Pending cover art fills the rest of the header.
        assert_eq!(buf[(0, 0)].symbol(), crate::render::icons::SHADE_LIGHT);
        assert_ne!(buf[(0, 0)].bg, Color::Reset);
    }
}
