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

//! Pure composition of the playlist screen.
//!
//! [`compose`] turns a [`Playlist`] into a [`PlaylistScreen`]: the header
//! text, the action row commands, one [`TrackRow`] per track in input order,
//! the trailing spacer and the navigation bar. Nothing here draws or has side
//! effects, so every visual rule can be checked without a terminal.

use crate::{
    components::{NAV_BAR_HEIGHT, NavBar, ViewCommand},
    model::{Playlist, TrackId},
    util::format::{format_count, format_duration},
};

pub(crate) const HEADER_HEIGHT: u16 = 12;
pub(crate) const ACTION_ROW_HEIGHT: u16 = 3;
pub(crate) const NEW_RELEASE_BADGE: &str = "New release";

/// Content line of the first track row.
const CONTENT_TOP: usize = (HEADER_HEIGHT + ACTION_ROW_HEIGHT) as usize;

/// Row styling driven by the track's now-playing flag.
///
/// The highlighted background and the bold title are both derived from this
/// one value, so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowEmphasis {
    Normal,
    NowPlaying,
}

impl RowEmphasis {
    pub(crate) fn is_highlighted(self) -> bool {
        self == RowEmphasis::NowPlaying
    }

    pub(crate) fn is_bold(self) -> bool {
        self == RowEmphasis::NowPlaying
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderBlock<'a> {
    pub(crate) cover_art: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) attribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActionRow {
    pub(crate) play: ViewCommand,
    pub(crate) options: ViewCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackRow<'a> {
    pub(crate) id: TrackId,
    pub(crate) title: &'a str,
    pub(crate) artist: &'a str,
    pub(crate) cover_art: &'a str,
    pub(crate) badge: Option<&'static str>,
    pub(crate) emphasis: RowEmphasis,
    /// First line of the row, relative to the top of the scrollable content.
    pub(crate) top: usize,
}

impl TrackRow<'_> {
    pub(crate) fn height(&self) -> u16 {
        if self.badge.is_some() { 3 } else { 2 }
    }

    pub(crate) fn options(&self) -> ViewCommand {
        ViewCommand::ShowTrackOptions(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Header,
    Actions,
    Track(usize),
    Spacer,
}

/// A section of the scrollable content and the lines it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placed {
    pub(crate) section: Section,
    pub(crate) top: usize,
    pub(crate) height: u16,
}

impl Placed {
    pub(crate) fn bottom(&self) -> usize {
        self.top + usize::from(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaylistScreen<'a> {
    pub(crate) header: HeaderBlock<'a>,
    pub(crate) actions: ActionRow,
    pub(crate) rows: Vec<TrackRow<'a>>,
    pub(crate) spacer_height: u16,
    pub(crate) nav: NavBar,
}

impl PlaylistScreen<'_> {
    /// Sections in top to bottom order.
    pub(crate) fn sections(&self) -> Vec<Placed> {
        let mut sections = Vec::with_capacity(self.rows.len() + 3);
        sections.push(Placed {
            section: Section::Header,
            top: 0,
            height: HEADER_HEIGHT,
        });
        sections.push(Placed {
            section: Section::Actions,
            top: usize::from(HEADER_HEIGHT),
            height: ACTION_ROW_HEIGHT,
        });

        sections.extend(self.rows.iter().enumerate().map(|(i, row)| Placed {
            section: Section::Track(i),
            top: row.top,
            height: row.height(),
        }));

        sections.push(Placed {
            section: Section::Spacer,
            top: self.rows_bottom(),
            height: self.spacer_height,
        });

        sections
    }

    pub(crate) fn content_height(&self) -> usize {
        self.rows_bottom() + usize::from(self.spacer_height)
    }

    fn rows_bottom(&self) -> usize {
        self.rows
            .last()
            .map(|row| row.top + usize::from(row.height()))
            .unwrap_or(CONTENT_TOP)
    }
}

/// Builds the screen for `playlist`.
pub(crate) fn compose(playlist: &Playlist) -> PlaylistScreen<'_> {
    let header = playlist.header();
    let id = playlist.id();

    let attribution = format!(
        "{} \u{2022} {} saves \u{2022} {}",
        header.owner,
        format_count(header.save_count),
        format_duration(header.duration_secs)
    );

    let mut top = CONTENT_TOP;
    let rows = playlist
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let row = TrackRow {
                id: TrackId(i),
                title: &track.title,
                artist: &track.artist,
                cover_art: &track.cover_art,
                badge: track.is_new_release.then_some(NEW_RELEASE_BADGE),
                emphasis: if track.is_now_playing {
                    RowEmphasis::NowPlaying
                } else {
                    RowEmphasis::Normal
                },
                top,
            };
            top += usize::from(row.height());
            row
        })
        .collect();

    PlaylistScreen {
        header: HeaderBlock {
            cover_art: &header.cover_art,
            title: &header.title,
            description: &header.description,
            attribution,
        },
        actions: ActionRow {
            play: ViewCommand::PlayPlaylist(id.clone()),
            options: ViewCommand::ShowPlaylistOptions(id.clone()),
        },
        rows,
        spacer_height: NAV_BAR_HEIGHT,
        nav: NavBar::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::Destination,
        model::{Track, catalog, tests::playlist},
    };

    fn seven_tracks_third_playing() -> Playlist {
        playlist(
            (1..=7)
                .map(|n| {
                    let track = Track::new(&format!("Song {n}"), "Artist", "cover.png");
                    if n == 3 { track.now_playing() } else { track }
                })
                .collect(),
        )
    }

    #[test]
    fn rows_preserve_input_order() {
        let playlist = seven_tracks_third_playing();
        let screen = compose(&playlist);

        let titles: Vec<_> = screen.rows.iter().map(|r| r.title).collect();
        let expected: Vec<_> = playlist.tracks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, expected);

        for (i, row) in screen.rows.iter().enumerate() {
            assert_eq!(row.id, TrackId(i));
        }
    }

    #[test]
    fn only_the_playing_track_is_emphasised() {
        let playlist = seven_tracks_third_playing();
        let screen = compose(&playlist);

        let emphasised: Vec<_> = screen
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.emphasis.is_highlighted())
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(emphasised, vec![3]);

        for (row, track) in screen.rows.iter().zip(playlist.tracks()) {
            assert_eq!(row.emphasis.is_highlighted(), track.is_now_playing);
            assert_eq!(row.emphasis.is_bold(), track.is_now_playing);
            assert_eq!(row.artist, track.artist);
            assert_eq!(row.cover_art, track.cover_art);
        }
    }

    #[test]
    fn badge_follows_the_new_release_flag() {
        let playlist = playlist(vec![
            Track::new("Old", "A", "a.png"),
            Track::new("Fresh", "A", "a.png").new_release(),
        ]);
        let screen = compose(&playlist);

        assert_eq!(screen.rows[0].badge, None);
        assert_eq!(screen.rows[1].badge, Some(NEW_RELEASE_BADGE));
        assert_eq!(screen.rows[0].height(), 2);
        assert_eq!(screen.rows[1].height(), 3);
    }

    #[test]
    fn new_and_playing_track_keeps_both_treatments() {
        let playlist = playlist(vec![Track::new("Hit", "A", "a.png").new_release().now_playing()]);
        let row = &compose(&playlist).rows[0];

        assert_eq!(row.badge, Some(NEW_RELEASE_BADGE));
        assert!(row.emphasis.is_highlighted());
        assert!(row.emphasis.is_bold());
    }

    #[test]
    fn empty_playlist_still_has_header_actions_and_nav() {
        let playlist = playlist(vec![]);
        let screen = compose(&playlist);

        assert!(screen.rows.is_empty());
        assert_eq!(screen.header.title, "Test Mix");
        assert_eq!(screen.actions.play, ViewCommand::PlayPlaylist(playlist.id().clone()));
        assert_eq!(screen.nav.entries().len(), 3);
        assert!(screen.nav.entries()[0].selected);

        let sections: Vec<_> = screen.sections().iter().map(|p| p.section).collect();
        assert_eq!(sections, vec![Section::Header, Section::Actions, Section::Spacer]);
        assert_eq!(
            screen.content_height(),
            usize::from(HEADER_HEIGHT + ACTION_ROW_HEIGHT + NAV_BAR_HEIGHT)
        );
    }

    #[test]
    fn sections_are_contiguous() {
        let playlist = playlist(vec![
            Track::new("One", "A", "a.png"),
            Track::new("Two", "A", "a.png").new_release(),
            Track::new("Three", "A", "a.png"),
        ]);
        let screen = compose(&playlist);
        let sections = screen.sections();

        for pair in sections.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(sections.last().map(Placed::bottom), Some(screen.content_height()));
        assert_eq!(screen.spacer_height, NAV_BAR_HEIGHT);
    }

    #[test]
    fn rows_past_the_u16_range_keep_distinct_positions() {
        let count = 40_000;
        let playlist = playlist(
            (0..count)
                .map(|n| Track::new(&format!("Song {n}"), "Artist", "a.png"))
                .collect(),
        );
        let screen = compose(&playlist);

        let last = &screen.rows[count - 1];
        assert_eq!(last.top, CONTENT_TOP + 2 * (count - 1));
        assert!(last.top > usize::from(u16::MAX));
        assert!(screen.rows.windows(2).all(|pair| pair[0].top < pair[1].top));
        assert_eq!(screen.content_height(), last.top + 2 + usize::from(NAV_BAR_HEIGHT));
    }

    #[test]
    fn header_attribution_line() {
        let playlist = catalog::builtin().unwrap();
        let screen = compose(&playlist);

        assert_eq!(
            screen.header.attribution,
            "Bebe Rexha \u{2022} 800,000 saves \u{2022} 35m"
        );
        assert_eq!(screen.header.description, "Segundo álbum de estudio de Bebe Rexha (2021).");
    }

    #[test]
    fn navigation_always_starts_at_home() {
        let playlist = catalog::builtin().unwrap();
        let screen = compose(&playlist);

        let destinations: Vec<_> = screen.nav.entries().iter().map(|e| e.destination).collect();
        assert_eq!(destinations, Destination::ALL.to_vec());
        assert!(screen.nav.entries()[0].selected);
        assert!(!screen.nav.entries()[1].selected);
        assert!(!screen.nav.entries()[2].selected);
    }
}
