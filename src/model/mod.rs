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

//! Domain models and core data structures.
//!
//! This module defines the playlist and track entities displayed by the
//! playlist view. All values are immutable once constructed; a [`Playlist`]
//! is built from a catalog snapshot (see [`catalog`]) and handed to the
//! renderer by reference.

pub(crate) mod catalog;

use std::fmt;

use serde::Deserialize;

pub(crate) use catalog::CatalogError;

/// Identifies a playlist in the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub(crate) struct PlaylistId(pub(crate) String);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a track by its zero-based position within its playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TrackId(pub(crate) usize);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Track {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) cover_art: String,
    #[serde(default)]
    pub(crate) is_new_release: bool,
    #[serde(default)]
    pub(crate) is_now_playing: bool,
}

#[cfg(test)]
impl Track {
    pub(crate) fn new(title: &str, artist: &str, cover_art: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            cover_art: cover_art.to_string(),
            is_new_release: false,
            is_now_playing: false,
        }
    }

    pub(crate) fn new_release(mut self) -> Self {
        self.is_new_release = true;
        self
    }

    pub(crate) fn now_playing(mut self) -> Self {
        self.is_now_playing = true;
        self
    }
}

/// Descriptive metadata shown in the playlist header block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct PlaylistHeader {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) owner: String,
    pub(crate) save_count: u64,
    pub(crate) duration_secs: u64,
    pub(crate) cover_art: String,
}

/// An ordered, immutable collection of tracks plus header metadata.
///
/// At most one track may be flagged as now playing; [`Playlist::new`] rejects
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playlist {
    id: PlaylistId,
    header: PlaylistHeader,
    tracks: Vec<Track>,
}

impl Playlist {
    pub(crate) fn new(
        id: PlaylistId,
        header: PlaylistHeader,
        tracks: Vec<Track>,
    ) -> Result<Self, CatalogError> {
        let mut playing = tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_now_playing)
            .map(|(i, _)| i);

        if let (Some(first), Some(second)) = (playing.next(), playing.next()) {
            return Err(CatalogError::MultipleNowPlaying {
                first: TrackId(first),
                second: TrackId(second),
            });
        }

        Ok(Self { id, header, tracks })
    }

    pub(crate) fn id(&self) -> &PlaylistId {
        &self.id
    }

    pub(crate) fn header(&self) -> &PlaylistHeader {
        &self.header
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0)
    }

    pub(crate) fn now_playing(&self) -> Option<TrackId> {
        self.tracks.iter().position(|t| t.is_now_playing).map(TrackId)
    }
}
