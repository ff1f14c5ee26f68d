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

//! Catalog snapshots.
//!
//! A snapshot is a TOML document describing one playlist: an `id`, a
//! `[header]` table and an array of `[[tracks]]`. The application ships with a
//! built-in snapshot and can load others from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{Playlist, PlaylistHeader, PlaylistId, Track, TrackId};

const BUILTIN_SNAPSHOT: &str = include_str!("demo_playlist.toml");

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read catalog snapshot {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog snapshot")]
    Parse(#[from] toml::de::Error),

    #[error("tracks {first} and {second} are both marked as now playing")]
    MultipleNowPlaying { first: TrackId, second: TrackId },
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    id: PlaylistId,
    header: PlaylistHeader,
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Returns the playlist bundled with the application.
pub(crate) fn builtin() -> Result<Playlist, CatalogError> {
    parse(BUILTIN_SNAPSHOT)
}

/// Reads and validates a snapshot file.
pub(crate) fn load(path: &Path) -> Result<Playlist, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let playlist = parse(&text)?;
    debug!(path = %path.display(), tracks = playlist.tracks().len(), "loaded catalog snapshot");

    Ok(playlist)
}

/// Parses and validates a snapshot document.
pub(crate) fn parse(text: &str) -> Result<Playlist, CatalogError> {
    let snapshot: Snapshot = toml::from_str(text)?;
    Playlist::new(snapshot.id, snapshot.header, snapshot.tracks)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const MINIMAL: &str = r#"
id = "minimal"

[header]
title = "Minimal"
description = ""
owner = "Nobody"
save_count = 0
duration_secs = 0
cover_art = "cover.png"
"#;

    #[test]
    fn builtin_snapshot_matches_the_demo_playlist() {
        let playlist = builtin().unwrap();

        assert_eq!(playlist.id().0, "better-mistakes");
        assert_eq!(playlist.header().title, "Bebe Rexha - Better Mistakes");
        assert_eq!(playlist.header().save_count, 800_000);
        assert_eq!(playlist.header().duration_secs, 35 * 60);
        assert_eq!(playlist.tracks().len(), 7);
        assert_eq!(playlist.now_playing(), Some(TrackId(2)));
        assert_eq!(playlist.tracks()[2].title, "Better Mistakes");
        assert!(playlist.tracks().iter().all(|t| !t.is_new_release));
    }

    #[test]
    fn flags_default_to_false() {
        let text = format!(
            "{MINIMAL}\n[[tracks]]\ntitle = \"Song\"\nartist = \"Band\"\ncover_art = \"song.png\"\n"
        );
        let playlist = parse(&text).unwrap();

        let track = &playlist.tracks()[0];
        assert!(!track.is_new_release);
        assert!(!track.is_now_playing);
    }

    #[test]
    fn tracks_may_be_omitted() {
        let playlist = parse(MINIMAL).unwrap();
        assert!(playlist.tracks().is_empty());
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let text = format!("{MINIMAL}\n[[tracks]]\ntitle = \"Song\"\ncover_art = \"song.png\"\n");
        assert!(matches!(parse(&text), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn two_playing_tracks_are_rejected() {
        let text = format!(
            "{MINIMAL}
[[tracks]]
title = \"A\"
artist = \"X\"
cover_art = \"a.png\"
is_now_playing = true

[[tracks]]
title = \"B\"
artist = \"X\"
cover_art = \"b.png\"
is_now_playing = true
"
        );

        assert!(matches!(
            parse(&text),
            Err(CatalogError::MultipleNowPlaying { first: TrackId(0), second: TrackId(1) })
        ));
    }

    #[test]
    fn load_reads_snapshot_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let playlist = load(file.path()).unwrap();
        assert_eq!(playlist.header().owner, "Nobody");
    }

    #[test]
    fn load_reports_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        match load(&path) {
            Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
