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

//! Background cover art fetching.
//!
//! Each distinct URI is fetched once on its own thread. `http(s)` URIs are
//! downloaded, `file://` URIs and bare paths are read from disk. The decoded
//! thumbnail is stored in the URI's [`ImageHandle`] and an
//! [`AppEvent::CoverArtReady`] is broadcast so the UI redraws.

use std::{
    collections::HashMap,
    fs,
    sync::{Arc, Mutex, PoisonError, mpsc::Sender},
    thread,
    time::Duration,
};

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::{
    actions::events::AppEvent,
    images::{ImageError, ImageHandle, ImageLoader, ImageState, Thumbnail},
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) struct CoverArtLoader {
    client: Client,
    cache: Mutex<HashMap<String, ImageHandle>>,
    event_tx: Sender<AppEvent>,
}

impl CoverArtLoader {
    pub(crate) fn new(timeout: Duration, event_tx: Sender<AppEvent>) -> Result<Self, ImageError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            cache: Mutex::new(HashMap::new()),
            event_tx,
        })
    }

    fn spawn_fetch(&self, uri: String, handle: ImageHandle) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            let state = match fetch_thumbnail(&client, &uri) {
                Ok(thumbnail) => {
                    debug!(%uri, width = thumbnail.width(), height = thumbnail.height(), "cover art ready");
                    ImageState::Ready(Arc::new(thumbnail))
                }
                Err(e) => {
                    warn!(%uri, error = %e, "cover art unavailable");
                    ImageState::Failed
                }
            };

            handle.resolve(state);
            let _ = event_tx.send(AppEvent::CoverArtReady);
        });
    }
}

impl ImageLoader for CoverArtLoader {
    fn load(&self, uri: &str) -> ImageHandle {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = cache.get(uri) {
            return handle.clone();
        }

        let handle = ImageHandle::pending();
        cache.insert(uri.to_string(), handle.clone());
        drop(cache);

        self.spawn_fetch(uri.to_string(), handle.clone());

        handle
    }
}

fn fetch_thumbnail(client: &Client, uri: &str) -> Result<Thumbnail, ImageError> {
    let bytes = read_source(client, uri)?;
    let image = image::load_from_memory(&bytes)?;
    Thumbnail::from_image(&image)
}

fn read_source(client: &Client, uri: &str) -> Result<Vec<u8>, ImageError> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let response = client.get(uri).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }
        return Ok(response.bytes()?.to_vec());
    }

    if let Some(path) = uri.strip_prefix("file://") {
        return Ok(fs::read(path)?);
    }

    if uri.contains("://") {
        return Err(ImageError::UnsupportedScheme(uri.to_string()));
    }

    Ok(fs::read(uri)?)
}
