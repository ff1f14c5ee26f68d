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

//! Cover art loading.
//!
//! Cover art is referenced by URI and resolved asynchronously. Rendering code
//! asks an [`ImageLoader`] for an [`ImageHandle`] and draws whatever state the
//! handle is in at that moment: still pending, ready, or failed. Failures
//! never propagate beyond the handle, the view simply shows a placeholder.

mod fetch;

use std::sync::{Arc, Mutex, PoisonError};

use image::DynamicImage;
use thiserror::Error;

pub(crate) use fetch::CoverArtLoader;

/// Largest edge, in pixels, kept for a decoded cover.
const THUMBNAIL_EDGE: u32 = 64;

#[derive(Debug, Error)]
pub(crate) enum ImageError {
    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to read image file")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),

    #[error("unsupported image source {0}")]
    UnsupportedScheme(String),

    #[error("image has no pixels")]
    Empty,
}

/// A small decoded RGB bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    pub(crate) fn from_image(image: &DynamicImage) -> Result<Self, ImageError> {
        let rgb = if image.width() > THUMBNAIL_EDGE || image.height() > THUMBNAIL_EDGE {
            image.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).to_rgb8()
        } else {
            image.to_rgb8()
        };
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::Empty);
        }

        let pixels = rgb.pixels().map(|p| p.0).collect();

        Ok(Self { width, height, pixels })
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    /// Samples the pixel at `(x, y)` of a `width` x `height` target, scaling
    /// the bitmap to cover the whole target and cropping the overflow evenly
    /// on both sides.
    pub(crate) fn sample(&self, x: u32, y: u32, width: u32, height: u32) -> [u8; 3] {
        let scale = f64::max(
            f64::from(width) / f64::from(self.width),
            f64::from(height) / f64::from(self.height),
        );

        let offset_x = (f64::from(self.width) * scale - f64::from(width)) / 2.0;
        let offset_y = (f64::from(self.height) * scale - f64::from(height)) / 2.0;

        let src_x = ((f64::from(x) + 0.5 + offset_x) / scale) as u32;
        let src_y = ((f64::from(y) + 0.5 + offset_y) / scale) as u32;

        let src_x = src_x.min(self.width - 1);
        let src_y = src_y.min(self.height - 1);

        self.pixels[(src_y * self.width + src_x) as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImageState {
    Pending,
    Ready(Arc<Thumbnail>),
    Failed,
}

/// Shared slot that a loader resolves exactly once.
#[derive(Debug, Clone)]
pub(crate) struct ImageHandle {
    slot: Arc<Mutex<ImageState>>,
}

impl ImageHandle {
    pub(crate) fn pending() -> Self {
        Self::resolved(ImageState::Pending)
    }

    pub(crate) fn resolved(state: ImageState) -> Self {
        Self {
            slot: Arc::new(Mutex::new(state)),
        }
    }

    pub(crate) fn state(&self) -> ImageState {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn resolve(&self, state: ImageState) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    #[cfg(test)]
    pub(crate) fn shares_slot_with(&self, other: &ImageHandle) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

/// The capability to turn a cover art URI into an eventually-resolved image.
pub(crate) trait ImageLoader {
    fn load(&self, uri: &str) -> ImageHandle;
}
