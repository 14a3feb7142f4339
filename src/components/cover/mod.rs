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

//! Cover art for the detail view.
//!
//! Downloaded cover bytes are inspected to find the image format and size,
//! then written to a temporary file that acts as the displayable handle for
//! the image. The handle is owned by the detail view and released
//! explicitly when the view goes away or a different image replaces it.
//!
//! Anything that cannot be shown, a failed fetch or bytes that are not a
//! recognisable image, ends up as [`CoverArt::Placeholder`].

mod render;

use std::{
    io::{self, Cursor, Write},
    path::Path,
};

use lofty::picture::{MimeType, Picture, PictureInformation};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

const TEMP_PREFIX: &str = "trackerui-cover-";

#[derive(Debug, Error)]
pub(crate) enum CoverError {
    #[error("unrecognised image data: {0}")]
    Unrecognised(String),

    #[error("image has no dimensions")]
    Empty,

    #[error("failed to store cover image: {0}")]
    Io(#[from] io::Error),
}

/// A decoded cover image backed by a temporary file.
#[derive(Debug)]
pub(crate) struct CoverImage {
    file: NamedTempFile,
    mime: String,
    width: u32,
    height: u32,
    size: usize,
}

impl CoverImage {
    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, CoverError> {
        let picture = Picture::from_reader(&mut Cursor::new(bytes))
            .map_err(|e| CoverError::Unrecognised(e.to_string()))?;

        let mime = match picture.mime_type() {
            Some(MimeType::Unknown(other)) => return Err(CoverError::Unrecognised(other.clone())),
            Some(mime) => mime.clone(),
            None => return Err(CoverError::Unrecognised("unknown format".to_string())),
        };

        let info = PictureInformation::from_picture(&picture)
            .map_err(|e| CoverError::Unrecognised(e.to_string()))?;
        if info.width == 0 || info.height == 0 {
            return Err(CoverError::Empty);
        }

        let suffix = format!(".{}", mime.ext().unwrap_or("img"));
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        debug!(
            path = %file.path().display(),
            width = info.width,
            height = info.height,
            "Cover image stored"
        );

        Ok(Self {
            file,
            mime: mime.as_str().to_string(),
            width: info.width,
            height: info.height,
            size: bytes.len(),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }

    pub(crate) fn mime(&self) -> &str {
        &self.mime
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Deletes the backing file.
    pub(crate) fn release(self) {
        let path = self.file.path().to_path_buf();
        if let Err(e) = self.file.close() {
            warn!(path = %path.display(), "Failed to remove cover image: {e}");
        }
    }
}

#[derive(Debug, Default)]
pub(crate) enum CoverArt {
    #[default]
    Pending,
    Ready(CoverImage),
    Placeholder,
}

impl CoverArt {
    /// Builds the cover state for freshly fetched bytes.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        match CoverImage::decode(bytes) {
            Ok(image) => CoverArt::Ready(image),
            Err(e) => {
                warn!("Cover image not shown: {e}");
                CoverArt::Placeholder
            }
        }
    }

    pub(crate) fn image(&self) -> Option<&CoverImage> {
        match self {
            CoverArt::Ready(image) => Some(image),
            _ => None,
        }
    }

    /// Swaps in a new state, releasing any image held before.
    pub(crate) fn replace(&mut self, next: CoverArt) {
        if let CoverArt::Ready(previous) = std::mem::replace(self, next) {
            previous.release();
        }
    }

    pub(crate) fn release(&mut self) {
        self.replace(CoverArt::Pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::PNG_1X1;

    #[test]
    fn png_is_decoded_and_stored() {
        let art = CoverArt::from_bytes(PNG_1X1);

        let image = art.image().expect("png should decode");
        assert_eq!((image.width(), image.height()), (1, 1));
        assert_eq!(image.mime(), "image/png");
        assert_eq!(image.size(), PNG_1X1.len());
        assert!(image.path().exists());
        assert!(image.path().file_name().unwrap().to_string_lossy().starts_with(TEMP_PREFIX));
    }

    #[test]
    fn release_removes_the_file() {
        let mut art = CoverArt::from_bytes(PNG_1X1);
        let path = art.image().unwrap().path().to_path_buf();

        art.release();

        assert!(matches!(art, CoverArt::Pending));
        assert!(!path.exists());
    }

    #[test]
    fn replacing_releases_previous_image() {
        let mut art = CoverArt::from_bytes(PNG_1X1);
        let first = art.image().unwrap().path().to_path_buf();

        art.replace(CoverArt::from_bytes(PNG_1X1));

        assert!(!first.exists());
        assert!(art.image().unwrap().path().exists());
    }

    #[test]
    fn garbage_becomes_placeholder() {
        let art = CoverArt::from_bytes(b"this is certainly not an image");
        assert!(matches!(art, CoverArt::Placeholder));

        let art = CoverArt::from_bytes(&[]);
        assert!(matches!(art, CoverArt::Placeholder));
    }
}
