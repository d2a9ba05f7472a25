//! Load and reference images.
use bytes::Bytes;

use std::path::{Path, PathBuf};

/// A handle of some image data.
///
/// Decoding is left to the host; a [`Handle`] only names where the pixels
/// come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Handle {
    /// A file handle. The image data will be read from the file path.
    Path(PathBuf),

    /// A handle pointing to some encoded image bytes in-memory.
    Bytes(Bytes),

    /// A remote image, fetched by the host from the given URL.
    Url(String),
}

impl Handle {
    /// Creates an image [`Handle`] pointing to the image of the given path.
    pub fn from_path<T: Into<PathBuf>>(path: T) -> Handle {
        Self::Path(path.into())
    }

    /// Creates an image [`Handle`] containing the encoded image data directly.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Handle {
        Self::Bytes(bytes.into())
    }

    /// Creates an image [`Handle`] pointing to a remote image.
    pub fn from_url(url: impl Into<String>) -> Handle {
        Self::Url(url.into())
    }

    /// Returns the path of the [`Handle`], if it points to a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Handle::Path(path) => Some(path),
            Handle::Bytes(_) | Handle::Url(_) => None,
        }
    }

    /// Returns true if the image has to be fetched from a remote location.
    pub fn is_remote(&self) -> bool {
        matches!(self, Handle::Url(_))
    }
}

impl<T> From<T> for Handle
where
    T: Into<PathBuf>,
{
    fn from(path: T) -> Handle {
        Handle::from_path(path.into())
    }
}
