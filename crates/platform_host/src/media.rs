//! Media kinds and local-file descriptors exchanged between the runtime and host adapters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Media family rendered by the gallery.
pub enum MediaKind {
    /// Still image rendered with `<img>`.
    Image,
    /// Video rendered with `<video>`.
    Video,
}

impl MediaKind {
    /// Classifies a MIME type, returning `None` for anything that is not an image or video.
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if mime_type.starts_with("image/") {
            Some(Self::Image)
        } else if mime_type.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Stable lowercase label used in CSS classes and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Host-assigned key for a file the user selected during this session.
///
/// The bytes stay with the host adapter; the runtime only ever holds the key.
pub struct BlobKey(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Descriptor for a locally selected file.
pub struct LocalFile {
    /// Host key for the underlying blob.
    pub blob: BlobKey,
    /// Original file name.
    pub name: String,
    /// Browser-reported MIME type (may be empty).
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl LocalFile {
    /// Returns the media kind for this file, if it is an image or video.
    pub fn media_kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime_type(&self.mime_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Revocable reference to memory-backed preview data for one staged file.
///
/// Handles are only minted by an [`crate::ObjectUrlService`] and must be handed back to
/// [`crate::ObjectUrlService::revoke_preview`] exactly once.
pub struct PreviewHandle {
    blob: BlobKey,
    url: String,
}

impl PreviewHandle {
    /// Builds a handle for an already-created object URL.
    pub fn new(blob: BlobKey, url: impl Into<String>) -> Self {
        Self {
            blob,
            url: url.into(),
        }
    }

    /// Blob the preview was derived from.
    pub fn blob(&self) -> BlobKey {
        self.blob
    }

    /// Object URL suitable for `src` attributes.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_classify_into_image_and_video_only() {
        assert_eq!(MediaKind::from_mime_type("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime_type("Video/MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime_type("application/pdf"), None);
        assert_eq!(MediaKind::from_mime_type(""), None);
    }
}
