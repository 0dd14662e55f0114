//! Media attachments and the upload degradation policy.
//!
//! An attachment is either an image or a video; an issue payload carries
//! media references, never raw files. When the upload collaborator fails,
//! images fall back to an inline base64 representation of their already
//! compressed bytes and videos are dropped with a warning, so a media
//! failure never blocks the submission itself.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A media file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAttachment {
    /// A compressed image.
    Image {
        /// Original file name.
        file_name: String,
        /// MIME type, e.g. `image/jpeg`.
        mime_type: String,
        /// Compressed image bytes.
        bytes: Vec<u8>,
    },
    /// A video clip.
    Video {
        /// Original file name.
        file_name: String,
        /// MIME type, e.g. `video/mp4`.
        mime_type: String,
        /// Encoded video bytes.
        bytes: Vec<u8>,
    },
}

impl MediaAttachment {
    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Image { file_name, .. } | Self::Video { file_name, .. } => file_name,
        }
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        match self {
            Self::Image { mime_type, .. } | Self::Video { mime_type, .. } => mime_type,
        }
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Image { bytes, .. } | Self::Video { bytes, .. } => bytes,
        }
    }

    /// Returns `true` for image attachments.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Produces the degraded inline representation, when one exists.
    ///
    /// Images inline as base64; videos have no inline form and return
    /// `None`.
    #[must_use]
    pub fn inline_fallback(&self) -> Option<MediaRef> {
        match self {
            Self::Image {
                mime_type, bytes, ..
            } => Some(MediaRef::InlineImage {
                mime_type: mime_type.clone(),
                data: BASE64.encode(bytes),
            }),
            Self::Video { .. } => None,
        }
    }
}

/// Reference to media carried in an issue payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    /// Media uploaded to the backend, referenced by URL.
    Remote {
        /// Location of the uploaded file.
        url: String,
    },
    /// Degraded inline image embedded in the payload.
    InlineImage {
        /// MIME type of the inlined image.
        mime_type: String,
        /// Base64-encoded image bytes.
        data: String,
    },
}

/// Non-fatal condition recorded during submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionWarning {
    /// The upload collaborator failed and media fell back to inline form.
    UploadFailed {
        /// Description of the upload failure.
        detail: String,
    },
    /// A video was dropped because it has no inline fallback.
    VideoDropped {
        /// File name of the dropped video.
        file_name: String,
    },
}

impl fmt::Display for SubmissionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UploadFailed { detail } => {
                write!(f, "media upload failed, images embedded inline: {detail}")
            }
            Self::VideoDropped { file_name } => {
                write!(f, "video '{file_name}' was dropped from the submission")
            }
        }
    }
}
