//! Embedded preview formats.

use serde::Serialize;

/// Format of the embedded preview, from the engine's format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailFormat {
    #[default]
    Unknown,
    Jpeg,
    Bitmap,
    Bitmap16,
    Layer,
    Rollei,
    H265,
}

impl ThumbnailFormat {
    /// Map an engine format code. Unrecognised codes are `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ThumbnailFormat::Jpeg,
            2 => ThumbnailFormat::Bitmap,
            3 => ThumbnailFormat::Bitmap16,
            4 => ThumbnailFormat::Layer,
            5 => ThumbnailFormat::Rollei,
            6 => ThumbnailFormat::H265,
            _ => ThumbnailFormat::Unknown,
        }
    }

    /// Formats the thumbnail extractor reports. Anything other than JPEG or
    /// a bitmap collapses to `Unknown`.
    pub fn extracted(self) -> Self {
        match self {
            ThumbnailFormat::Jpeg | ThumbnailFormat::Bitmap | ThumbnailFormat::Bitmap16 => self,
            _ => ThumbnailFormat::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThumbnailFormat::Unknown => "unknown",
            ThumbnailFormat::Jpeg => "jpeg",
            ThumbnailFormat::Bitmap => "bitmap",
            ThumbnailFormat::Bitmap16 => "bitmap16",
            ThumbnailFormat::Layer => "layer",
            ThumbnailFormat::Rollei => "rollei",
            ThumbnailFormat::H265 => "h265",
        }
    }
}

impl From<i32> for ThumbnailFormat {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}
