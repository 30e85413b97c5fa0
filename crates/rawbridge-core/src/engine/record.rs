//! The engine's read-only decode record.
//!
//! These types mirror the state the engine exposes after `open` (and, for
//! the thumbnail, after the thumbnail stage). The bridge only reads them.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::makernotes::MakernotesRecord;

/// Keyed access to the sections of a host-supplied decode record.
pub trait SectionReader {
    type Error: fmt::Display;

    /// Decode the value at `path`. `Ok(None)` when it is absent or null.
    fn read<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Option<T>, Self::Error>;
}

impl SectionReader for serde_json::Value {
    type Error = serde_json::Error;

    fn read<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Option<T>, Self::Error> {
        let mut value = self;
        for key in path {
            match value.get(key) {
                Some(next) => value = next,
                None => return Ok(None),
            }
        }
        if value.is_null() {
            return Ok(None);
        }
        T::deserialize(value).map(Some)
    }
}

fn section<R, T>(reader: &R, path: &[&str]) -> T
where
    R: SectionReader + ?Sized,
    T: DeserializeOwned + Default,
{
    match reader.read(path) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!(section = %path.join("."), "unreadable engine record section: {}", e);
            T::default()
        }
    }
}

/// Seconds may arrive as a float from hosts that only have doubles.
fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    f64::deserialize(deserializer).map(|secs| secs as i64)
}

/// Everything the engine knows about the currently opened file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    pub sizes: ImageSizes,
    pub idata: CameraIdentity,
    pub other: ShotInfo,
    pub thumbnail: ThumbnailRecord,
    pub color: ColorData,
    pub makernotes: MakernotesRecord,
}

impl ImageData {
    /// Assemble a record one section at a time.
    ///
    /// A section that fails to decode keeps its defaults; the others are
    /// unaffected. Maker notes are read per manufacturer.
    pub fn from_sections<R: SectionReader + ?Sized>(reader: &R) -> Self {
        let makernotes = MakernotesRecord {
            common: section(reader, &["makernotes", "common"]),
            canon: section(reader, &["makernotes", "canon"]),
            nikon: section(reader, &["makernotes", "nikon"]),
            fuji: section(reader, &["makernotes", "fuji"]),
            sony: section(reader, &["makernotes", "sony"]),
            panasonic: section(reader, &["makernotes", "panasonic"]),
            olympus: section(reader, &["makernotes", "olympus"]),
            pentax: section(reader, &["makernotes", "pentax"]),
            hasselblad: section(reader, &["makernotes", "hasselblad"]),
            ricoh: section(reader, &["makernotes", "ricoh"]),
            samsung: section(reader, &["makernotes", "samsung"]),
            kodak: section(reader, &["makernotes", "kodak"]),
            phaseone: section(reader, &["makernotes", "phaseone"]),
        };
        Self {
            sizes: section(reader, &["sizes"]),
            idata: section(reader, &["idata"]),
            other: section(reader, &["other"]),
            thumbnail: section(reader, &["thumbnail"]),
            color: section(reader, &["color"]),
            makernotes,
        }
    }
}

/// Sensor geometry, unrotated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSizes {
    pub raw_width: u32,
    pub raw_height: u32,
    pub width: u32,
    pub height: u32,
    pub top_margin: u32,
    pub left_margin: u32,
    /// Orientation code, 0..=7.
    pub flip: i32,
}

impl ImageSizes {
    /// Returns true if the flip code rotates the image by 90 or 270 degrees.
    #[inline]
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self.flip, 5..=7)
    }

    /// Output width and height after orientation correction.
    pub fn oriented_dimensions(&self) -> (u32, u32) {
        if self.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraIdentity {
    pub make: String,
    pub model: String,
}

/// Exposure attributes and free-form shot description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotInfo {
    pub iso_speed: f32,
    pub shutter: f32,
    pub aperture: f32,
    pub focal_len: f32,
    /// Capture time in seconds since the Unix epoch.
    #[serde(deserialize_with = "seconds")]
    pub timestamp: i64,
    pub shot_order: u32,
    pub desc: String,
    pub artist: String,
}

/// Embedded preview descriptor and, after the thumbnail stage, its bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailRecord {
    pub tformat: i32,
    pub twidth: u32,
    pub theight: u32,
    pub tlength: u32,
    #[serde(skip)]
    pub thumb: Option<Vec<u8>>,
}

/// Colour levels, white balance multipliers and identification strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorData {
    pub black: u32,
    pub data_maximum: u32,
    pub maximum: u32,
    pub fmaximum: f32,
    pub fnorm: f32,
    pub cam_mul: [f32; 4],
    pub pre_mul: [f32; 4],
    pub flash_used: f32,
    pub canon_ev: f32,
    pub model2: String,
    #[serde(rename = "UniqueCameraModel")]
    pub unique_camera_model: String,
    #[serde(rename = "LocalizedCameraModel")]
    pub localized_camera_model: String,
    #[serde(rename = "ImageUniqueID")]
    pub image_unique_id: String,
    #[serde(rename = "RawDataUniqueID")]
    pub raw_data_unique_id: String,
    pub raw_bps: u32,
    #[serde(rename = "ExifColorSpace")]
    pub exif_color_space: i32,
}

/// A rendered image owned by the engine until handed back through
/// [`RawEngine::clear_mem`](super::RawEngine::clear_mem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemImage {
    pub width: u32,
    pub height: u32,
    pub colors: u32,
    pub bits: u32,
    pub data: Vec<u8>,
}

impl MemImage {
    /// Size of the pixel payload in bytes.
    pub fn data_size(&self) -> usize {
        self.data.len()
    }
}
