//! Metadata projection.
//!
//! Turns the engine's decode record into a nested, portable tree. The basic
//! projection (geometry, camera identity, exposure and thumbnail descriptor)
//! is cheap enough to call per frame. The full projection adds the colour
//! block, the common maker-note block with its AF list, and exactly one
//! manufacturer block chosen from the camera make.
//!
//! Projection only reads the record; every call builds a fresh tree.

mod brand;
mod format;

pub use brand::{Brand, MakerNotes};
pub use format::ThumbnailFormat;

use serde::Serialize;

use crate::engine::{ColorData, CommonMakernotes, ImageData};

/// Common maker-note block as emitted: the AF list is cut to the engine's
/// reported count.
pub type CommonMetadata = CommonMakernotes;

/// Metadata for the currently opened file.
///
/// `width`/`height` are orientation-corrected; `raw_width`, `raw_height` and
/// the margins are reported as stored on the sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub width: u32,
    pub height: u32,
    pub raw_width: u32,
    pub raw_height: u32,
    pub top_margin: u32,
    pub left_margin: u32,

    pub camera_make: String,
    pub camera_model: String,

    pub iso_speed: f32,
    pub shutter: f32,
    pub aperture: f32,
    pub focal_len: f32,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub shot_order: u32,
    pub desc: String,
    pub artist: String,

    pub thumb_width: u32,
    pub thumb_height: u32,
    pub thumb_format: ThumbnailFormat,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_data: Option<ColorData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_common: Option<CommonMetadata>,
    #[serde(flatten)]
    pub maker_notes: Option<MakerNotes>,
}

impl Metadata {
    /// Whether this tree carries the full-output blocks.
    pub fn is_full(&self) -> bool {
        self.color_data.is_some()
    }
}

/// Project the engine record into a metadata tree.
pub fn project(data: &ImageData, full_output: bool) -> Metadata {
    let (width, height) = data.sizes.oriented_dimensions();

    let mut meta = Metadata {
        width,
        height,
        raw_width: data.sizes.raw_width,
        raw_height: data.sizes.raw_height,
        top_margin: data.sizes.top_margin,
        left_margin: data.sizes.left_margin,
        camera_make: data.idata.make.clone(),
        camera_model: data.idata.model.clone(),
        iso_speed: data.other.iso_speed,
        shutter: data.other.shutter,
        aperture: data.other.aperture,
        focal_len: data.other.focal_len,
        timestamp: data.other.timestamp,
        shot_order: data.other.shot_order,
        desc: data.other.desc.trim().to_string(),
        artist: data.other.artist.clone(),
        thumb_width: data.thumbnail.twidth,
        thumb_height: data.thumbnail.theight,
        thumb_format: ThumbnailFormat::from_code(data.thumbnail.tformat),
        color_data: None,
        metadata_common: None,
        maker_notes: None,
    };

    if full_output {
        meta.color_data = Some(data.color.clone());
        meta.metadata_common = Some(project_common(&data.makernotes.common));
        meta.maker_notes = Brand::detect(&data.idata.make)
            .map(|brand| MakerNotes::from_record(brand, &data.makernotes));
    }

    meta
}

fn project_common(common: &CommonMakernotes) -> CommonMetadata {
    let count = usize::try_from(common.afcount)
        .unwrap_or(0)
        .min(common.afdata.len());
    let mut projected = common.clone();
    projected.afdata.truncate(count);
    projected.afcount = count as i32;
    projected
}
