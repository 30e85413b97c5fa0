//! The decoding engine seam.
//!
//! The bridge never decodes pixels itself. It drives an engine through the
//! [`RawEngine`] trait: open a buffer, unpack sensor data, process it, render
//! an in-memory image, and extract the embedded preview. Every stage reports
//! a status code from [`crate::status`].
//!
//! Stages that read the file receive the session's input buffer by
//! reference. The session keeps sole ownership of those bytes; an engine must
//! not retain the slice beyond the call.

mod makernotes;
mod record;

pub use makernotes::{
    AfInfoItem, CanonMakernotes, CommonMakernotes, FujiMakernotes, HasselbladMakernotes,
    KodakMakernotes, MakernotesRecord, NikonMakernotes, OlympusMakernotes, PanasonicMakernotes,
    PentaxMakernotes, PhaseOneMakernotes, RicohMakernotes, SamsungMakernotes, SensorCrop,
    SonyMakernotes, OLYMPUS_AF_AREAS,
};
pub use record::{
    CameraIdentity, ColorData, ImageData, ImageSizes, MemImage, SectionReader, ShotInfo,
    ThumbnailRecord,
};

use crate::settings::DecodeParams;

/// An opaque RAW decoding engine.
pub trait RawEngine {
    /// Drop all state from the previously opened file.
    fn recycle(&mut self);

    /// Parse the container and metadata of `data` using `params`.
    fn open_buffer(&mut self, data: &[u8], params: &DecodeParams) -> i32;

    /// Unpack raw sensor values.
    fn unpack(&mut self, data: &[u8]) -> i32;

    /// Run demosaicing and colour processing on the unpacked data.
    fn dcraw_process(&mut self) -> i32;

    /// Render the processed image into memory. `None` when nothing can be
    /// rendered.
    fn make_mem_image(&mut self) -> Option<MemImage>;

    /// Release an image produced by [`RawEngine::make_mem_image`].
    fn clear_mem(&mut self, image: MemImage) {
        drop(image);
    }

    /// Extract the embedded preview into the thumbnail record.
    fn unpack_thumb(&mut self, data: &[u8]) -> i32;

    /// Current decode record.
    fn image_data(&self) -> &ImageData;
}
