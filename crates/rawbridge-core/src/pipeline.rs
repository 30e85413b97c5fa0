//! Pixel pipeline: unpack, process, render, and thumbnail extraction.
//!
//! The main pipeline moves forward through [`PipelineState`] and is only
//! reset by reopening the session. Unpack and process run at most once per
//! opened file. The state leaves [`PipelineState::Opened`] *before* the
//! unpack stage runs, so a failed unpack or process is not retried by later
//! calls; those calls go straight to rendering.
//!
//! Thumbnail extraction does not touch the pipeline state and re-runs on
//! every call.

use tracing::{debug, warn};

use crate::engine::RawEngine;
use crate::error::{BridgeError, Result};
use crate::marshal::{emit, PixelData};
use crate::metadata::ThumbnailFormat;
use crate::status;

/// Progress of the main decode pipeline for the current file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PipelineState {
    /// File opened, nothing decoded yet.
    #[default]
    Opened,
    /// Unpack/process attempted. Set before the stages run.
    Unpacked,
    /// Unpack and process both reported success.
    Processed,
}

impl PipelineState {
    /// Whether the unpack/process stages have been attempted.
    pub fn is_unpacked(self) -> bool {
        self >= PipelineState::Unpacked
    }
}

/// A rendered image copied out of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub width: u32,
    pub height: u32,
    pub colors: u32,
    pub bits: u32,
    /// Size of the rendered payload in bytes, as reported by the engine.
    pub data_size: usize,
    pub data: PixelData,
}

/// The embedded preview copied out of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    pub data: PixelData,
    pub width: u32,
    pub height: u32,
    pub format: ThumbnailFormat,
}

/// Run unpack and process once for the opened file.
///
/// Does nothing if the stages were already attempted.
pub fn run_stages<E: RawEngine + ?Sized>(
    engine: &mut E,
    input: &[u8],
    state: &mut PipelineState,
) -> Result<()> {
    if state.is_unpacked() {
        return Ok(());
    }
    *state = PipelineState::Unpacked;

    let code = engine.unpack(input);
    if !status::is_success(code) {
        warn!(code, "unpack failed: {}", status::message(code));
        return Err(BridgeError::Unpack { code });
    }

    let code = engine.dcraw_process();
    if !status::is_success(code) {
        warn!(code, "dcraw_process failed: {}", status::message(code));
        return Err(BridgeError::Process { code });
    }

    *state = PipelineState::Processed;
    debug!("unpack and process complete");
    Ok(())
}

/// Render the processed image and copy it out.
///
/// The engine's image is released before returning. `None` when the engine
/// cannot render.
pub fn render<E: RawEngine + ?Sized>(engine: &mut E) -> Option<ProcessedImage> {
    let Some(image) = engine.make_mem_image() else {
        warn!("engine produced no rendered image");
        return None;
    };

    let data_size = image.data_size();
    let data = emit(image.bits, data_size, &image.data);
    let processed = ProcessedImage {
        width: image.width,
        height: image.height,
        colors: image.colors,
        bits: image.bits,
        data_size,
        data,
    };
    engine.clear_mem(image);

    debug!(
        width = processed.width,
        height = processed.height,
        bits = processed.bits,
        "rendered image"
    );
    Some(processed)
}

/// Run the pipeline if needed, then render.
pub fn image_data<E: RawEngine + ?Sized>(
    engine: &mut E,
    input: &[u8],
    state: &mut PipelineState,
) -> Result<Option<ProcessedImage>> {
    run_stages(engine, input, state)?;
    Ok(render(engine))
}

/// Extract the embedded preview.
pub fn thumbnail<E: RawEngine + ?Sized>(engine: &mut E, input: &[u8]) -> Result<ThumbnailImage> {
    let code = engine.unpack_thumb(input);
    if !status::is_success(code) {
        warn!(code, "unpack_thumb failed: {}", status::message(code));
        return Err(BridgeError::Thumbnail { code });
    }

    let record = &engine.image_data().thumbnail;
    let Some(bytes) = record.thumb.as_deref() else {
        return Err(BridgeError::Thumbnail {
            code: status::NO_THUMBNAIL,
        });
    };

    // Previews are always handed out as bytes, 16-bit bitmaps included.
    let format = ThumbnailFormat::from_code(record.tformat).extracted();
    let data = emit(8, record.tlength as usize, bytes);

    debug!(
        width = record.twidth,
        height = record.theight,
        format = format.as_str(),
        "extracted thumbnail"
    );
    Ok(ThumbnailImage {
        data,
        width: record.twidth,
        height: record.theight,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ImageData, MemImage};
    use crate::settings::DecodeParams;

    #[derive(Default)]
    struct Stub {
        record: ImageData,
        unpack_code: i32,
        process_code: i32,
        thumb_code: i32,
        thumb: Option<Vec<u8>>,
        render: Option<MemImage>,
        unpacks: usize,
        processes: usize,
        thumb_calls: usize,
        cleared: usize,
    }

    impl RawEngine for Stub {
        fn recycle(&mut self) {}

        fn open_buffer(&mut self, _data: &[u8], _params: &DecodeParams) -> i32 {
            status::SUCCESS
        }

        fn unpack(&mut self, _data: &[u8]) -> i32 {
            self.unpacks += 1;
            self.unpack_code
        }

        fn dcraw_process(&mut self) -> i32 {
            self.processes += 1;
            self.process_code
        }

        fn make_mem_image(&mut self) -> Option<MemImage> {
            self.render.clone()
        }

        fn clear_mem(&mut self, _image: MemImage) {
            self.cleared += 1;
        }

        fn unpack_thumb(&mut self, _data: &[u8]) -> i32 {
            self.thumb_calls += 1;
            self.record.thumbnail.thumb = self.thumb.clone();
            self.thumb_code
        }

        fn image_data(&self) -> &ImageData {
            &self.record
        }
    }

    #[test]
    fn test_stages_run_once() {
        let mut engine = Stub::default();
        let mut state = PipelineState::Opened;

        run_stages(&mut engine, &[], &mut state).unwrap();
        run_stages(&mut engine, &[], &mut state).unwrap();

        assert_eq!(state, PipelineState::Processed);
        assert_eq!((engine.unpacks, engine.processes), (1, 1));
    }

    #[test]
    fn test_unpack_failure_is_not_retried() {
        let mut engine = Stub {
            unpack_code: status::DATA_ERROR,
            ..Default::default()
        };
        let mut state = PipelineState::Opened;

        let err = run_stages(&mut engine, &[], &mut state).unwrap_err();
        assert_eq!(err, BridgeError::Unpack { code: status::DATA_ERROR });
        assert_eq!(state, PipelineState::Unpacked);
        assert_eq!(engine.processes, 0);

        run_stages(&mut engine, &[], &mut state).unwrap();
        assert_eq!(engine.unpacks, 1);
    }

    #[test]
    fn test_render_copies_and_releases() {
        let mut engine = Stub {
            render: Some(MemImage {
                width: 2,
                height: 1,
                colors: 3,
                bits: 8,
                data: vec![1, 2, 3, 4, 5, 6],
            }),
            ..Default::default()
        };

        let image = render(&mut engine).unwrap();
        assert_eq!(image.data_size, 6);
        assert_eq!(image.data.as_u8(), Some(&[1u8, 2, 3, 4, 5, 6][..]));
        assert_eq!(engine.cleared, 1);
    }

    #[test]
    fn test_render_16bit() {
        let mut engine = Stub {
            render: Some(MemImage {
                width: 1,
                height: 1,
                colors: 3,
                bits: 16,
                data: vec![0; 6],
            }),
            ..Default::default()
        };
        let image = render(&mut engine).unwrap();
        assert_eq!(image.data_size, 6);
        assert_eq!(image.data.as_u16().map(<[u16]>::len), Some(3));
    }

    #[test]
    fn test_null_render_is_none() {
        let mut engine = Stub::default();
        let mut state = PipelineState::Opened;
        assert_eq!(image_data(&mut engine, &[], &mut state).unwrap(), None);
        assert_eq!(engine.cleared, 0);
    }

    #[test]
    fn test_thumbnail_status_failure() {
        let mut engine = Stub {
            thumb_code: status::NO_THUMBNAIL,
            ..Default::default()
        };
        let err = thumbnail(&mut engine, &[]).unwrap_err();
        assert_eq!(err.code(), status::NO_THUMBNAIL);
    }

    #[test]
    fn test_thumbnail_missing_bytes() {
        let mut engine = Stub::default();
        let err = thumbnail(&mut engine, &[]).unwrap_err();
        assert_eq!(
            err,
            BridgeError::Thumbnail {
                code: status::NO_THUMBNAIL
            }
        );
    }

    #[test]
    fn test_thumbnail_reruns_every_call() {
        let mut engine = Stub {
            thumb: Some(vec![0xFF, 0xD8, 0xFF, 0xD9]),
            ..Default::default()
        };
        engine.record.thumbnail.tformat = 1;
        engine.record.thumbnail.tlength = 4;
        engine.record.thumbnail.twidth = 160;
        engine.record.thumbnail.theight = 120;

        let first = thumbnail(&mut engine, &[]).unwrap();
        let second = thumbnail(&mut engine, &[]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.format, ThumbnailFormat::Jpeg);
        assert_eq!(first.data.byte_len(), 4);
        assert_eq!((first.width, first.height), (160, 120));
        assert_eq!(engine.thumb_calls, 2);
    }

    #[test]
    fn test_thumbnail_exotic_format_reported_unknown() {
        let mut engine = Stub {
            thumb: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        engine.record.thumbnail.tformat = 6;
        engine.record.thumbnail.tlength = 3;
        let thumb = thumbnail(&mut engine, &[]).unwrap();
        assert_eq!(thumb.format, ThumbnailFormat::Unknown);
        assert_eq!(thumb.data, PixelData::U8(vec![1, 2, 3]));
    }

    #[test]
    fn test_bitmap16_thumbnail_is_bytes() {
        let mut engine = Stub {
            thumb: Some(vec![0; 8]),
            ..Default::default()
        };
        engine.record.thumbnail.tformat = 3;
        engine.record.thumbnail.tlength = 8;
        let thumb = thumbnail(&mut engine, &[]).unwrap();
        assert_eq!(thumb.format, ThumbnailFormat::Bitmap16);
        assert_eq!(thumb.data.as_u8().map(<[u8]>::len), Some(8));
    }
}
