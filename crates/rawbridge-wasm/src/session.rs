//! The `LibRaw` class exposed to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import init, { LibRaw } from '@rawbridge/wasm';
//!
//! await init();
//!
//! const raw = new LibRaw(engine);
//! raw.open(new Uint8Array(await file.arrayBuffer()), { halfSize: true });
//!
//! const meta = raw.metadata(true);
//! console.log(`${meta.camera_make} ${meta.camera_model}: ${meta.width}x${meta.height}`);
//!
//! const image = raw.imageData();        // undefined if nothing could be rendered
//! const preview = raw.thumbnailData();  // throws ThumbnailError if absent
//! ```

use rawbridge_core::{ProcessedImage, Session, ThumbnailImage};
use wasm_bindgen::prelude::*;

use crate::convert::{
    bytes_from_js, error_to_js, object_from, pixels_to_js, settings_from_js, to_js,
};
use crate::engine::{HostEngine, JsRawEngine};

/// A RAW decode session bound to a host engine.
///
/// Calls must not overlap; the session has no internal locking.
#[wasm_bindgen(js_name = LibRaw)]
pub struct JsLibRaw {
    inner: Session<HostEngine>,
}

#[wasm_bindgen(js_class = LibRaw)]
impl JsLibRaw {
    /// Create a session that drives `engine`.
    #[wasm_bindgen(constructor)]
    pub fn new(engine: JsRawEngine) -> JsLibRaw {
        JsLibRaw {
            inner: Session::new(HostEngine::new(engine)),
        }
    }

    /// Open a RAW file.
    ///
    /// # Arguments
    /// * `buffer` - `ArrayBuffer` or any `ArrayBufferView` holding the file
    /// * `settings` - Optional decode settings object; unknown or malformed
    ///   keys are ignored
    ///
    /// # Errors
    /// Throws `EngineOpenError` (with `code`) when the engine rejects the file,
    /// or a plain error when `buffer` is not buffer-like.
    pub fn open(&mut self, buffer: &JsValue, settings: &JsValue) -> Result<(), JsValue> {
        let bytes = bytes_from_js(buffer)?;
        let settings = settings_from_js(settings);
        self.inner
            .open_owned(bytes, settings.as_ref())
            .map_err(error_to_js)
    }

    /// Metadata for the opened file. With `fullOutput` the colour,
    /// common maker-note and manufacturer blocks are included.
    pub fn metadata(&self, full_output: Option<bool>) -> Result<JsValue, JsValue> {
        to_js(&self.inner.metadata(full_output.unwrap_or(false)))
    }

    /// Decode and render the full image.
    ///
    /// Returns `{ width, height, colors, bits, dataSize, data }` where `data`
    /// is a `Uint16Array` for 16-bit output and a `Uint8Array` otherwise, or
    /// `undefined` when the engine cannot render.
    #[wasm_bindgen(js_name = imageData)]
    pub fn image_data(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.image_data().map_err(error_to_js)? {
            Some(image) => processed_to_js(&image),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Extract the embedded preview as `{ data, width, height, format }`.
    #[wasm_bindgen(js_name = thumbnailData)]
    pub fn thumbnail_data(&mut self) -> Result<JsValue, JsValue> {
        let thumb = self.inner.thumbnail_data().map_err(error_to_js)?;
        thumbnail_to_js(&thumb)
    }

    /// Whether unpack/process has been attempted for the opened file.
    #[wasm_bindgen(getter, js_name = isUnpacked)]
    pub fn is_unpacked(&self) -> bool {
        self.inner.is_unpacked()
    }
}

fn processed_to_js(image: &ProcessedImage) -> Result<JsValue, JsValue> {
    object_from(&[
        ("width", image.width.into()),
        ("height", image.height.into()),
        ("colors", image.colors.into()),
        ("bits", image.bits.into()),
        ("dataSize", (image.data_size as u32).into()),
        ("data", pixels_to_js(&image.data)),
    ])
}

fn thumbnail_to_js(thumb: &ThumbnailImage) -> Result<JsValue, JsValue> {
    object_from(&[
        ("data", pixels_to_js(&thumb.data)),
        ("width", thumb.width.into()),
        ("height", thumb.height.into()),
        ("format", JsValue::from_str(thumb.format.as_str())),
    ])
}
