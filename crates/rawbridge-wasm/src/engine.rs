//! Host-provided decoding engine.
//!
//! The RAW engine lives on the JavaScript side (typically a separately
//! compiled native module). [`HostEngine`] adapts it to the core
//! [`RawEngine`] trait and keeps a deserialized copy of its decode record.
//!
//! # Host contract
//!
//! ```typescript
//! interface RawEngineHost {
//!   recycle(): void;
//!   openBuffer(data: Uint8Array, params: object): number;
//!   unpack(data: Uint8Array): number;
//!   dcrawProcess(): number;
//!   makeMemImage(): { width, height, colors, bits, dataSize?, data } | null;
//!   clearMem(image: object): void;
//!   unpackThumb(data: Uint8Array): number;
//!   readonly imgdata: object;
//! }
//! ```
//!
//! Byte slices are passed as views into WASM memory and are only valid for
//! the duration of the call.

use js_sys::Reflect;
use rawbridge_core::engine::{ImageData, MemImage, RawEngine, SectionReader};
use rawbridge_core::settings::DecodeParams;
use rawbridge_core::status;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::convert::{bytes_from_js, number_field, to_js};

#[wasm_bindgen]
extern "C" {
    /// A RAW engine implemented by the host.
    #[wasm_bindgen(typescript_type = "RawEngineHost")]
    pub type JsRawEngine;

    #[wasm_bindgen(method)]
    fn recycle(this: &JsRawEngine);

    #[wasm_bindgen(method, js_name = openBuffer)]
    fn open_buffer(this: &JsRawEngine, data: &[u8], params: &JsValue) -> i32;

    #[wasm_bindgen(method)]
    fn unpack(this: &JsRawEngine, data: &[u8]) -> i32;

    #[wasm_bindgen(method, js_name = dcrawProcess)]
    fn dcraw_process(this: &JsRawEngine) -> i32;

    #[wasm_bindgen(method, js_name = makeMemImage)]
    fn make_mem_image(this: &JsRawEngine) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = clearMem)]
    fn clear_mem(this: &JsRawEngine, image: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = unpackThumb)]
    fn unpack_thumb(this: &JsRawEngine, data: &[u8]) -> i32;

    #[wasm_bindgen(method, getter)]
    fn imgdata(this: &JsRawEngine) -> JsValue;
}

/// Adapter from a host engine to [`RawEngine`].
pub struct HostEngine {
    host: JsRawEngine,
    record: ImageData,
    /// Host handle of the last rendered image, returned on `clear_mem`.
    rendered: Option<JsValue>,
}

impl HostEngine {
    pub fn new(host: JsRawEngine) -> Self {
        Self {
            host,
            record: ImageData::default(),
            rendered: None,
        }
    }

    /// Re-read the host's decode record.
    fn refresh(&mut self) {
        let value = self.host.imgdata();
        if value.is_undefined() || value.is_null() {
            self.record = ImageData::default();
            return;
        }

        self.record = ImageData::from_sections(&HostRecord(&value));
        let thumb = thumbnail_bytes(&value);
        let thumbnail = &mut self.record.thumbnail;
        if thumbnail.tlength == 0 {
            if let Some(bytes) = &thumb {
                thumbnail.tlength = bytes.len().try_into().unwrap_or(u32::MAX);
            }
        }
        thumbnail.thumb = thumb;
    }

    /// Hand a rendered image back to the host.
    fn release(&self, image: &JsValue) {
        if let Err(e) = self.host.clear_mem(image) {
            console::warn_2(&"rawbridge: clearMem failed".into(), &e);
        }
    }
}

/// The host's `imgdata` object, read one section at a time.
struct HostRecord<'a>(&'a JsValue);

impl SectionReader for HostRecord<'_> {
    type Error = serde_wasm_bindgen::Error;

    fn read<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Option<T>, Self::Error> {
        let mut value = self.0.clone();
        for key in path {
            if !value.is_object() {
                return Ok(None);
            }
            value = match Reflect::get(&value, &JsValue::from_str(key)) {
                Ok(next) => next,
                Err(_) => return Ok(None),
            };
        }
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value).map(Some)
    }
}

/// Preview bytes at `imgdata.thumbnail.thumb`, if any.
fn thumbnail_bytes(imgdata: &JsValue) -> Option<Vec<u8>> {
    let thumbnail = Reflect::get(imgdata, &JsValue::from_str("thumbnail")).ok()?;
    let thumb = Reflect::get(&thumbnail, &JsValue::from_str("thumb")).ok()?;
    if thumb.is_undefined() || thumb.is_null() {
        return None;
    }
    bytes_from_js(&thumb).ok()
}

impl RawEngine for HostEngine {
    fn recycle(&mut self) {
        if let Some(image) = self.rendered.take() {
            self.release(&image);
        }
        self.host.recycle();
        self.record = ImageData::default();
    }

    fn open_buffer(&mut self, data: &[u8], params: &DecodeParams) -> i32 {
        let params = match to_js(params) {
            Ok(params) => params,
            Err(_) => return status::UNSPECIFIED_ERROR,
        };
        let code = self.host.open_buffer(data, &params);
        self.refresh();
        code
    }

    fn unpack(&mut self, data: &[u8]) -> i32 {
        let code = self.host.unpack(data);
        self.refresh();
        code
    }

    fn dcraw_process(&mut self) -> i32 {
        let code = self.host.dcraw_process();
        self.refresh();
        code
    }

    fn make_mem_image(&mut self) -> Option<MemImage> {
        let value = self.host.make_mem_image();
        if value.is_undefined() || value.is_null() {
            return None;
        }

        let field = |key: &str| number_field(&value, key).unwrap_or(0.0) as u32;
        let Some(mut data) = Reflect::get(&value, &JsValue::from_str("data"))
            .ok()
            .and_then(|data| bytes_from_js(&data).ok())
        else {
            console::warn_1(&"rawbridge: rendered image has no pixel data".into());
            self.release(&value);
            return None;
        };
        if let Some(size) = number_field(&value, "dataSize") {
            data.truncate(size as usize);
        }

        let image = MemImage {
            width: field("width"),
            height: field("height"),
            colors: field("colors"),
            bits: field("bits"),
            data,
        };
        self.rendered = Some(value);
        Some(image)
    }

    fn clear_mem(&mut self, image: MemImage) {
        drop(image);
        if let Some(handle) = self.rendered.take() {
            self.release(&handle);
        }
    }

    fn unpack_thumb(&mut self, data: &[u8]) -> i32 {
        let code = self.host.unpack_thumb(data);
        self.refresh();
        code
    }

    fn image_data(&self) -> &ImageData {
        &self.record
    }
}
