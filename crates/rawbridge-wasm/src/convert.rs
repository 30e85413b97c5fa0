//! Conversions between JavaScript values and bridge types.
//!
//! Host buffers may arrive as an `ArrayBuffer`, a `Uint8Array`, or any other
//! `ArrayBufferView`; all of them are normalised to a byte window and copied
//! into WASM memory once. Pixel payloads go back out as a fresh
//! `Uint8Array` or `Uint16Array`, never as a view into WASM memory.

use js_sys::{Array, ArrayBuffer, Object, Reflect, Uint16Array, Uint8Array};
use rawbridge_core::settings::recognized_keys;
use rawbridge_core::{BridgeError, PixelData};
use serde_json::{Map, Number, Value};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Copy a JS buffer-like value into an owned byte vector.
///
/// # Errors
///
/// Returns an error if `value` is neither an `ArrayBuffer` nor an
/// `ArrayBufferView`.
pub fn bytes_from_js(value: &JsValue) -> Result<Vec<u8>, JsValue> {
    if let Some(bytes) = value.dyn_ref::<Uint8Array>() {
        return Ok(bytes.to_vec());
    }
    if let Some(buffer) = value.dyn_ref::<ArrayBuffer>() {
        return Ok(Uint8Array::new(buffer).to_vec());
    }
    if ArrayBuffer::is_view(value) {
        let buffer = Reflect::get(value, &JsValue::from_str("buffer"))?;
        let offset = number_field(value, "byteOffset").unwrap_or(0.0) as u32;
        let length = number_field(value, "byteLength").unwrap_or(0.0) as u32;
        return Ok(Uint8Array::new_with_byte_offset_and_length(&buffer, offset, length).to_vec());
    }
    Err(JsValue::from_str(
        "Expected an ArrayBuffer or ArrayBufferView for the RAW buffer",
    ))
}

/// Copy a pixel payload into a new typed array.
pub fn pixels_to_js(data: &PixelData) -> JsValue {
    match data {
        PixelData::U8(bytes) => Uint8Array::from(bytes.as_slice()).into(),
        PixelData::U16(samples) => Uint16Array::from(samples.as_slice()).into(),
    }
}

/// Read the recognized keys of a settings object as a JSON tree.
///
/// Each key converts on its own: a key whose value cannot be represented is
/// left out and the rest still apply. Typed arrays are read element by
/// element. Anything other than an object means "no settings".
pub fn settings_from_js(value: &JsValue) -> Option<Value> {
    if !value.is_object() {
        return None;
    }
    let mut settings = Map::new();
    for key in recognized_keys() {
        let Ok(field) = Reflect::get(value, &JsValue::from_str(key)) else {
            continue;
        };
        if let Some(field) = setting_from_js(&field) {
            settings.insert(key.to_string(), field);
        }
    }
    Some(Value::Object(settings))
}

fn setting_from_js(value: &JsValue) -> Option<Value> {
    if value.is_undefined() {
        return None;
    }
    if ArrayBuffer::is_view(value) {
        return Array::from(value)
            .iter()
            .map(|item| item.as_f64().and_then(Number::from_f64).map(Value::Number))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array);
    }
    serde_wasm_bindgen::from_value(value.clone()).ok()
}

/// Serialize into a plain JS value. Maps become ordinary objects.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert result: {}", e)))
}

/// A JS `Error` carrying the stage name and the engine status code.
pub fn error_to_js(err: BridgeError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(err.kind());
    let _ = Reflect::set(
        &js_err,
        &JsValue::from_str("code"),
        &JsValue::from(err.code()),
    );
    js_err.into()
}

/// Numeric property of a JS object, if present.
pub fn number_field(value: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Build a plain object from key/value pairs.
pub fn object_from(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object.into())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::{DataView, Float32Array, Function, Int32Array, Uint32Array};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_bytes_from_uint8array() {
        let array = Uint8Array::from(&[1u8, 2, 3][..]);
        assert_eq!(bytes_from_js(&array.into()).unwrap(), vec![1, 2, 3]);
    }

    #[wasm_bindgen_test]
    fn test_bytes_from_array_buffer() {
        let array = Uint8Array::from(&[4u8, 5][..]);
        assert_eq!(bytes_from_js(&array.buffer().into()).unwrap(), vec![4, 5]);
    }

    #[wasm_bindgen_test]
    fn test_bytes_from_offset_view() {
        let source = Uint8Array::from(&[0u8, 1, 2, 3, 4, 5, 6, 7][..]);
        let view = DataView::new(&source.buffer(), 2, 4);
        assert_eq!(bytes_from_js(&view.into()).unwrap(), vec![2, 3, 4, 5]);
    }

    #[wasm_bindgen_test]
    fn test_bytes_from_wider_typed_array() {
        let words = Uint32Array::from(&[0x0403_0201u32][..]);
        assert_eq!(bytes_from_js(&words.into()).unwrap().len(), 4);
    }

    #[wasm_bindgen_test]
    fn test_bytes_from_non_buffer_fails() {
        assert!(bytes_from_js(&JsValue::from_str("raw")).is_err());
        assert!(bytes_from_js(&JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_pixels_element_width() {
        let out = pixels_to_js(&PixelData::U16(vec![1, 2, 3]));
        let typed = out.dyn_into::<Uint16Array>().unwrap();
        assert_eq!(typed.length(), 3);

        let out = pixels_to_js(&PixelData::U8(vec![9; 5]));
        assert!(out.is_instance_of::<Uint8Array>());
    }

    #[wasm_bindgen_test]
    fn test_settings_absent() {
        assert!(settings_from_js(&JsValue::UNDEFINED).is_none());
        assert!(settings_from_js(&JsValue::NULL).is_none());
    }

    #[wasm_bindgen_test]
    fn test_settings_object() {
        let object = object_from(&[
            ("halfSize", JsValue::TRUE),
            ("greybox", Array::of3(&1.into(), &2.into(), &3.into()).into()),
        ])
        .unwrap();
        let settings = settings_from_js(&object).unwrap();
        assert_eq!(settings["halfSize"], serde_json::Value::Bool(true));
        assert_eq!(settings["greybox"].as_array().map(Vec::len), Some(3));
    }

    #[wasm_bindgen_test]
    fn test_settings_survive_unconvertible_keys() {
        let object = object_from(&[
            ("halfSize", JsValue::from(1)),
            ("userMul", Float32Array::from(&[1.5f32, 1.0, 2.0, 1.0][..]).into()),
            ("greybox", Int32Array::from(&[0, 0, 64, 64][..]).into()),
            ("noAutoBright", Function::new_no_args("").into()),
            ("cb", Function::new_no_args("").into()),
        ])
        .unwrap();
        let settings = settings_from_js(&object).unwrap();
        assert_eq!(settings["halfSize"].as_f64(), Some(1.0));
        assert_eq!(settings["userMul"], serde_json::json!([1.5, 1.0, 2.0, 1.0]));
        assert_eq!(settings["greybox"], serde_json::json!([0.0, 0.0, 64.0, 64.0]));
        assert!(settings.get("noAutoBright").is_none());
        assert!(settings.get("cb").is_none());

        let mut params = rawbridge_core::DecodeParams::default();
        assert_eq!(rawbridge_core::apply_settings(&mut params, Some(&settings)), 3);
        assert_eq!(params.half_size, 1);
        assert_eq!(params.user_mul, [1.5, 1.0, 2.0, 1.0]);
        assert_eq!(params.greybox, [0, 0, 64, 64]);
    }

    #[wasm_bindgen_test]
    fn test_settings_non_object() {
        assert!(settings_from_js(&JsValue::from(3)).is_none());
        assert!(settings_from_js(&JsValue::from_str("halfSize")).is_none());
    }

    #[wasm_bindgen_test]
    fn test_error_carries_code() {
        let err = error_to_js(BridgeError::Thumbnail { code: -5 });
        assert_eq!(number_field(&err, "code"), Some(-5.0));
        let name = Reflect::get(&err, &JsValue::from_str("name")).unwrap();
        assert_eq!(name.as_string().as_deref(), Some("ThumbnailError"));
    }
}
