//! Rawbridge WASM - WebAssembly bindings for the RAW decoding bridge
//!
//! This crate exposes a [`rawbridge_core::Session`] to JavaScript as the
//! `LibRaw` class, driving a RAW engine supplied by the host.
//!
//! # Module Structure
//!
//! - `engine` - Import of the host engine and its [`RawEngine`](rawbridge_core::RawEngine) adapter
//! - `convert` - Buffer, settings, pixel and error conversions
//! - `session` - The `LibRaw` class
//!
//! # Usage
//!
//! ```typescript
//! import init, { LibRaw } from '@rawbridge/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const raw = new LibRaw(engine);
//! raw.open(bytes, { outputBps: 16, useCameraWb: true });
//! const { width, height, data } = raw.imageData();
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod engine;
mod session;

pub use engine::{HostEngine, JsRawEngine};
pub use session::JsLibRaw;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Every settings key `LibRaw.open` understands.
#[wasm_bindgen(js_name = settingsKeys)]
pub fn settings_keys() -> Vec<String> {
    rawbridge_core::settings::recognized_keys()
        .map(str::to_string)
        .collect()
}
