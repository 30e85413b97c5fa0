//! Scripted engine used by the session tests.

#![allow(dead_code)]

use rawbridge_core::engine::{ImageData, MemImage, RawEngine};
use rawbridge_core::settings::DecodeParams;
use rawbridge_core::status;

/// An engine whose stage results are fixed up front and whose calls are
/// counted.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    pub record: ImageData,
    pub open_code: i32,
    pub unpack_code: i32,
    pub process_code: i32,
    pub thumb_code: i32,
    pub thumb: Option<Vec<u8>>,
    pub render: Option<MemImage>,

    pub recycles: usize,
    pub opens: usize,
    pub unpacks: usize,
    pub processes: usize,
    pub renders: usize,
    pub cleared: usize,
    pub thumb_calls: usize,
    /// Input and parameters seen by the last open call.
    pub last_input: Vec<u8>,
    pub last_params: Option<DecodeParams>,
}

impl ScriptedEngine {
    pub fn with_make(make: &str) -> Self {
        let mut engine = Self::default();
        engine.record.idata.make = make.to_string();
        engine.record.idata.model = "Test Body".to_string();
        engine.record.sizes.width = 6000;
        engine.record.sizes.height = 4000;
        engine.record.sizes.raw_width = 6048;
        engine.record.sizes.raw_height = 4024;
        engine
    }

    pub fn rgb8(width: u32, height: u32) -> MemImage {
        MemImage {
            width,
            height,
            colors: 3,
            bits: 8,
            data: (0..width * height * 3).map(|i| i as u8).collect(),
        }
    }
}

impl RawEngine for ScriptedEngine {
    fn recycle(&mut self) {
        self.recycles += 1;
    }

    fn open_buffer(&mut self, data: &[u8], params: &DecodeParams) -> i32 {
        self.opens += 1;
        self.last_input = data.to_vec();
        self.last_params = Some(params.clone());
        self.open_code
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
        self.renders += 1;
        self.render.clone()
    }

    fn clear_mem(&mut self, _image: MemImage) {
        self.cleared += 1;
    }

    fn unpack_thumb(&mut self, _data: &[u8]) -> i32 {
        self.thumb_calls += 1;
        if status::is_success(self.thumb_code) {
            self.record.thumbnail.thumb = self.thumb.clone();
        }
        self.thumb_code
    }

    fn image_data(&self) -> &ImageData {
        &self.record
    }
}
