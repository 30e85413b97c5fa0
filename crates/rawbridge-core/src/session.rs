//! The decode session: one engine, one input buffer, one parameter record.

use serde_json::Value;
use tracing::{debug, warn};

use crate::engine::RawEngine;
use crate::error::{BridgeError, Result};
use crate::marshal::{ingest, ByteView};
use crate::metadata::{self, Metadata};
use crate::pipeline::{self, PipelineState, ProcessedImage, ThumbnailImage};
use crate::settings::{apply_settings, DecodeParams};
use crate::status;

/// A decode session over a single engine.
///
/// The session exclusively owns the engine, the input bytes and the decode
/// parameters. Reopening replaces all three generations of state; dropping
/// the session releases them.
///
/// # Example
///
/// ```ignore
/// let mut session = Session::new(engine);
/// session.open(&raw_bytes, Some(&json!({ "halfSize": true })))?;
/// let meta = session.metadata(false);
/// let image = session.image_data()?;
/// ```
pub struct Session<E: RawEngine> {
    engine: E,
    buffer: Vec<u8>,
    params: DecodeParams,
    state: PipelineState,
}

impl<E: RawEngine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            buffer: Vec::new(),
            params: DecodeParams::default(),
            state: PipelineState::Opened,
        }
    }

    /// Reset the session and open `input` with `settings` overlaid onto the
    /// engine defaults.
    ///
    /// On failure the parameters stay applied but no input is held; the
    /// session can be reopened.
    pub fn open<'a>(
        &mut self,
        input: impl Into<ByteView<'a>>,
        settings: Option<&Value>,
    ) -> Result<()> {
        self.open_owned(ingest(input), settings)
    }

    /// [`Session::open`] for input the caller has already copied.
    pub fn open_owned(&mut self, input: Vec<u8>, settings: Option<&Value>) -> Result<()> {
        self.engine.recycle();
        self.params.reset();
        let applied = apply_settings(&mut self.params, settings);

        self.buffer = input;
        self.state = PipelineState::Opened;

        debug!(bytes = self.buffer.len(), applied, "opening buffer");
        let code = self.engine.open_buffer(&self.buffer, &self.params);
        if !status::is_success(code) {
            warn!(code, "open_buffer failed: {}", status::message(code));
            self.buffer = Vec::new();
            return Err(BridgeError::EngineOpen { code });
        }
        Ok(())
    }

    /// Project the engine's record for the opened file.
    pub fn metadata(&self, full_output: bool) -> Metadata {
        metadata::project(self.engine.image_data(), full_output)
    }

    /// Decode (once) and render the full image. `None` when the engine
    /// cannot render.
    pub fn image_data(&mut self) -> Result<Option<ProcessedImage>> {
        pipeline::image_data(&mut self.engine, &self.buffer, &mut self.state)
    }

    /// Extract the embedded preview.
    pub fn thumbnail_data(&mut self) -> Result<ThumbnailImage> {
        pipeline::thumbnail(&mut self.engine, &self.buffer)
    }

    pub fn params(&self) -> &DecodeParams {
        &self.params
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn is_unpacked(&self) -> bool {
        self.state.is_unpacked()
    }

    /// Bytes of the currently held input.
    pub fn input_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

impl<E: RawEngine> Drop for Session<E> {
    fn drop(&mut self) {
        self.engine.recycle();
        self.buffer = Vec::new();
        self.params.release_strings();
    }
}

impl<E: RawEngine> std::fmt::Debug for Session<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("input_len", &self.buffer.len())
            .field("state", &self.state)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
