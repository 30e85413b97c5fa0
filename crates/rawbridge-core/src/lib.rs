//! Rawbridge Core - RAW decoding session bridge
//!
//! This crate drives an external RAW decoding engine on behalf of a host:
//! it owns the input buffer and decode parameters for a session, overlays
//! loosely-typed settings onto the engine defaults, projects the engine's
//! decode record into a metadata tree, and copies rendered pixels and
//! embedded previews back out.
//!
//! The engine itself is reached through [`RawEngine`]; nothing here decodes
//! pixels.

pub mod engine;
pub mod error;
pub mod marshal;
pub mod metadata;
pub mod pipeline;
pub mod session;
pub mod settings;
pub mod status;

pub use engine::{ImageData, MemImage, RawEngine};
pub use error::{BridgeError, Result};
pub use marshal::{emit, ingest, ByteView, PixelData};
pub use metadata::{project, Brand, MakerNotes, Metadata, ThumbnailFormat};
pub use pipeline::{PipelineState, ProcessedImage, ThumbnailImage};
pub use session::Session;
pub use settings::{apply_settings, DecodeParams, ParamString};
