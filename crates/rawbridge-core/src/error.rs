//! Error types for bridge operations.

use thiserror::Error;

use crate::status;

/// Failures reported by the decoding engine, tagged with the stage that
/// produced them.
///
/// Every variant carries the engine's native status code. Settings and
/// metadata access never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The engine rejected the input buffer.
    #[error("open_buffer() failed with code {code}: {}", status::message(*.code))]
    EngineOpen { code: i32 },

    /// Raw sensor data could not be unpacked.
    #[error("unpack() failed with code {code}: {}", status::message(*.code))]
    Unpack { code: i32 },

    /// Demosaicing/colour processing failed.
    #[error("dcraw_process() failed with code {code}: {}", status::message(*.code))]
    Process { code: i32 },

    /// The embedded preview could not be extracted.
    #[error("Failed to unpack thumbnail: {} (code {code})", status::message(*.code))]
    Thumbnail { code: i32 },
}

impl BridgeError {
    /// The engine status code carried by this error.
    pub fn code(&self) -> i32 {
        match *self {
            BridgeError::EngineOpen { code }
            | BridgeError::Unpack { code }
            | BridgeError::Process { code }
            | BridgeError::Thumbnail { code } => code,
        }
    }

    /// Stable name of the failing stage, for hosts that dispatch on it.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::EngineOpen { .. } => "EngineOpenError",
            BridgeError::Unpack { .. } => "UnpackError",
            BridgeError::Process { .. } => "ProcessError",
            BridgeError::Thumbnail { .. } => "ThumbnailError",
        }
    }
}

/// Result alias used throughout the bridge.
pub type Result<T> = std::result::Result<T, BridgeError>;
