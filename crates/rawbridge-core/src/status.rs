//! Engine status codes.
//!
//! The engine reports the outcome of every stage as a signed integer using
//! LibRaw's numbering: zero is success, small negative values are
//! recoverable call errors and values below -100000 are fatal.

/// Stage completed successfully.
pub const SUCCESS: i32 = 0;
pub const UNSPECIFIED_ERROR: i32 = -1;
pub const FILE_UNSUPPORTED: i32 = -2;
pub const REQUEST_FOR_NONEXISTENT_IMAGE: i32 = -3;
pub const OUT_OF_ORDER_CALL: i32 = -4;
pub const NO_THUMBNAIL: i32 = -5;
pub const UNSUPPORTED_THUMBNAIL: i32 = -6;
pub const INPUT_CLOSED: i32 = -7;
pub const NOT_IMPLEMENTED: i32 = -8;
pub const REQUEST_FOR_NONEXISTENT_THUMBNAIL: i32 = -9;
pub const UNSUFFICIENT_MEMORY: i32 = -100007;
pub const DATA_ERROR: i32 = -100008;
pub const IO_ERROR: i32 = -100009;
pub const CANCELLED_BY_CALLBACK: i32 = -100010;
pub const BAD_CROP: i32 = -100011;
pub const TOO_BIG: i32 = -100012;
pub const MEMPOOL_OVERFLOW: i32 = -100013;

/// Returns true if `code` reports success.
#[inline]
pub fn is_success(code: i32) -> bool {
    code == SUCCESS
}

/// Returns true if `code` leaves the engine unusable until the next open.
#[inline]
pub fn is_fatal(code: i32) -> bool {
    code < -100000
}

/// Human-readable description of an engine status code.
pub fn message(code: i32) -> &'static str {
    match code {
        SUCCESS => "No error",
        UNSPECIFIED_ERROR => "Unspecified error",
        FILE_UNSUPPORTED => "Unsupported file format or not RAW file",
        REQUEST_FOR_NONEXISTENT_IMAGE => "Request for nonexisting image number",
        OUT_OF_ORDER_CALL => "Out of order call of libraw function",
        NO_THUMBNAIL => "No thumbnail in file",
        UNSUPPORTED_THUMBNAIL => "Unsupported thumbnail format",
        INPUT_CLOSED => "No input stream, or input stream closed",
        NOT_IMPLEMENTED => "Decoder not implemented for this data format",
        REQUEST_FOR_NONEXISTENT_THUMBNAIL => "Request for nonexisting thumbnail number",
        UNSUFFICIENT_MEMORY => "Unsufficient memory",
        DATA_ERROR => "Corrupted data or unexpected EOF",
        IO_ERROR => "Input/output error",
        CANCELLED_BY_CALLBACK => "Cancelled by user callback",
        BAD_CROP => "Bad crop box",
        TOO_BIG => "Image too big for processing",
        MEMPOOL_OVERFLOW => "Libraw internal memory pool overflow",
        _ => "Unknown error code",
    }
}
