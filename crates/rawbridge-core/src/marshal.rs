//! Buffer marshalling between the host and the engine.
//!
//! Input bytes are copied once into a buffer owned by the session. Engine
//! output is copied out into a fresh [`PixelData`] whose element width
//! follows the bit depth, so nothing returned to the host aliases engine
//! memory.

/// A window into a host byte buffer: the whole buffer, or a typed-array view
/// with an offset and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    buffer: &'a [u8],
    byte_offset: usize,
    byte_length: usize,
}

impl<'a> ByteView<'a> {
    /// View `byte_length` bytes of `buffer` starting at `byte_offset`.
    ///
    /// Out-of-range offsets and lengths are clamped to the buffer.
    pub fn new(buffer: &'a [u8], byte_offset: usize, byte_length: usize) -> Self {
        Self {
            buffer,
            byte_offset,
            byte_length,
        }
    }

    /// The viewed bytes.
    pub fn bytes(&self) -> &'a [u8] {
        let start = self.byte_offset.min(self.buffer.len());
        let end = start
            .saturating_add(self.byte_length)
            .min(self.buffer.len());
        &self.buffer[start..end]
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::new(buffer, 0, buffer.len())
    }
}

impl<'a> From<&'a Vec<u8>> for ByteView<'a> {
    fn from(buffer: &'a Vec<u8>) -> Self {
        Self::from(buffer.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(buffer: &'a [u8; N]) -> Self {
        Self::from(buffer.as_slice())
    }
}

/// Copy a host buffer into a contiguous owned byte vector.
pub fn ingest<'a>(view: impl Into<ByteView<'a>>) -> Vec<u8> {
    view.into().bytes().to_vec()
}

/// Pixel payload handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelData {
    /// 8-bit samples (and any non-16-bit payload, such as JPEG bytes).
    U8(Vec<u8>),
    /// 16-bit samples in native byte order.
    U16(Vec<u16>),
}

impl PixelData {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            PixelData::U8(v) => v.len(),
            PixelData::U16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the payload in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            PixelData::U8(v) => v.len(),
            PixelData::U16(v) => v.len() * 2,
        }
    }

    /// Element width in bits.
    pub fn element_bits(&self) -> u32 {
        match self {
            PixelData::U8(_) => 8,
            PixelData::U16(_) => 16,
        }
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            PixelData::U8(v) => Some(v),
            PixelData::U16(_) => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            PixelData::U16(v) => Some(v),
            PixelData::U8(_) => None,
        }
    }
}

/// Copy `byte_length` bytes of engine output into a typed payload.
///
/// With `bits == 16` the bytes are reinterpreted as `byte_length / 2`
/// native-endian `u16` samples; a trailing odd byte is dropped. Any other
/// depth yields raw bytes. `byte_length` is clamped to `data`.
pub fn emit(bits: u32, byte_length: usize, data: &[u8]) -> PixelData {
    let bytes = &data[..byte_length.min(data.len())];
    if bits == 16 {
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
            .collect();
        PixelData::U16(samples)
    } else {
        PixelData::U8(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_whole_buffer() {
        let bytes = [1u8, 2, 3, 4];
        assert_eq!(ingest(&bytes), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ingest_view_with_offset() {
        let bytes = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let view = ByteView::new(&bytes, 2, 3);
        assert_eq!(ingest(view), vec![2, 3, 4]);
    }

    #[test]
    fn test_ingest_empty() {
        let bytes: [u8; 0] = [];
        assert!(ingest(&bytes).is_empty());
    }

    #[test]
    fn test_view_clamps_out_of_range() {
        let bytes = [9u8, 8, 7];
        assert_eq!(ByteView::new(&bytes, 1, 100).bytes(), &[8, 7]);
        assert!(ByteView::new(&bytes, 10, 2).is_empty());
        assert_eq!(ByteView::new(&bytes, 0, usize::MAX).len(), 3);
    }

    #[test]
    fn test_emit_8bit() {
        let data = [10u8, 20, 30];
        let out = emit(8, 3, &data);
        assert_eq!(out, PixelData::U8(vec![10, 20, 30]));
        assert_eq!(out.element_bits(), 8);
    }

    #[test]
    fn test_emit_16bit() {
        let a = 0x1234u16.to_ne_bytes();
        let b = 0xFFEEu16.to_ne_bytes();
        let data = [a[0], a[1], b[0], b[1]];
        let out = emit(16, 4, &data);
        assert_eq!(out.as_u16(), Some(&[0x1234u16, 0xFFEE][..]));
        assert_eq!(out.len(), 2);
        assert_eq!(out.byte_len(), 4);
    }

    #[test]
    fn test_emit_16bit_odd_length_drops_tail() {
        let out = emit(16, 5, &[0, 0, 0, 0, 7]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_emit_is_a_copy() {
        let mut data = vec![1u8, 2, 3];
        let out = emit(8, data.len(), &data);
        data[0] = 99;
        assert_eq!(out.as_u8(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_emit_non_16_depth_is_bytes() {
        assert!(matches!(emit(12, 2, &[1, 2]), PixelData::U8(_)));
        assert!(matches!(emit(0, 0, &[]), PixelData::U8(_)));
    }
}
