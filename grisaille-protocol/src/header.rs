//! Transfer header encoding and decoding.
//!
//! The header is the first 8 bytes of a transfer:
//! - Bytes 0-3: image width, unsigned 32-bit little-endian
//! - Bytes 4-7: image height, unsigned 32-bit little-endian
//!
//! Both integers are decoded explicitly from byte slices; raw bytes are
//! never reinterpreted in place.

use heapless::Vec;

use crate::gray4;

/// Length of the transfer header in bytes
pub const HEADER_LEN: usize = 8;

/// Errors that can occur during header parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaderError {
    /// Fewer than [`HEADER_LEN`] bytes available
    Truncated,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// Declared image dimensions from the start of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageHeader {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageHeader {
    /// Create a header with the given dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Decode a header from the leading bytes of the first chunk
    ///
    /// Dimensions are not validated here; a zero width or height is the
    /// session's fault to report, not a malformed header.
    pub fn decode(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() < HEADER_LEN {
            return Err(HeaderError::Truncated);
        }

        let width = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let height = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

        Ok(Self { width, height })
    }

    /// Encode this header into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, HeaderError> {
        if buffer.len() < HEADER_LEN {
            return Err(HeaderError::BufferTooSmall);
        }

        buffer[0..4].copy_from_slice(&self.width.to_le_bytes());
        buffer[4..8].copy_from_slice(&self.height.to_le_bytes());

        Ok(HEADER_LEN)
    }

    /// Encode this header into a heapless Vec
    pub fn encode_to_vec(&self) -> Vec<u8, HEADER_LEN> {
        let mut buffer = [0u8; HEADER_LEN];
        // Cannot fail: the buffer is exactly HEADER_LEN bytes
        let _ = self.encode(&mut buffer);
        Vec::from_slice(&buffer).unwrap_or_default()
    }

    /// Payload length in bytes for these dimensions
    ///
    /// Two pixels pack into one byte; an odd pixel count truncates the
    /// trailing half byte, matching the sender which pads the final
    /// nibble into a whole byte per row pair. `None` when the declared
    /// dimensions are too large for the target's address space.
    pub fn payload_len(&self) -> Option<usize> {
        gray4::packed_len(self.width, self.height)
    }

    /// Whether both dimensions are nonzero
    pub fn has_valid_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
