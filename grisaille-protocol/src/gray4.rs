//! Packed 4-bit grayscale helpers.
//!
//! Two adjacent pixels share one payload byte: the first pixel occupies
//! the high nibble, the second the low nibble. Sixteen grey levels on
//! the wire expand to the full 8-bit range on the panel.

/// Pixels packed into one payload byte
pub const PIXELS_PER_BYTE: usize = 2;

/// Extract the first (high-nibble) pixel of a packed byte
pub const fn high(byte: u8) -> u8 {
    byte >> 4
}

/// Extract the second (low-nibble) pixel of a packed byte
pub const fn low(byte: u8) -> u8 {
    byte & 0x0F
}

/// Pack two 4-bit pixels into one byte, first pixel in the high nibble
///
/// Values above 15 are masked to their low 4 bits.
pub const fn pack(first: u8, second: u8) -> u8 {
    ((first & 0x0F) << 4) | (second & 0x0F)
}

/// Expand a 4-bit grey level to 8 bits
///
/// Replicates the nibble into both halves of the byte so 0x0 maps to
/// 0x00 and 0xF maps to 0xFF, preserving the full dynamic range.
pub const fn expand(nibble: u8) -> u8 {
    let n = nibble & 0x0F;
    (n << 4) | n
}

/// Packed payload length in bytes for an image of the given dimensions
///
/// The pixel count is computed in 64 bits so hostile headers cannot
/// wrap the multiply on 32-bit targets; `None` means the payload would
/// not even fit the address space.
pub fn packed_len(width: u32, height: u32) -> Option<usize> {
    let pixels = width as u64 * height as u64;
    usize::try_from(pixels / PIXELS_PER_BYTE as u64).ok()
}
