//! Compositor: unpack, scale, center, blit
//!
//! Takes a validated packed-gray4 image and writes 8-bit grey pixels
//! into the panel framebuffer. The image is scaled up uniformly by the
//! largest factor that fits the panel (validation guarantees it fits at
//! least 1:1), centered, and nibble-expanded to the full 8-bit range.
//!
//! The pass is deterministic and allocation-free: identical inputs
//! always produce an identical framebuffer.

use grisaille_protocol::gray4;

use crate::traits::GrayPanel;
use crate::validate::ValidatedImage;

/// Errors reported by the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompositeError {
    /// The validated view is internally inconsistent (zero dimensions
    /// or a payload that does not match them)
    Precondition,
}

/// Composite a validated image into the panel framebuffer
///
/// The scale is the real-valued `min(panel_w / w, panel_h / h)`;
/// placement offsets center the scaled image. Each source pixel fills
/// the target block `[floor(x*s), floor((x+1)*s))` per axis, which
/// agrees with the nearest-neighbor origin `floor(x*s)` and leaves no
/// gaps at scales above one. Target coordinates outside the panel are
/// clipped silently; a partially on-screen image is not an error.
pub fn composite<P: GrayPanel>(
    image: &ValidatedImage<'_>,
    panel: &mut P,
) -> Result<(), CompositeError> {
    if image.width == 0 || image.height == 0 {
        return Err(CompositeError::Precondition);
    }
    if gray4::packed_len(image.width, image.height) != Some(image.data.len()) {
        return Err(CompositeError::Precondition);
    }

    let panel_w = panel.width();
    let panel_h = panel.height();

    let scale_x = panel_w as f32 / image.width as f32;
    let scale_y = panel_h as f32 / image.height as f32;
    let scale = if scale_x < scale_y { scale_x } else { scale_y };

    // Rounded scaled extent; saturate in case rounding lands one past
    // the panel edge
    let scaled_w = (image.width as f32 * scale + 0.5) as u32;
    let scaled_h = (image.height as f32 * scale + 0.5) as u32;
    let offset_x = panel_w.saturating_sub(scaled_w) / 2;
    let offset_y = panel_h.saturating_sub(scaled_h) / 2;

    // Pixel arithmetic stays in 64 bits so the count cannot wrap a
    // 32-bit usize
    let pair = gray4::PIXELS_PER_BYTE as u64;
    let pixel_count = image.width as u64 * image.height as u64;
    for index in 0..pixel_count {
        let byte = match image.data.get((index / pair) as usize) {
            Some(&byte) => byte,
            // Odd pixel count: the trailing half byte was truncated
            None => break,
        };
        let nibble = if index % pair == 0 {
            gray4::high(byte)
        } else {
            gray4::low(byte)
        };
        let grey = gray4::expand(nibble);

        let x = (index % image.width as u64) as u32;
        let y = (index / image.width as u64) as u32;

        // Truncating casts floor the non-negative products
        let x_start = offset_x + (x as f32 * scale) as u32;
        let x_end = (offset_x + ((x + 1) as f32 * scale) as u32).min(panel_w);
        let y_start = offset_y + (y as f32 * scale) as u32;
        let y_end = (offset_y + ((y + 1) as f32 * scale) as u32).min(panel_h);

        for ty in y_start..y_end {
            for tx in x_start..x_end {
                panel.set_pixel(tx, ty, grey);
            }
        }
    }

    Ok(())
}

// Tests for this module live in tests/ as integration tests:
// grisaille-panel depends on this crate, so a unit test build
// would instantiate the GrayPanel trait a second time and
// Framebuffer would not implement it.
