//! Validation of a completed transfer
//!
//! A session in `Complete` phase is checked against the panel limits
//! before the compositor is allowed to touch it. On success the caller
//! gets an immutable view into the session buffer, consumed by exactly
//! one composite pass.

use crate::session::{Phase, TransferSession};

/// Reasons a completed transfer is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// Validation requested before the session reached `Complete`
    NotComplete,
    /// Accumulated length does not match the declared length
    IncompleteData,
    /// Zero or unset width/height
    InvalidDimensions,
    /// Declared dimensions exceed the panel bounds
    ImageTooLarge,
}

/// A validated, read-only view of a received image
///
/// Borrows the session buffer; the session must not be reset while a
/// view is alive, which the borrow checker enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedImage<'a> {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Packed 4-bit grayscale payload, row-major
    pub data: &'a [u8],
}

/// Check a completed session against the panel dimensions
///
/// Checks run in order and stop at the first failure: completion,
/// nonzero dimensions, fits-the-panel.
pub fn validate<const CAP: usize>(
    session: &TransferSession<CAP>,
    panel_width: u32,
    panel_height: u32,
) -> Result<ValidatedImage<'_>, ValidationError> {
    // Defensive: the controller only calls this in Complete phase
    if session.phase() != Phase::Complete {
        return Err(ValidationError::NotComplete);
    }

    if session.received_len() != session.expected_len() {
        return Err(ValidationError::IncompleteData);
    }

    let (width, height) = session.dimensions();
    if width == 0 || height == 0 {
        return Err(ValidationError::InvalidDimensions);
    }

    if width > panel_width || height > panel_height {
        return Err(ValidationError::ImageTooLarge);
    }

    Ok(ValidatedImage {
        width,
        height,
        data: session.payload(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grisaille_protocol::{gray4, ImageHeader, HEADER_LEN};

    const CAP: usize = 512;
    const PANEL_W: u32 = 32;
    const PANEL_H: u32 = 32;

    fn completed_session(width: u32, height: u32) -> TransferSession<CAP> {
        let mut bytes = std::vec::Vec::new();
        bytes.extend_from_slice(&ImageHeader::new(width, height).encode_to_vec());
        bytes.resize(HEADER_LEN + gray4::packed_len(width, height).unwrap(), 0xF0);

        let mut session = TransferSession::new();
        session.on_chunk(&bytes);
        session
    }

    #[test]
    fn test_accepts_fitting_image() {
        let session = completed_session(16, 8);
        let image = validate(&session, PANEL_W, PANEL_H).unwrap();

        assert_eq!(image.width, 16);
        assert_eq!(image.height, 8);
        assert_eq!(image.data.len(), 64);
    }

    #[test]
    fn test_accepts_exact_panel_size() {
        let session = completed_session(PANEL_W, PANEL_H);
        assert!(validate(&session, PANEL_W, PANEL_H).is_ok());
    }

    #[test]
    fn test_rejects_not_complete() {
        let session = TransferSession::<CAP>::new();
        assert_eq!(
            validate(&session, PANEL_W, PANEL_H),
            Err(ValidationError::NotComplete)
        );

        let mut session = completed_session(16, 8);
        session.reset();
        assert_eq!(
            validate(&session, PANEL_W, PANEL_H),
            Err(ValidationError::NotComplete)
        );
    }

    #[test]
    fn test_rejects_too_wide() {
        let session = completed_session(PANEL_W + 2, 8);
        assert_eq!(
            validate(&session, PANEL_W, PANEL_H),
            Err(ValidationError::ImageTooLarge)
        );
    }

    #[test]
    fn test_rejects_too_tall() {
        let session = completed_session(16, PANEL_H + 2);
        assert_eq!(
            validate(&session, PANEL_W, PANEL_H),
            Err(ValidationError::ImageTooLarge)
        );
    }
}
