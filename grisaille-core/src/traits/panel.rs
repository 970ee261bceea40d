//! Grayscale panel trait
//!
//! Abstracts the e-paper driver: a framebuffer of 8-bit grey pixels
//! plus a slow commit operation that drives the physical panel. The
//! dimensions are the post-rotation logical dimensions.

/// Errors reported by the panel driver
///
/// These are collaborator-level failures. The core reports them upward
/// and never attempts recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// The panel refresh failed
    CommitFailed,
    /// Panel power sequencing fault
    PowerFault,
}

/// Trait for the grayscale display collaborator
///
/// Implementations own the framebuffer; the compositor borrows the
/// panel mutably for the duration of one composite pass and writes
/// pixels through [`set_pixel`](GrayPanel::set_pixel).
pub trait GrayPanel {
    /// Panel width in pixels, after rotation
    fn width(&self) -> u32;

    /// Panel height in pixels, after rotation
    fn height(&self) -> u32;

    /// Set the pixel at (x, y) to an 8-bit grey level (0 = black)
    ///
    /// Coordinates are guaranteed in-bounds by the caller.
    fn set_pixel(&mut self, x: u32, y: u32, grey: u8);

    /// Fill the entire framebuffer with one grey level
    fn fill(&mut self, grey: u8);

    /// Read the ambient temperature in whole degrees Celsius
    ///
    /// E-paper waveform timing depends on temperature; the controller
    /// passes the reading back into [`commit`](GrayPanel::commit).
    fn ambient_temperature(&self) -> i16;

    /// Drive the framebuffer contents onto the physical panel
    ///
    /// This is the only slow operation behind this trait (hundreds of
    /// milliseconds on real hardware).
    fn commit(&mut self, temperature: i16) -> Result<(), PanelError>;
}
