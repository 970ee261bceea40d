//! Session controller
//!
//! Owns the one [`TransferSession`] for the life of the device and ties
//! the pieces together: chunks route in through [`ChunkSink`], and the
//! owner's polling loop drives [`Receiver::poll`] to consume terminal
//! phases.
//!
//! Dispatch is deferred: `on_chunk` only mutates the session, because
//! the panel commit takes hundreds of milliseconds and must not run in
//! the radio stack's delivery context. Between a transfer reaching a
//! terminal phase and `poll` resetting the session, `on_chunk` sits in
//! its terminal no-op branch, so a new header can never be parsed over
//! a buffer that is still being composited.

use crate::compositor::{composite, CompositeError};
use crate::session::{Phase, TransferFault, TransferSession};
use crate::traits::{ChunkSink, GrayPanel, PanelError};
use crate::validate::{validate, ValidationError};

/// Background grey painted behind every image (e-paper white)
const BACKGROUND: u8 = 0xFF;

/// Everything that can go wrong between first chunk and panel refresh
///
/// All variants are local to one transfer and recovered by resetting
/// the session; none are retried. [`Panel`](TransferError::Panel) is
/// the one collaborator-level class, reported upward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// Reassembly faulted (overflow, bad dimensions)
    Transfer(TransferFault),
    /// Completed transfer failed validation
    Validation(ValidationError),
    /// Compositor precondition violated
    Composite(CompositeError),
    /// Panel driver failure during commit
    Panel(PanelError),
}

impl From<TransferFault> for TransferError {
    fn from(fault: TransferFault) -> Self {
        TransferError::Transfer(fault)
    }
}

impl From<ValidationError> for TransferError {
    fn from(error: ValidationError) -> Self {
        TransferError::Validation(error)
    }
}

impl From<CompositeError> for TransferError {
    fn from(error: CompositeError) -> Self {
        TransferError::Composite(error)
    }
}

impl From<PanelError> for TransferError {
    fn from(error: PanelError) -> Self {
        TransferError::Panel(error)
    }
}

/// Summary of a successfully displayed transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayedImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Image receiver: one session, reused across every transfer
///
/// `CAP` sizes the transfer buffer; device code picks the panel area
/// halved (two pixels per byte), tests use small buffers.
#[derive(Debug, Default)]
pub struct Receiver<const CAP: usize> {
    session: TransferSession<CAP>,
}

impl<const CAP: usize> Receiver<CAP> {
    /// Create an idle receiver
    pub fn new() -> Self {
        Self {
            session: TransferSession::new(),
        }
    }

    /// Read-only access to the session, for status reporting
    pub fn session(&self) -> &TransferSession<CAP> {
        &self.session
    }

    /// Whether a transfer is currently accumulating
    pub fn receiving(&self) -> bool {
        matches!(
            self.session.phase(),
            Phase::HeaderReceived | Phase::Receiving
        )
    }

    /// Consume a terminal phase, if one is pending
    ///
    /// Called from the owner's polling loop. On `Complete` this runs
    /// validate, composites onto a white background, and commits the
    /// panel at the current ambient temperature; on `Error` it surfaces
    /// the fault. Either way the session is reset to `Idle` before
    /// returning, re-arming `on_chunk` for the next transfer. Returns
    /// `None` while there is nothing to consume.
    pub fn poll<P: GrayPanel>(
        &mut self,
        panel: &mut P,
    ) -> Option<Result<DisplayedImage, TransferError>> {
        let outcome = match self.session.phase() {
            Phase::Complete => Self::display(&self.session, panel),
            Phase::Error(fault) => Err(fault.into()),
            _ => return None,
        };

        self.session.reset();
        Some(outcome)
    }

    /// Validate and composite a completed session
    ///
    /// The framebuffer is untouched unless validation passes.
    fn display<P: GrayPanel>(
        session: &TransferSession<CAP>,
        panel: &mut P,
    ) -> Result<DisplayedImage, TransferError> {
        let image = validate(session, panel.width(), panel.height())?;

        panel.fill(BACKGROUND);
        composite(&image, panel)?;

        let temperature = panel.ambient_temperature();
        panel.commit(temperature)?;

        Ok(DisplayedImage {
            width: image.width,
            height: image.height,
        })
    }
}

impl<const CAP: usize> ChunkSink for Receiver<CAP> {
    fn on_chunk(&mut self, chunk: &[u8]) {
        self.session.on_chunk(chunk);
    }
}

// Tests for this module live in tests/ as integration tests:
// grisaille-panel depends on this crate, so a unit test build
// would instantiate the GrayPanel trait a second time and
// Framebuffer would not implement it.
