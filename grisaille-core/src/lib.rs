//! Board-agnostic core logic for the Grisaille picture frame
//!
//! This crate contains all receive-and-display logic that does not
//! depend on a specific radio stack or panel driver:
//!
//! - Hardware abstraction traits (grayscale panel, chunk sink)
//! - Transfer session and chunk reassembly state machine
//! - Validation of a completed transfer against panel limits
//! - Compositor (unpack, scale, center, blit)
//! - Session controller tying the above together
//!
//! The BLE transport delivers ordered byte chunks through the
//! [`traits::ChunkSink`] seam; the panel driver sits behind
//! [`traits::GrayPanel`]. Everything here runs the same on host and
//! target.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod compositor;
pub mod controller;
pub mod session;
pub mod traits;
pub mod validate;

pub use compositor::CompositeError;
pub use controller::{DisplayedImage, Receiver, TransferError};
pub use session::{Phase, TransferFault, TransferSession};
pub use traits::{ChunkSink, GrayPanel, PanelError};
pub use validate::{ValidatedImage, ValidationError};
