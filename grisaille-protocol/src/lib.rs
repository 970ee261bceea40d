//! Image Transfer Wire Format
//!
//! This crate defines the byte format used to push an image from a phone
//! or desktop sender to the Grisaille frame over a connection-oriented
//! link (BLE GATT writes in the reference setup). The link delivers
//! ordered, gap-free chunks; the format itself carries no sync bytes or
//! per-chunk framing.
//!
//! # Transfer layout
//!
//! ```text
//! ┌────────────┬─────────────┬──────────────────────────────┐
//! │ WIDTH      │ HEIGHT      │ PAYLOAD                      │
//! │ u32 LE     │ u32 LE      │ width*height/2 packed bytes  │
//! └────────────┴─────────────┴──────────────────────────────┘
//! ```
//!
//! The header occupies the first 8 bytes of the first chunk; the payload
//! is packed 4-bit grayscale, two pixels per byte with the first pixel
//! in the high nibble, row-major, and may span any number of chunks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod gray4;
pub mod header;
pub mod link;

pub use header::{HeaderError, ImageHeader, HEADER_LEN};
