//! In-memory grayscale panel for Grisaille
//!
//! Provides [`Framebuffer`], an owned 8-bit grey canvas implementing
//! `grisaille_core::GrayPanel`. It backs host-side simulation and the
//! core's own tests, and doubles as the reference for what a real
//! panel driver implementation owes the core.
//!
//! Hardware drivers (epdiy-style e-paper stacks) live outside this
//! workspace and implement the same trait over their own framebuffer.

#![no_std]
#![deny(unsafe_code)]

pub mod framebuffer;

pub use framebuffer::Framebuffer;
