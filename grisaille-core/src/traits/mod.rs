//! Hardware abstraction traits
//!
//! These traits define the interface between the receive/composite
//! logic and the collaborator layers: the radio stack feeds chunks in
//! through [`ChunkSink`], and pixels go out through [`GrayPanel`].

pub mod panel;
pub mod transport;

pub use panel::{GrayPanel, PanelError};
pub use transport::ChunkSink;
