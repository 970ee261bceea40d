//! Transfer session and chunk reassembly
//!
//! One [`TransferSession`] exists per device and is reused for every
//! transfer. It is mutated only by chunk arrival and by the controller's
//! reset after a terminal phase has been consumed.

pub mod transfer;

pub use transfer::{Phase, TransferFault, TransferSession};
