//! Chunk reassembly state machine
//!
//! Reassembles an image transfer from ordered, unframed byte chunks.
//! The first chunk leads with the 8-byte header; everything after it is
//! payload, accumulated until the declared length is reached.
//!
//! The transport is trusted not to split the header across chunks (it
//! writes the header and the first payload bytes in one MTU), so a
//! first chunk shorter than the header is discarded rather than
//! buffered.

use heapless::Vec;

use grisaille_protocol::{ImageHeader, HEADER_LEN};

/// Faults that end a transfer before it can be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferFault {
    /// Declared payload cannot fit the session buffer
    BufferOverflow,
    /// Header declared a zero-area image
    InvalidDimensions,
}

/// Reassembly phase
///
/// Transitions are monotonic within one transfer; the only backward
/// edges are `Complete -> Idle` and `Error -> Idle` via
/// [`TransferSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the first chunk of a transfer
    Idle,
    /// Header parsed, no payload accumulated yet
    HeaderReceived,
    /// Accumulating payload
    Receiving,
    /// Full payload accumulated; waiting to be consumed
    Complete,
    /// Transfer faulted; chunks ignored until reset
    Error(TransferFault),
}

impl Phase {
    /// Check if this phase ends a transfer (consumed via reset)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Complete | Phase::Error(_))
    }

    /// Check if this is a fault phase
    pub fn is_error(&self) -> bool {
        matches!(self, Phase::Error(_))
    }
}

/// Transfer buffer plus reassembly accounting
///
/// `CAP` is the device constant: large enough for the largest supported
/// image at two pixels per byte (the panel area halved). The session
/// owns its buffer; the validator hands out a read-only view of it for
/// one composite pass.
#[derive(Debug)]
pub struct TransferSession<const CAP: usize> {
    buffer: Vec<u8, CAP>,
    width: u32,
    height: u32,
    expected_len: usize,
    phase: Phase,
}

impl<const CAP: usize> Default for TransferSession<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> TransferSession<CAP> {
    /// Create an idle session
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            width: 0,
            height: 0,
            expected_len: 0,
            phase: Phase::Idle,
        }
    }

    /// Current reassembly phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Declared image dimensions, meaningful once the header is parsed
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Payload bytes accumulated so far
    pub fn received_len(&self) -> usize {
        self.buffer.len()
    }

    /// Payload bytes expected, known once the header is parsed
    pub fn expected_len(&self) -> usize {
        self.expected_len
    }

    /// Read-only view of the accumulated payload
    pub fn payload(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume one chunk of transfer bytes, in arrival order
    ///
    /// In a terminal phase this is a no-op: the window between
    /// completion and the controller's reset is locked so a new header
    /// cannot be parsed over a buffer still being composited.
    pub fn on_chunk(&mut self, chunk: &[u8]) {
        match self.phase {
            Phase::Idle => self.start_transfer(chunk),
            Phase::HeaderReceived | Phase::Receiving => self.append(chunk),
            Phase::Complete | Phase::Error(_) => {}
        }
    }

    /// Return the session to `Idle`, discarding all transfer state
    ///
    /// Idempotent; valid from any phase.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.width = 0;
        self.height = 0;
        self.expected_len = 0;
        self.phase = Phase::Idle;
    }

    /// Parse the header from the first chunk and accumulate any
    /// payload bytes that follow it in the same chunk
    fn start_transfer(&mut self, chunk: &[u8]) {
        let Ok(header) = ImageHeader::decode(chunk) else {
            // Runt first chunk: discard and stay idle. The header is
            // assumed to lead the first chunk; reassembling a split
            // header is a non-goal.
            return;
        };

        self.width = header.width;
        self.height = header.height;

        if !header.has_valid_dimensions() {
            self.phase = Phase::Error(TransferFault::InvalidDimensions);
            return;
        }

        // Checked length: a hostile header can declare more pixels
        // than a 32-bit address space holds
        let expected = match header.payload_len() {
            Some(len) if len <= CAP => len,
            // The declared payload can never fit; fault now, before a
            // single byte lands, instead of at the append that would
            // cross CAP.
            _ => {
                self.phase = Phase::Error(TransferFault::BufferOverflow);
                return;
            }
        };
        if expected == 0 {
            self.phase = Phase::Error(TransferFault::InvalidDimensions);
            return;
        }

        self.expected_len = expected;
        self.phase = Phase::HeaderReceived;

        if chunk.len() > HEADER_LEN {
            self.append(&chunk[HEADER_LEN..]);
        }
    }

    /// Append payload bytes, clipping at the declared length
    ///
    /// A final chunk that overshoots `expected_len` is accepted up to
    /// the declared length; trailing bytes are discarded, not treated
    /// as an overflow.
    fn append(&mut self, bytes: &[u8]) {
        let remaining = self.expected_len - self.buffer.len();
        let take = bytes.len().min(remaining);

        // Cannot fail: expected_len <= CAP is checked at header parse
        let _ = self.buffer.extend_from_slice(&bytes[..take]);

        self.phase = if self.buffer.len() >= self.expected_len {
            Phase::Complete
        } else {
            Phase::Receiving
        };
    }
}
