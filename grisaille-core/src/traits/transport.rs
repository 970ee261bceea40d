//! Transport-facing chunk sink trait

/// Trait for consuming ordered byte chunks from the transport
///
/// The radio stack's write handler calls [`on_chunk`](ChunkSink::on_chunk)
/// once per delivery event, in arrival order, never concurrently with
/// itself. The core implements this trait; a thin adapter outside the
/// core hooks it to the actual stack.
pub trait ChunkSink {
    /// Consume one chunk of transfer bytes
    ///
    /// Must only mutate session state; anything slow belongs in the
    /// owner's polling context, not the delivery context.
    fn on_chunk(&mut self, chunk: &[u8]);
}
