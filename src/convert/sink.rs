use crate::foundation::error::{FramepressError, FramepressResult};
use std::io::{self, Write};

/// First capacity a zero-capacity sink grows to.
pub const SINK_INITIAL_CAPACITY: usize = 1024;

/// Multiplier applied on each growth step until the pending write fits.
pub const SINK_GROWTH_FACTOR: usize = 2;

/// Growable in-memory byte sink for streaming encoders.
///
/// Capacity policy (the system's only dynamic-resize algorithm, kept explicit
/// so output determinism and performance are reproducible): a write that does
/// not fit grows capacity from 0 to [`SINK_INITIAL_CAPACITY`], then keeps
/// multiplying by [`SINK_GROWTH_FACTOR`] until the write fits, then appends.
/// Invariant: `len() <= capacity()` at all times.
///
/// Growth allocates fallibly; exhaustion surfaces as an
/// [`io::ErrorKind::OutOfMemory`] write error so a streaming encoder aborts
/// cleanly instead of panicking.
#[derive(Debug, Default)]
pub struct GrowableSink {
    data: Vec<u8>,
    capacity: usize,
}

impl GrowableSink {
    /// Create an empty sink with zero capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink pre-sized to `capacity` bytes, so writes up to that
    /// size trigger no growth.
    pub fn with_capacity(capacity: usize) -> FramepressResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity).map_err(|_| {
            FramepressError::allocation(format!("failed to pre-size sink to {capacity} bytes"))
        })?;
        Ok(Self { data, capacity })
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consume the sink, transferring ownership of the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn grow_to_fit(&mut self, needed: usize) -> io::Result<()> {
        if needed <= self.capacity {
            return Ok(());
        }
        let mut capacity = if self.capacity == 0 {
            SINK_INITIAL_CAPACITY
        } else {
            self.capacity.saturating_mul(SINK_GROWTH_FACTOR)
        };
        while capacity < needed {
            capacity = capacity.saturating_mul(SINK_GROWTH_FACTOR);
        }
        self.data
            .try_reserve_exact(capacity - self.data.len())
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::OutOfMemory,
                    format!("failed to grow sink to {capacity} bytes"),
                )
            })?;
        self.capacity = capacity;
        Ok(())
    }
}

impl Write for GrowableSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.grow_to_fit(self.data.len() + buf.len())?;
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/sink.rs"]
mod tests;
