//! Output device trait.
//!
//! This module defines the `OutputSink` trait implemented by every device the
//! `PRN` instruction can write to. The engine owns its sink as a boxed trait
//! object so callers choose between the console, a capture buffer, or a test mock.

use std::io;

/// Trait for devices that receive values printed by the CPU.
pub trait OutputSink {
    /// Returns a short name for this device (e.g., `"STDOUT"`).
    fn name(&self) -> &'static str;

    /// Emits one register value. Implementations render it as a decimal line.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the device cannot accept the value.
    fn emit(&mut self, value: u8) -> io::Result<()>;
}
