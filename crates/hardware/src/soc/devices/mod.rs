//! Output Devices.
//!
//! This module contains the `OutputSink` implementations shipped with the CPU:
//! a console that writes to stdout and a shared buffer that captures values
//! for embedding and tests.

/// Stdout console and in-memory capture buffer.
pub mod console;

pub use console::{BufferSink, StdoutSink};
