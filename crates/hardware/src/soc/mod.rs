//! System-on-Chip (SoC) Components.
//!
//! This module organizes the storage and I/O the CPU core is attached to:
//! the byte-addressed memory array and the output sink that receives
//! `PRN` values.

/// Output devices (stdout console and capture buffer).
pub mod devices;

/// Byte-addressed main memory.
pub mod memory;

/// Device trait definitions for CPU output.
pub mod traits;

pub use memory::Memory;
pub use traits::OutputSink;
