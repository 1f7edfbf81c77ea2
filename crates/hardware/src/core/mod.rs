//! Core processor implementation.
//!
//! This module contains the CPU: architectural state (register file and
//! flags), the ALU, and the engine that runs the fetch-decode-execute loop.

/// Architectural state (register file, comparison flags).
pub mod arch;

/// CPU core and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
