//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU, which performs the
//! register-to-register arithmetic.

/// Arithmetic Logic Unit for byte-wide integer operations.
pub mod alu;
