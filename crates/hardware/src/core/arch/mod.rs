//! LS-8 architectural state.
//!
//! This module contains the programmer-visible state besides memory and PC:
//! 1. **GPRs:** The eight byte-wide general-purpose registers.
//! 2. **Flags:** The comparison flags register written by `CMP`.

/// Comparison flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
