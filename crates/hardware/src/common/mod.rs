//! Common utilities and types used throughout the LS-8 CPU.
//!
//! This module provides the building blocks shared by the loader and the engine:
//! 1. **Constants:** Architectural sizes, reset values, and flag bit positions.
//! 2. **Error Handling:** The `CpuError` enum and the crate-wide `Result` alias.

/// Common constants used throughout the CPU.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT};
pub use error::{AddressSpace, CpuError, Result};
