//! Loader and Execution Error definitions.
//!
//! This module defines the error handling for the CPU. It provides:
//! 1. **Load Errors:** Missing sources and malformed or out-of-range program lines.
//! 2. **Access Errors:** Memory addresses and register indices outside their bounds.
//! 3. **Execution Errors:** Unknown opcodes, unsupported ALU operations, and budget exhaustion.
//!
//! Every error is fatal to the operation that raised it; nothing is retried.

use std::fmt;

use thiserror::Error;

/// Storage a bounds-checked index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressSpace {
    /// Main memory, indexed by byte address.
    Memory,
    /// The general-purpose register file.
    Register,
}

impl fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory address"),
            Self::Register => write!(f, "register index"),
        }
    }
}

/// Errors raised while loading or executing an LS-8 program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The program source could not be opened.
    #[error("{path}: not found ({reason})")]
    SourceNotFound {
        /// Path that was requested.
        path: String,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// A non-blank, non-comment line is not a binary literal.
    #[error("line {line}: malformed instruction '{text}'")]
    MalformedInstruction {
        /// 1-based line number in the source.
        line: usize,
        /// The offending text after comment stripping.
        text: String,
    },

    /// A memory address or register index is outside its valid range.
    #[error("{space} {index:#04x} out of bounds (limit {limit})")]
    OutOfBounds {
        /// Which storage was addressed.
        space: AddressSpace,
        /// The rejected index.
        index: usize,
        /// Number of valid indices.
        limit: usize,
    },

    /// A value does not fit in one byte.
    #[error("value {value} does not fit in a byte")]
    InvalidValue {
        /// The rejected value.
        value: u32,
    },

    /// The byte at the program counter is not a recognized opcode.
    #[error("unknown opcode {opcode:#010b} at address {address:#04x}")]
    UnknownOpcode {
        /// Address the opcode was fetched from.
        address: usize,
        /// The unrecognized byte.
        opcode: u8,
    },

    /// The ALU was asked for an operation it does not implement.
    #[error("unsupported ALU operation '{0}'")]
    UnsupportedOperation(String),

    /// The run loop hit its configured step budget without halting.
    #[error("execution budget of {steps} steps exceeded")]
    ExecutionBudgetExceeded {
        /// Number of steps executed before giving up.
        steps: u64,
    },

    /// The output sink failed to accept a value.
    #[error("output failed: {0}")]
    OutputFailed(String),
}

impl CpuError {
    /// Builds an `OutOfBounds` error for a memory address.
    pub const fn memory(index: usize, limit: usize) -> Self {
        Self::OutOfBounds {
            space: AddressSpace::Memory,
            index,
            limit,
        }
    }

    /// Builds an `OutOfBounds` error for a register index.
    pub const fn register(index: usize, limit: usize) -> Self {
        Self::OutOfBounds {
            space: AddressSpace::Register,
            index,
            limit,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CpuError>;
