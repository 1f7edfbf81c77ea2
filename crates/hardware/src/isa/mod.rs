//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, typed instruction values, the decoder, and
//! the disassembler.
//!
//! # Encoding
//!
//! Every opcode byte has the layout `AABCDDDD`:
//!
//! * `AA`: number of operand bytes that follow (0-2).
//! * `B`: set for operations executed by the ALU.
//! * `C`: set for instructions that write the PC themselves.
//! * `DDDD`: instruction identifier.

/// Instruction decoding from a memory image.
pub mod decode;

/// Program disassembler for listings and diagnostics.
pub mod disasm;

/// Opcode enum, typed instructions, and the program encoder.
pub mod instruction;

/// Raw opcode byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, Opcode, assemble};
