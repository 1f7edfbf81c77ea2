//! LS-8 Opcodes.
//!
//! Defines the opcode byte of every recognized instruction.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print a register in decimal.
pub const PRN: u8 = 0b0100_0111;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Subtract two registers.
pub const SUB: u8 = 0b1010_0001;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the last comparison was not equal.
pub const JNE: u8 = 0b0101_0110;
