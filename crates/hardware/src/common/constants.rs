//! Global CPU Constants.
//!
//! This module defines the architectural constants of the LS-8. It includes:
//! 1. **Storage Constants:** Memory size and register count.
//! 2. **Reset Constants:** Values the register file holds after reset.
//! 3. **Flag Constants:** Bit masks of the comparison flags register.
//! 4. **Encoding Constants:** Opcode bit fields shared by decode and disassembly.

/// Default number of addressable memory bytes.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Register reserved for the stack pointer convention.
pub const SP_REGISTER: usize = 7;

/// Reset value of the stack pointer register.
pub const INITIAL_SP: u8 = 0xF4;

/// Flag bit set when the compared values are equal.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Flag bit set when the first compared value is greater than the second.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Flag bit set when the first compared value is less than the second.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Mask of every meaningful flag bit.
pub const FLAG_MASK: u8 = FLAG_EQUAL | FLAG_GREATER | FLAG_LESS;

/// Shift of the operand-count field (`AA` in `AABCDDDD`).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Opcode bit marking an ALU operation (`B` in `AABCDDDD`).
pub const ALU_OP_BIT: u8 = 0b0010_0000;

/// Opcode bit marking an instruction that sets the PC (`C` in `AABCDDDD`).
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Largest value a memory cell or register can hold.
pub const MAX_VALUE: u32 = u8::MAX as u32;
