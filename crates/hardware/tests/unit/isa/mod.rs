
/// Listing output of the disassembler.
pub mod disasm;

/// Opcode table and bit-field properties.
pub mod opcodes;
