//! LS-8 virtual CPU library.
//!
//! This crate implements a minimal 8-bit CPU with the following:
//! 1. **Loader:** Parses the line-oriented binary text format into a byte image.
//! 2. **ISA:** Opcode table, typed instructions, encoder, and disassembler.
//! 3. **Core:** Memory, 8-register file, flags, ALU, and the fetch-decode-execute loop.
//! 4. **SoC:** The RAM array and the output sink PRN writes to.
//! 5. **Simulation:** Configuration and per-run statistics.
//!
//! # Examples
//!
//! ```
//! use ls8_core::Config;
//! use ls8_core::core::Cpu;
//! use ls8_core::sim::loader;
//! use ls8_core::soc::devices::BufferSink;
//!
//! let source = "10000010 # LDI R0,8\n00000000\n00001000\n\
//!               01000111 # PRN R0\n00000000\n00000001 # HLT\n";
//! let program = loader::parse_program(source).unwrap();
//!
//! let sink = BufferSink::new();
//! let mut cpu = Cpu::with_sink(&Config::default(), Box::new(sink.clone()));
//! cpu.load(&program).unwrap();
//! cpu.run().unwrap();
//!
//! assert!(cpu.is_halted());
//! assert_eq!(sink.text(), "8\n");
//! ```

/// Common types and constants (errors, architectural sizes).
pub mod common;
/// Engine configuration (defaults, JSON-deserializable structures).
pub mod config;
/// CPU core (register file, flags, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode, instruction values, disassembly).
pub mod isa;
/// Program loader for the binary text format.
pub mod sim;
/// Memory array and output devices.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns memory, registers, flags, and program counter.
pub use crate::core::Cpu;
/// Error type shared by the loader and the engine.
pub use crate::common::error::{CpuError, Result};
