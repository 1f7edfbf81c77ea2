//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Memory, register file, flags, program counter, and halt state.
//! 2. **Execution:** The fetch-decode-execute loop (see [`execution`]).
//! 3. **Memory Access:** Bounds-checked reads, writes, and program loading (see [`memory`]).
//! 4. **Output:** The sink `PRN` writes to, chosen at construction.
//!
//! Engines are plain values: each one is independent, so tests and embedders can
//! run as many side by side as they like.

/// Instruction execution and the run loop.
pub mod execution;

/// Memory access and program loading.
pub mod memory;

use std::fmt;

use tracing::debug;

use crate::common::error::{CpuError, Result};
use crate::config::{Config, UnknownOpcodePolicy};
use crate::core::arch::{Flags, Gpr};
use crate::soc::devices::StdoutSink;
use crate::soc::{Memory, OutputSink};
use crate::stats::SimStats;

pub use execution::StepOutcome;

/// Main CPU structure containing all processor state.
pub struct Cpu {
    memory: Memory,
    regs: Gpr,
    flags: Flags,
    pc: usize,
    halted: bool,
    output: Box<dyn OutputSink>,

    /// Log a trace line before every step.
    trace: bool,
    /// Step limit applied to each `run()` call.
    max_steps: Option<u64>,
    /// Behaviour on an unrecognized opcode byte.
    unknown_opcode: UnknownOpcodePolicy,
    /// Reset value of `R7`.
    initial_sp: u8,

    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU that prints to stdout.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory size, reset stack pointer, and run-loop settings.
    pub fn new(config: &Config) -> Self {
        Self::with_sink(config, Box::new(StdoutSink))
    }

    /// Creates a CPU that sends `PRN` output to `output`.
    pub fn with_sink(config: &Config, output: Box<dyn OutputSink>) -> Self {
        debug!(
            memory_size = config.system.memory_size,
            sink = output.name(),
            "creating cpu"
        );
        Self {
            memory: Memory::new(config.system.memory_size),
            regs: Gpr::new(config.system.initial_sp),
            flags: Flags::CLEAR,
            pc: 0,
            halted: false,
            output,
            trace: config.general.trace,
            max_steps: config.general.max_steps,
            unknown_opcode: config.general.unknown_opcode,
            initial_sp: config.system.initial_sp,
            stats: SimStats::default(),
        }
    }

    /// Restores the reset state: memory zeroed, registers reset, flags clear,
    /// PC at 0, running, and fresh statistics. The output sink is kept.
    pub fn reset(&mut self) {
        debug!("resetting cpu");
        self.memory.clear();
        self.regs = Gpr::new(self.initial_sp);
        self.flags = Flags::CLEAR;
        self.pc = 0;
        self.halted = false;
        self.stats = SimStats::default();
    }

    /// Reads a general-purpose register.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `idx` is not a valid register index.
    pub fn register(&self, idx: usize) -> Result<u8> {
        self.regs.read(idx)
    }

    /// Writes a general-purpose register.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `idx` is not a valid register index.
    pub fn set_register(&mut self, idx: usize, val: u8) -> Result<()> {
        self.regs.write(idx, val)
    }

    /// Returns the register file.
    pub const fn registers(&self) -> &Gpr {
        &self.regs
    }

    /// Returns the flags register.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the address of the next instruction.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Moves the program counter.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `pc` is not a memory address.
    pub fn set_pc(&mut self, pc: usize) -> Result<()> {
        if pc >= self.memory.len() {
            return Err(CpuError::memory(pc, self.memory.len()));
        }
        self.pc = pc;
        Ok(())
    }

    /// Returns `true` once a `HLT` has executed.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("flags", &self.flags)
            .field("regs", &self.regs)
            .field("halted", &self.halted)
            .field("output", &self.output.name())
            .finish_non_exhaustive()
    }
}
