//! LS-8 General-Purpose Register File.
//!
//! This module implements the register file of the LS-8. It performs the following:
//! 1. **Storage:** Maintains 8 byte-wide registers (`R0`-`R7`).
//! 2. **Reset:** Loads the stack pointer convention into `R7`.
//! 3. **Checked Access:** Rejects register indices outside `0..8`.
//! 4. **Debugging:** Provides a hexadecimal dump of the complete register state.

use crate::common::constants::{REGISTER_COUNT, SP_REGISTER};
use crate::common::error::{CpuError, Result};

/// General-Purpose Register file.
///
/// `R7` holds the reserved stack pointer value after reset. No instruction in
/// the current set treats it specially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a register file with every register zero except `R7 = initial_sp`.
    pub fn new(initial_sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP_REGISTER] = initial_sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `idx` is not below [`REGISTER_COUNT`].
    pub fn read(&self, idx: usize) -> Result<u8> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(CpuError::register(idx, REGISTER_COUNT))
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `idx` is not below [`REGISTER_COUNT`].
    pub fn write(&mut self, idx: usize, val: u8) -> Result<()> {
        let reg = self
            .regs
            .get_mut(idx)
            .ok_or(CpuError::register(idx, REGISTER_COUNT))?;
        *reg = val;
        Ok(())
    }

    /// Returns all register values, `R0` first.
    pub const fn values(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Renders all registers as `R0=xx R1=xx ...` in hexadecimal.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("R{i}={v:#04x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
