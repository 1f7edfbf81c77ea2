//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and its memory array.
//! It performs the following:
//! 1. **Program Loading:** Places a byte image at address 0.
//! 2. **Checked Access:** Direct reads and writes with address and value validation.

use tracing::debug;

use super::Cpu;
use crate::common::error::Result;
use crate::soc::Memory;

impl Cpu {
    /// Writes a program image into memory starting at address 0.
    ///
    /// Registers, flags, and PC are left as they are; call [`Cpu::reset`] first
    /// for a clean run.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the image is larger than memory. Memory is unchanged on error.
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load(program, 0)?;
        debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Reads the byte at `address`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `address` is outside memory.
    pub fn read(&self, address: usize) -> Result<u8> {
        self.memory.read(address)
    }

    /// Writes `value` to `address`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a bad address, `InvalidValue` if `value` exceeds 255.
    pub fn write(&mut self, address: usize, value: u32) -> Result<()> {
        self.memory.write(address, value)
    }

    /// Returns the memory array.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }
}
