//! Main Memory.
//!
//! This module implements the byte-addressed memory array of the CPU. It provides:
//! 1. **Storage:** A fixed-size `Vec<u8>` sized from the configuration.
//! 2. **Checked Access:** Reads and writes that reject out-of-range addresses and values.
//! 3. **Bulk Load:** Atomic placement of a program image at an offset.

use crate::common::constants::MAX_VALUE;
use crate::common::error::{CpuError, Result};

/// Main memory: a fixed number of byte cells addressed from zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    /// Returns the number of addressable bytes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the memory has no addressable bytes.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads the byte at `address`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `address` is not below [`Memory::len`].
    pub fn read(&self, address: usize) -> Result<u8> {
        self.get(address)
            .ok_or_else(|| CpuError::memory(address, self.len()))
    }

    /// Reads the byte at `address`, or `None` past the end of memory.
    #[inline]
    pub fn get(&self, address: usize) -> Option<u8> {
        self.cells.get(address).copied()
    }

    /// Writes `value` to `address`.
    ///
    /// The value is taken wider than a byte so callers holding arithmetic results
    /// get a typed rejection instead of silent truncation.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a bad address, `InvalidValue` for a value above 255.
    /// Nothing is written on error.
    pub fn write(&mut self, address: usize, value: u32) -> Result<()> {
        if value > MAX_VALUE {
            return Err(CpuError::InvalidValue { value });
        }
        let limit = self.len();
        let cell = self
            .cells
            .get_mut(address)
            .ok_or_else(|| CpuError::memory(address, limit))?;
        *cell = value as u8;
        Ok(())
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` naming the first address that does not fit. Memory is left
    /// untouched on error.
    pub fn load(&mut self, data: &[u8], offset: usize) -> Result<()> {
        let limit = self.len();
        let end = offset
            .checked_add(data.len())
            .ok_or_else(|| CpuError::memory(usize::MAX, limit))?;
        if end > limit {
            return Err(CpuError::memory(offset.max(limit), limit));
        }
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns the whole memory image.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
