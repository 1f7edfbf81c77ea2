//! LS-8 Instruction Decoder.
//!
//! Decodes the instruction starting at an address of a memory image. The
//! opcode byte selects an `Opcode`, whose `AA` field says how many operand
//! bytes to read after it. Every byte is fetched through a bounds check, so an
//! instruction straddling the end of memory is rejected instead of read past
//! the array.

use crate::common::error::{CpuError, Result};
use crate::isa::instruction::{Instruction, Opcode};

/// Decodes the instruction whose opcode byte is at `address` in `image`.
///
/// # Errors
///
/// * `OutOfBounds` if the opcode or any operand byte lies outside `image`.
/// * `UnknownOpcode` if the byte at `address` is not in the opcode table.
///
/// # Examples
///
/// ```
/// use ls8_core::isa::{Instruction, decode};
///
/// let image = [0b1000_0010, 3, 42, 0b0000_0001];
/// assert_eq!(decode(&image, 0).unwrap(), Instruction::Ldi { reg: 3, value: 42 });
/// assert_eq!(decode(&image, 3).unwrap(), Instruction::Hlt);
/// ```
pub fn decode(image: &[u8], address: usize) -> Result<Instruction> {
    let fetch = |addr: usize| {
        image
            .get(addr)
            .copied()
            .ok_or_else(|| CpuError::memory(addr, image.len()))
    };

    let byte = fetch(address)?;
    let opcode =
        Opcode::try_from(byte).map_err(|opcode| CpuError::UnknownOpcode { address, opcode })?;

    let mut operands = [0u8; 2];
    for (i, slot) in operands.iter_mut().take(opcode.operand_count()).enumerate() {
        *slot = fetch(address + 1 + i)?;
    }

    Ok(Instruction::from_parts(opcode, operands))
}
