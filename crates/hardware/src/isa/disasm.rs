//! Program Disassembler for the LS-8.
//!
//! Walks a program image from address 0 and renders each instruction as a
//! mnemonic line for listings, logging, and test diagnostics. Bytes that do not
//! start a complete instruction are shown as `.byte` data.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//!
//! let lines = disassemble(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]);
//! let text: Vec<String> = lines.iter().map(|line| line.text.clone()).collect();
//! assert_eq!(text, ["LDI R0,8", "PRN R0", "HLT"]);
//! ```

use crate::isa::decode::decode;

/// One line of a disassembly listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Address of the first byte.
    pub address: usize,
    /// The bytes this line covers.
    pub bytes: Vec<u8>,
    /// Mnemonic text, or `.byte` for undecodable data.
    pub text: String,
}

/// Disassembles a whole program image.
pub fn disassemble(image: &[u8]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut address = 0;

    while address < image.len() {
        let (size, text) = match decode(image, address) {
            Ok(inst) => (inst.size(), inst.to_string()),
            Err(_) => (1, format!(".byte {:#010b}", image[address])),
        };
        lines.push(Line {
            address,
            bytes: image[address..address + size].to_vec(),
            text,
        });
        address += size;
    }

    lines
}
