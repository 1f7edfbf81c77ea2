//! Program Loader for the binary text format.
//!
//! This module converts program sources into memory images. It performs:
//! 1. **Source reading:** Opens a program file, reporting `SourceNotFound` if it cannot be read.
//! 2. **Parsing:** One base-2 byte literal per line; `#` starts a comment; blank lines are skipped.
//! 3. **Encoding:** Renders an image back into the same format, optionally annotated
//!    with disassembly.
//!
//! Parsing is strict: a line that still has text after comment stripping must be a
//! binary literal of at most 255, otherwise the whole load fails.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::MAX_VALUE;
use crate::common::error::{CpuError, Result};
use crate::isa::disasm::disassemble;

/// Reads and parses the program at `path`.
///
/// Invalid UTF-8 is replaced before parsing, so it surfaces as a
/// `MalformedInstruction` on the offending line.
///
/// # Errors
///
/// * `SourceNotFound` if the file cannot be opened or read.
/// * Any error from [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|e| CpuError::SourceNotFound {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let program = parse_program(&String::from_utf8_lossy(&raw))?;
    debug!(path = %path.display(), bytes = program.len(), "program parsed");
    Ok(program)
}

/// Parses program text into a byte image.
///
/// # Errors
///
/// * `MalformedInstruction` for a line whose text is not a base-2 literal
///   (or does not fit in 32 bits).
/// * `InvalidValue` for a literal above 255.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let text = "# print 8\n10000010 # LDI\n  00000000\n\n00001000\n";
/// assert_eq!(parse_program(text).unwrap(), vec![0b1000_0010, 0, 8]);
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u8>> {
    let mut program = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if code.is_empty() {
            continue;
        }
        program.push(parse_byte(code, idx + 1)?);
    }
    Ok(program)
}

/// Parses one binary literal.
fn parse_byte(code: &str, line: usize) -> Result<u8> {
    let malformed = || CpuError::MalformedInstruction {
        line,
        text: code.to_string(),
    };
    if !code.bytes().all(|c| c == b'0' || c == b'1') {
        return Err(malformed());
    }
    let value = u32::from_str_radix(code, 2).map_err(|_| malformed())?;
    if value > MAX_VALUE {
        return Err(CpuError::InvalidValue { value });
    }
    Ok(value as u8)
}

/// Renders an image as program text: one zero-padded 8-digit literal per line.
///
/// [`parse_program`] maps the result back to `program` exactly.
pub fn encode_program(program: &[u8]) -> String {
    program.iter().map(|b| format!("{b:08b}\n")).collect()
}

/// Renders an image as program text with a disassembly comment on the first
/// byte of every instruction.
pub fn annotate_program(program: &[u8]) -> String {
    let mut out = String::new();
    for line in disassemble(program) {
        for (i, byte) in line.bytes.iter().enumerate() {
            if i == 0 {
                let _ = writeln!(out, "{byte:08b} # {:02X}: {}", line.address, line.text);
            } else {
                let _ = writeln!(out, "{byte:08b}");
            }
        }
    }
    out
}
