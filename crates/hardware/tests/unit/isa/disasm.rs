//! # Disassembler Tests

use ls8_core::isa::disasm::{Line, disassemble};
use ls8_core::isa::{Instruction, assemble};
use pretty_assertions::assert_eq;

#[test]
fn test_disassemble_mult() {
    let image = assemble(&[
        Instruction::Ldi { reg: 0, value: 8 },
        Instruction::Ldi { reg: 1, value: 9 },
        Instruction::Mul { a: 0, b: 1 },
        Instruction::Prn { reg: 0 },
        Instruction::Hlt,
    ]);
    let lines = disassemble(&image);

    let listing: Vec<(usize, &str)> = lines.iter().map(|l| (l.address, l.text.as_str())).collect();
    assert_eq!(
        listing,
        vec![
            (0, "LDI R0,8"),
            (3, "LDI R1,9"),
            (6, "MUL R0,R1"),
            (9, "PRN R0"),
            (11, "HLT"),
        ]
    );
}

#[test]
fn test_disassemble_data_bytes() {
    let lines = disassemble(&[0xFF, 0b1000_0010, 0]);
    assert_eq!(
        lines,
        vec![
            Line {
                address: 0,
                bytes: vec![0xFF],
                text: ".byte 0b11111111".to_string(),
            },
            Line {
                address: 1,
                bytes: vec![0b1000_0010],
                text: ".byte 0b10000010".to_string(),
            },
            Line {
                address: 2,
                bytes: vec![0],
                text: ".byte 0b00000000".to_string(),
            },
        ]
    );
}

#[test]
fn test_disassemble_empty() {
    assert!(disassemble(&[]).is_empty());
}
