//! # Opcode Table Tests
//!
//! Checks the opcode byte values and that the `AABCDDDD` fields agree with
//! each instruction's behavior.

use ls8_core::isa::Opcode;
use ls8_core::isa::opcodes;
use rstest::rstest;

#[rstest]
#[case(Opcode::Hlt, 0b0000_0001, 0)]
#[case(Opcode::Ldi, 0b1000_0010, 2)]
#[case(Opcode::Prn, 0b0100_0111, 1)]
#[case(Opcode::Add, 0b1010_0000, 2)]
#[case(Opcode::Sub, 0b1010_0001, 2)]
#[case(Opcode::Mul, 0b1010_0010, 2)]
#[case(Opcode::Cmp, 0b1010_0111, 2)]
#[case(Opcode::Jmp, 0b0101_0100, 1)]
#[case(Opcode::Jeq, 0b0101_0101, 1)]
#[case(Opcode::Jne, 0b0101_0110, 1)]
fn test_opcode_bytes(#[case] op: Opcode, #[case] byte: u8, #[case] operands: usize) {
    assert_eq!(op.byte(), byte);
    assert_eq!(op.operand_count(), operands);
    assert_eq!(op.size(), operands + 1);
    assert_eq!(Opcode::try_from(byte), Ok(op));
}

#[test]
fn test_raw_constants_match_enum() {
    assert_eq!(opcodes::HLT, Opcode::Hlt.byte());
    assert_eq!(opcodes::MUL, Opcode::Mul.byte());
    assert_eq!(opcodes::JNE, Opcode::Jne.byte());
}

#[test]
fn test_alu_bit() {
    let alu: Vec<Opcode> = Opcode::ALL.into_iter().filter(|op| op.is_alu()).collect();
    assert_eq!(alu, vec![Opcode::Add, Opcode::Sub, Opcode::Mul, Opcode::Cmp]);
}

#[test]
fn test_sets_pc_bit() {
    let jumps: Vec<Opcode> = Opcode::ALL.into_iter().filter(|op| op.sets_pc()).collect();
    assert_eq!(jumps, vec![Opcode::Jmp, Opcode::Jeq, Opcode::Jne]);
}

#[test]
fn test_unknown_bytes_rejected() {
    let known: Vec<u8> = Opcode::ALL.iter().map(|op| op.byte()).collect();
    for byte in 0..=u8::MAX {
        let decoded = Opcode::try_from(byte);
        if known.contains(&byte) {
            assert!(decoded.is_ok());
        } else {
            assert_eq!(decoded, Err(byte));
        }
    }
}

#[test]
fn test_mnemonics() {
    let names: Vec<&str> = Opcode::ALL.iter().map(|op| op.mnemonic()).collect();
    assert_eq!(
        names,
        ["HLT", "LDI", "PRN", "ADD", "SUB", "MUL", "CMP", "JMP", "JEQ", "JNE"]
    );
}
