//! # ALU Tests
//!
//! Wrapping arithmetic of the ALU unit and the name-based operation lookup.

use ls8_core::CpuError;
use ls8_core::core::units::alu::{Alu, AluOp};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 2, 3, 5)]
#[case(AluOp::Add, 200, 100, 44)]
#[case(AluOp::Sub, 9, 4, 5)]
#[case(AluOp::Sub, 3, 5, 254)]
#[case(AluOp::Mul, 8, 9, 72)]
#[case(AluOp::Mul, 16, 17, 16)]
#[case(AluOp::Mul, 255, 0, 0)]
fn test_alu_execute(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case("ADD", AluOp::Add)]
#[case("sub", AluOp::Sub)]
#[case("Mul", AluOp::Mul)]
fn test_alu_op_from_name(#[case] name: &str, #[case] op: AluOp) {
    assert_eq!(name.parse::<AluOp>().unwrap(), op);
}

#[test]
fn test_alu_op_unknown_name() {
    assert_eq!(
        "DIV".parse::<AluOp>(),
        Err(CpuError::UnsupportedOperation("DIV".to_string()))
    );
}

#[test]
fn test_alu_op_display_round_trips() {
    for op in [AluOp::Add, AluOp::Sub, AluOp::Mul] {
        assert_eq!(op.to_string().parse::<AluOp>().unwrap(), op);
    }
}

proptest! {
    #[test]
    fn prop_alu_matches_modular_arithmetic(a: u8, b: u8) {
        let (wa, wb) = (u32::from(a), u32::from(b));
        prop_assert_eq!(u32::from(Alu::execute(AluOp::Add, a, b)), (wa + wb) % 256);
        prop_assert_eq!(u32::from(Alu::execute(AluOp::Sub, a, b)), (wa + 256 - wb) % 256);
        prop_assert_eq!(u32::from(Alu::execute(AluOp::Mul, a, b)), (wa * wb) % 256);
    }
}
