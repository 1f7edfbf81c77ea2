//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the byte-wide integer ALU used by the execute step.
//! Every result wraps modulo 256; there is no carry or overflow flag.
//!
//! Operations are organized by category:
//! - [`arithmetic`]: Add, Sub, Mul

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

use std::fmt;
use std::str::FromStr;

use crate::common::error::CpuError;

/// Operations the ALU can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
}

impl AluOp {
    /// Operation name as accepted by [`AluOp::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
        }
    }
}

impl FromStr for AluOp {
    type Err = CpuError;

    /// Looks an operation up by name, case-insensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "SUB" => Ok(Self::Sub),
            "MUL" => Ok(Self::Mul),
            _ => Err(CpuError::UnsupportedOperation(name.to_string())),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic Logic Unit (ALU) for byte-wide integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), 44);
    /// assert_eq!(Alu::execute(AluOp::Sub, 3, 5), 254);
    /// assert_eq!(Alu::execute(AluOp::Mul, 16, 17), 16);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        arithmetic::execute(op, a, b)
    }
}
