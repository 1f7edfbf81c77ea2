//! Opcodes and typed instructions.
//!
//! Provides the total mapping from opcode bytes to the `Opcode` enum, the
//! operand-carrying `Instruction` value produced by the decoder, and the
//! encoder that turns an instruction sequence back into a byte image.

use std::fmt;

use crate::common::constants::{ALU_OP_BIT, OPERAND_COUNT_SHIFT, SETS_PC_BIT};
use crate::isa::opcodes;

/// Every recognized LS-8 operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Halt.
    Hlt = opcodes::HLT,
    /// Load immediate.
    Ldi = opcodes::LDI,
    /// Print register.
    Prn = opcodes::PRN,
    /// Add registers.
    Add = opcodes::ADD,
    /// Subtract registers.
    Sub = opcodes::SUB,
    /// Multiply registers.
    Mul = opcodes::MUL,
    /// Compare registers.
    Cmp = opcodes::CMP,
    /// Unconditional jump.
    Jmp = opcodes::JMP,
    /// Jump if equal.
    Jeq = opcodes::JEQ,
    /// Jump if not equal.
    Jne = opcodes::JNE,
}

impl Opcode {
    /// Every opcode, in table order.
    pub const ALL: [Self; 10] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Cmp,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
    ];

    /// Returns the raw opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode (the `AA` field).
    #[inline]
    pub const fn operand_count(self) -> usize {
        (self.byte() >> OPERAND_COUNT_SHIFT) as usize
    }

    /// Total instruction length in bytes, opcode included.
    #[inline]
    pub const fn size(self) -> usize {
        1 + self.operand_count()
    }

    /// Returns `true` if the instruction is executed by the ALU.
    #[inline]
    pub const fn is_alu(self) -> bool {
        self.byte() & ALU_OP_BIT != 0
    }

    /// Returns `true` if the instruction may write the PC itself.
    #[inline]
    pub const fn sets_pc(self) -> bool {
        self.byte() & SETS_PC_BIT != 0
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Maps a byte to its opcode, handing the byte back if it is not recognized.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.byte() == byte)
            .ok_or(byte)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction with its operands.
///
/// Register operands are kept as raw bytes; the engine validates them against
/// the register file when the instruction executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Stop the run loop.
    Hlt,
    /// `R[reg] = value`.
    Ldi {
        /// Destination register.
        reg: u8,
        /// Immediate value.
        value: u8,
    },
    /// Emit `R[reg]` to the output sink.
    Prn {
        /// Register to print.
        reg: u8,
    },
    /// `R[a] = R[a] + R[b]` modulo 256.
    Add {
        /// Destination and first operand.
        a: u8,
        /// Second operand.
        b: u8,
    },
    /// `R[a] = R[a] - R[b]` modulo 256.
    Sub {
        /// Destination and first operand.
        a: u8,
        /// Second operand.
        b: u8,
    },
    /// `R[a] = R[a] * R[b]` modulo 256.
    Mul {
        /// Destination and first operand.
        a: u8,
        /// Second operand.
        b: u8,
    },
    /// Compare `R[a]` against `R[b]` and set exactly one flag.
    Cmp {
        /// First operand.
        a: u8,
        /// Second operand.
        b: u8,
    },
    /// `PC = R[reg]`.
    Jmp {
        /// Register holding the target.
        reg: u8,
    },
    /// `PC = R[reg]` if the equal flag is set.
    Jeq {
        /// Register holding the target.
        reg: u8,
    },
    /// `PC = R[reg]` if the last comparison was not equal.
    Jne {
        /// Register holding the target.
        reg: u8,
    },
}

impl Instruction {
    /// Builds an instruction from its opcode and operand bytes.
    ///
    /// Operand bytes beyond [`Opcode::operand_count`] are ignored.
    pub const fn from_parts(opcode: Opcode, operands: [u8; 2]) -> Self {
        let [x, y] = operands;
        match opcode {
            Opcode::Hlt => Self::Hlt,
            Opcode::Ldi => Self::Ldi { reg: x, value: y },
            Opcode::Prn => Self::Prn { reg: x },
            Opcode::Add => Self::Add { a: x, b: y },
            Opcode::Sub => Self::Sub { a: x, b: y },
            Opcode::Mul => Self::Mul { a: x, b: y },
            Opcode::Cmp => Self::Cmp { a: x, b: y },
            Opcode::Jmp => Self::Jmp { reg: x },
            Opcode::Jeq => Self::Jeq { reg: x },
            Opcode::Jne => Self::Jne { reg: x },
        }
    }

    /// Returns the opcode of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Hlt => Opcode::Hlt,
            Self::Ldi { .. } => Opcode::Ldi,
            Self::Prn { .. } => Opcode::Prn,
            Self::Add { .. } => Opcode::Add,
            Self::Sub { .. } => Opcode::Sub,
            Self::Mul { .. } => Opcode::Mul,
            Self::Cmp { .. } => Opcode::Cmp,
            Self::Jmp { .. } => Opcode::Jmp,
            Self::Jeq { .. } => Opcode::Jeq,
            Self::Jne { .. } => Opcode::Jne,
        }
    }

    /// Total length in bytes.
    pub const fn size(&self) -> usize {
        self.opcode().size()
    }

    /// Appends the encoded bytes of this instruction to `out`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.opcode().byte());
        match *self {
            Self::Hlt => {}
            Self::Ldi { reg, value } => out.extend_from_slice(&[reg, value]),
            Self::Prn { reg } | Self::Jmp { reg } | Self::Jeq { reg } | Self::Jne { reg } => {
                out.push(reg);
            }
            Self::Add { a, b } | Self::Sub { a, b } | Self::Mul { a, b } | Self::Cmp { a, b } => {
                out.extend_from_slice(&[a, b]);
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match *self {
            Self::Hlt => write!(f, "{op}"),
            Self::Ldi { reg, value } => write!(f, "{op} R{reg},{value}"),
            Self::Prn { reg } | Self::Jmp { reg } | Self::Jeq { reg } | Self::Jne { reg } => {
                write!(f, "{op} R{reg}")
            }
            Self::Add { a, b } | Self::Sub { a, b } | Self::Mul { a, b } | Self::Cmp { a, b } => {
                write!(f, "{op} R{a},R{b}")
            }
        }
    }
}

/// Encodes an instruction sequence into a contiguous program image.
///
/// # Examples
///
/// ```
/// use ls8_core::isa::{Instruction, assemble};
///
/// let image = assemble(&[Instruction::Ldi { reg: 0, value: 8 }, Instruction::Hlt]);
/// assert_eq!(image, vec![0b1000_0010, 0, 8, 0b0000_0001]);
/// ```
pub fn assemble(program: &[Instruction]) -> Vec<u8> {
    let mut image = Vec::with_capacity(program.iter().map(Instruction::size).sum());
    for inst in program {
        inst.encode(&mut image);
    }
    image
}
