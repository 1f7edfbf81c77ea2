//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode at PC and its operands through [`decode`].
//! 2. **Execute:** Applies the instruction to registers, flags, or the output sink.
//! 3. **Control Flow:** Advances PC by the instruction size unless a jump redirected it.
//! 4. **Observability:** Optional per-step trace lines and run statistics.
//!
//! HALT returns control to the caller; it never terminates the process.

use std::fmt::Write;

use tracing::{info, trace, warn};

use super::Cpu;
use crate::common::error::{CpuError, Result};
use crate::config::UnknownOpcodePolicy;
use crate::core::arch::Flags;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Result of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The CPU is ready for another step.
    Running,
    /// A `HLT` has executed.
    Halted,
}

/// How an executed instruction moves the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    /// Fall through to the next instruction.
    Next,
    /// Continue at an absolute address.
    Jump(usize),
    /// Stop the run loop.
    Halt,
}

impl Cpu {
    /// Runs until `HLT` executes or an error occurs.
    ///
    /// Returns immediately if the CPU is already halted. With a configured step
    /// budget, each call may execute at most that many steps.
    ///
    /// # Errors
    ///
    /// Any error raised by [`Cpu::step`], or `ExecutionBudgetExceeded` when the
    /// budget runs out before a halt.
    pub fn run(&mut self) -> Result<()> {
        let mut executed = 0u64;
        while !self.halted {
            if self.max_steps.is_some_and(|limit| executed >= limit) {
                return Err(CpuError::ExecutionBudgetExceeded { steps: executed });
            }
            if self.step()? == StepOutcome::Halted {
                break;
            }
            executed += 1;
        }
        Ok(())
    }

    /// Performs one fetch-decode-execute transition.
    ///
    /// On error the PC still points at the faulting instruction.
    ///
    /// # Errors
    ///
    /// * `OutOfBounds` for a PC, operand, or register index outside its range.
    /// * `UnknownOpcode` for an unrecognized opcode under the `Fault` policy.
    /// * `OutputFailed` if the output sink rejects a `PRN` value.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }
        if self.trace {
            trace!(target: "ls8_core::trace", "{}", self.trace_line());
        }
        self.stats.steps += 1;

        let inst = match decode(self.memory.as_slice(), self.pc) {
            Ok(inst) => inst,
            Err(CpuError::UnknownOpcode { address, opcode })
                if self.unknown_opcode == UnknownOpcodePolicy::Skip =>
            {
                warn!(
                    "unknown opcode {opcode:#010b} at {address:#04x}, skipping to {:#04x}",
                    address + 1
                );
                self.stats.unknown_skipped += 1;
                self.pc = address + 1;
                return Ok(StepOutcome::Running);
            }
            Err(e) => return Err(e),
        };

        let control = self.execute(&inst)?;
        self.stats.record(&inst);

        match control {
            Control::Next => self.pc += inst.size(),
            Control::Jump(target) => {
                self.stats.branches_taken += 1;
                self.pc = target;
            }
            Control::Halt => {
                self.pc += inst.size();
                self.halted = true;
                info!(steps = self.stats.steps, pc = self.pc, "halted");
                return Ok(StepOutcome::Halted);
            }
        }
        Ok(StepOutcome::Running)
    }

    /// Applies `reg_a = reg_a <op> reg_b`, wrapping modulo 256.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if either register index is invalid. Nothing is written on error.
    pub fn alu(&mut self, op: AluOp, reg_a: usize, reg_b: usize) -> Result<()> {
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;
        self.regs.write(reg_a, Alu::execute(op, a, b))
    }

    /// Like [`Cpu::alu`], selecting the operation by name (`"ADD"`, `"SUB"`, `"MUL"`).
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` for an unknown name, otherwise as [`Cpu::alu`].
    pub fn alu_by_name(&mut self, name: &str, reg_a: usize, reg_b: usize) -> Result<()> {
        let op: AluOp = name.parse()?;
        self.alu(op, reg_a, reg_b)
    }

    /// Executes a decoded instruction and reports how the PC must move.
    fn execute(&mut self, inst: &Instruction) -> Result<Control> {
        match *inst {
            Instruction::Hlt => Ok(Control::Halt),
            Instruction::Add { a, b } => self.alu_step(AluOp::Add, a, b),
            Instruction::Sub { a, b } => self.alu_step(AluOp::Sub, a, b),
            Instruction::Mul { a, b } => self.alu_step(AluOp::Mul, a, b),
            Instruction::Ldi { reg, value } => {
                self.regs.write(reg as usize, value)?;
                Ok(Control::Next)
            }
            Instruction::Prn { reg } => {
                let value = self.regs.read(reg as usize)?;
                self.output
                    .emit(value)
                    .map_err(|e| CpuError::OutputFailed(e.to_string()))?;
                Ok(Control::Next)
            }
            Instruction::Cmp { a, b } => {
                let x = self.regs.read(a as usize)?;
                let y = self.regs.read(b as usize)?;
                self.flags = Flags::compare(x, y);
                Ok(Control::Next)
            }
            Instruction::Jmp { reg } => self.jump_if(true, reg),
            Instruction::Jeq { reg } => self.jump_if(self.flags.equal(), reg),
            Instruction::Jne { reg } => self.jump_if(self.flags.not_equal(), reg),
        }
    }

    fn alu_step(&mut self, op: AluOp, a: u8, b: u8) -> Result<Control> {
        self.alu(op, a as usize, b as usize)?;
        Ok(Control::Next)
    }

    /// Jumps to the address in `reg` when `taken`; the register is only read if so.
    fn jump_if(&self, taken: bool, reg: u8) -> Result<Control> {
        if !taken {
            return Ok(Control::Next);
        }
        let target = self.regs.read(reg as usize)?;
        Ok(Control::Jump(target as usize))
    }

    /// Formats the current state as
    /// `TRACE: PC | b0 b1 b2 | R0 R1 R2 R3 R4 R5 R6 R7`, all in hexadecimal.
    ///
    /// `b0..b2` are the bytes at PC, PC+1, and PC+2; bytes past the end of
    /// memory show as `--`.
    pub fn trace_line(&self) -> String {
        let byte = |offset: usize| {
            self.memory
                .get(self.pc + offset)
                .map_or_else(|| "--".to_string(), |b| format!("{b:02X}"))
        };
        let mut line = format!(
            "TRACE: {:02X} | {} {} {} |",
            self.pc,
            byte(0),
            byte(1),
            byte(2)
        );
        for value in self.regs.values() {
            let _ = write!(line, " {value:02X}");
        }
        line
    }
}
