//! Run statistics collection and reporting.
//!
//! This module tracks what the engine did during a run. It provides:
//! 1. **Throughput:** Steps executed and instructions retired, with host time.
//! 2. **Instruction mix:** Counts by category (ALU, load, output, compare, branch).
//! 3. **Control flow:** Branches evaluated versus taken.
//! 4. **Diagnostics:** Unknown opcodes skipped under the lenient policy.

use std::fmt::Write;
use std::time::Instant;

use crate::isa::instruction::{Instruction, Opcode};

/// Run statistics tracking all execution counters.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Fetch-decode-execute steps, including skipped unknown opcodes.
    pub steps: u64,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// ALU instructions retired (ADD, SUB, MUL, CMP).
    pub inst_alu: u64,
    /// LDI instructions retired.
    pub inst_load: u64,
    /// PRN instructions retired.
    pub inst_output: u64,
    /// CMP instructions retired.
    pub inst_compare: u64,
    /// Jump instructions retired, conditional or not.
    pub inst_branch: u64,

    /// Jumps that redirected the PC.
    pub branches_taken: u64,
    /// Unknown opcode bytes stepped over.
    pub unknown_skipped: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_output: 0,
            inst_compare: 0,
            inst_branch: 0,
            branches_taken: 0,
            unknown_skipped: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction by category.
    pub fn record(&mut self, inst: &Instruction) {
        let op = inst.opcode();
        self.instructions_retired += 1;
        if op.is_alu() {
            self.inst_alu += 1;
        }
        if op.sets_pc() {
            self.inst_branch += 1;
        }
        match op {
            Opcode::Ldi => self.inst_load += 1,
            Opcode::Prn => self.inst_output += 1,
            Opcode::Cmp => self.inst_compare += 1,
            _ => {}
        }
    }

    /// Renders the statistics report.
    pub fn render(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let retired = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / retired) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "LS-8 RUN STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_steps                {}", self.steps);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        let _ = writeln!(
            out,
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            pct(self.inst_alu)
        );
        let _ = writeln!(
            out,
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            pct(self.inst_load)
        );
        let _ = writeln!(
            out,
            "  op.output              {} ({:.2}%)",
            self.inst_output,
            pct(self.inst_output)
        );
        let _ = writeln!(
            out,
            "  op.compare             {} ({:.2}%)",
            self.inst_compare,
            pct(self.inst_compare)
        );
        let _ = writeln!(
            out,
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            pct(self.inst_branch)
        );
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "CONTROL FLOW");
        let _ = writeln!(out, "  branch.taken           {}", self.branches_taken);
        let _ = writeln!(
            out,
            "  branch.not_taken       {}",
            self.inst_branch.saturating_sub(self.branches_taken)
        );
        let _ = writeln!(out, "  unknown.skipped        {}", self.unknown_skipped);
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the statistics report to stderr.
    pub fn print(&self) {
        eprint!("{}", self.render());
    }
}
