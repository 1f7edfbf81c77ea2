//! # Statistics Tests
//!
//! Verifies the instruction-mix counters gathered during a run and the
//! rendered report.

use crate::common::harness::TestContext;
use ls8_core::isa::Instruction::{Add, Cmp, Hlt, Jeq, Jmp, Ldi, Prn};
use ls8_core::stats::SimStats;

#[test]
fn test_stats_default_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.steps, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.branches_taken, 0);
}

#[test]
fn test_stats_instruction_mix() {
    let mut ctx = TestContext::new().load_program(&[
        Ldi { reg: 0, value: 1 },  // 0
        Ldi { reg: 1, value: 2 },  // 3
        Ldi { reg: 2, value: 21 }, // 6
        Add { a: 0, b: 1 },        // 9
        Cmp { a: 0, b: 1 },        // 12
        Jeq { reg: 2 },            // 15
        Jmp { reg: 2 },            // 17
        Prn { reg: 0 },            // 19
        Hlt,                       // 21
    ]);
    ctx.run().unwrap();

    let stats = &ctx.cpu.stats;
    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.steps, 8);
    assert_eq!(stats.inst_load, 3);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_compare, 1);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.inst_output, 0);
}

#[test]
fn test_stats_report_sections() {
    let mut ctx = TestContext::new().load_program(&[Ldi { reg: 0, value: 8 }, Prn { reg: 0 }, Hlt]);
    ctx.run().unwrap();

    let report = ctx.cpu.stats.render();
    assert!(report.contains("LS-8 RUN STATISTICS"));
    assert!(report.contains("sim_insts                3"));
    assert!(report.contains("op.output              1"));
    assert!(report.contains("branch.not_taken       0"));
}
