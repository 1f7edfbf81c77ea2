//! # CPU State Tests
//!
//! Construction, reset, program loading, and direct memory and register access
//! through the `Cpu` API.

use crate::common::harness::TestContext;
use ls8_core::common::{AddressSpace, CpuError};
use ls8_core::config::Config;
use ls8_core::core::arch::Flags;
use ls8_core::isa::Instruction::{Hlt, Ldi, Prn};

#[test]
fn test_new_cpu_reset_state() {
    let ctx = TestContext::new();
    let cpu = &ctx.cpu;

    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.flags(), Flags::CLEAR);
    assert!(!cpu.is_halted());
    assert_eq!(cpu.registers().values(), &[0, 0, 0, 0, 0, 0, 0, 0xF4]);
    assert!(cpu.memory().as_slice().iter().all(|&b| b == 0));
    assert_eq!(cpu.memory().len(), 256);
}

#[test]
fn test_initial_sp_from_config() {
    let mut config = Config::default();
    config.system.initial_sp = 0xE0;
    let ctx = TestContext::with_config(&config);
    assert_eq!(ctx.get_reg(7), 0xE0);
}

#[test]
fn test_reset_after_run() {
    let mut ctx = TestContext::new().load_program(&[Ldi { reg: 2, value: 9 }, Prn { reg: 2 }, Hlt]);
    ctx.run().unwrap();
    assert!(ctx.cpu.is_halted());

    ctx.cpu.reset();

    assert!(!ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.pc(), 0);
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(7), 0xF4);
    assert_eq!(ctx.cpu.read(0).unwrap(), 0);
    assert_eq!(ctx.cpu.stats.instructions_retired, 0);
}

#[test]
fn test_load_places_program_at_zero() {
    let ctx = TestContext::new().load_bytes(&[0b1000_0010, 0, 8]);
    assert_eq!(ctx.cpu.read(0).unwrap(), 0b1000_0010);
    assert_eq!(ctx.cpu.read(1).unwrap(), 0);
    assert_eq!(ctx.cpu.read(2).unwrap(), 8);
    assert_eq!(ctx.cpu.read(3).unwrap(), 0);
}

#[test]
fn test_load_full_memory() {
    let image = vec![0xAA; 256];
    let ctx = TestContext::new().load_bytes(&image);
    assert_eq!(ctx.cpu.read(255).unwrap(), 0xAA);
}

#[test]
fn test_load_too_large_is_rejected_atomically() {
    let mut ctx = TestContext::new();
    let image = vec![1; 257];

    assert_eq!(
        ctx.cpu.load(&image),
        Err(CpuError::OutOfBounds {
            space: AddressSpace::Memory,
            index: 256,
            limit: 256,
        })
    );
    assert_eq!(ctx.cpu.read(0).unwrap(), 0);
}

#[test]
fn test_write_then_read() {
    let mut ctx = TestContext::new();
    ctx.cpu.write(0x10, 255).unwrap();
    assert_eq!(ctx.cpu.read(0x10).unwrap(), 255);
}

#[test]
fn test_write_rejects_value_above_byte() {
    let mut ctx = TestContext::new();
    assert_eq!(
        ctx.cpu.write(0, 256),
        Err(CpuError::InvalidValue { value: 256 })
    );
    assert_eq!(ctx.cpu.read(0).unwrap(), 0);
}

#[test]
fn test_read_write_out_of_bounds() {
    let mut ctx = TestContext::new();
    assert!(matches!(
        ctx.cpu.read(256),
        Err(CpuError::OutOfBounds {
            space: AddressSpace::Memory,
            index: 256,
            ..
        })
    ));
    assert!(ctx.cpu.write(1000, 1).is_err());
}

#[test]
fn test_register_access_bounds() {
    let mut ctx = TestContext::new();
    ctx.cpu.set_register(3, 42).unwrap();
    assert_eq!(ctx.cpu.register(3).unwrap(), 42);
    assert!(ctx.cpu.register(8).is_err());
    assert!(ctx.cpu.set_register(8, 1).is_err());
}

#[test]
fn test_set_pc_bounds() {
    let mut ctx = TestContext::new();
    ctx.cpu.set_pc(255).unwrap();
    assert_eq!(ctx.cpu.pc(), 255);
    assert!(ctx.cpu.set_pc(256).is_err());
    assert_eq!(ctx.cpu.pc(), 255);
}

#[test]
fn test_set_pc_starts_execution_elsewhere() {
    let mut ctx = TestContext::new().load_bytes(&[0xFF, 0b0000_0001]);
    ctx.cpu.set_pc(1).unwrap();
    ctx.run().unwrap();
    assert!(ctx.cpu.is_halted());
}

#[test]
fn test_debug_output_names_sink() {
    let ctx = TestContext::new();
    let text = format!("{:?}", ctx.cpu);
    assert!(text.contains("BUFFER"));
    assert!(text.contains("pc: 0"));
}
