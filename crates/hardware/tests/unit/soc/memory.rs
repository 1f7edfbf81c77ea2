//! # Memory Tests
//!
//! Checked access and bulk loading of the memory array.

use ls8_core::common::{AddressSpace, CpuError};
use ls8_core::soc::Memory;

#[test]
fn test_memory_new_zeroed() {
    let mem = Memory::new(256);
    assert_eq!(mem.len(), 256);
    assert!(!mem.is_empty());
    assert!(mem.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_memory_zero_size() {
    let mem = Memory::new(0);
    assert!(mem.is_empty());
    assert!(mem.read(0).is_err());
}

#[test]
fn test_memory_write_boundaries() {
    let mut mem = Memory::new(256);
    mem.write(0, 0).unwrap();
    mem.write(255, 255).unwrap();
    assert_eq!(mem.read(255).unwrap(), 255);
    assert_eq!(mem.get(255), Some(255));
    assert_eq!(mem.get(256), None);
}

#[test]
fn test_memory_write_invalid_value_first() {
    let mut mem = Memory::new(4);
    assert_eq!(mem.write(9, 300), Err(CpuError::InvalidValue { value: 300 }));
    assert_eq!(
        mem.write(9, 3),
        Err(CpuError::OutOfBounds {
            space: AddressSpace::Memory,
            index: 9,
            limit: 4,
        })
    );
}

#[test]
fn test_memory_load_at_offset() {
    let mut mem = Memory::new(8);
    mem.load(&[1, 2, 3], 5).unwrap();
    assert_eq!(mem.as_slice(), &[0, 0, 0, 0, 0, 1, 2, 3]);
}

#[test]
fn test_memory_load_overflow_untouched() {
    let mut mem = Memory::new(8);
    mem.load(&[9; 8], 0).unwrap();
    assert!(mem.load(&[1, 2, 3], 6).is_err());
    assert_eq!(mem.as_slice(), &[9; 8]);
}

#[test]
fn test_memory_clear() {
    let mut mem = Memory::new(4);
    mem.load(&[1, 2, 3, 4], 0).unwrap();
    mem.clear();
    assert_eq!(mem.as_slice(), &[0; 4]);
}
