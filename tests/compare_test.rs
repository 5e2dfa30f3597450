//! Tests for the compare instructions CMP, CPX, CPY.
//!
//! Compares set carry when the register is greater than or equal to the
//! operand (no borrow), zero on equality, and negative from bit 7 of the
//! wrapped difference. The register itself never changes.

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a reset CPU with execution redirected to 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_cmp_equal() {
    let mut cpu = setup_cpu();

    // CMP #$42
    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.set_a(0x42);

    let used = cpu.step();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42); // unchanged
    assert_eq!(used, 2);
}

#[test]
fn test_cmp_greater() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.set_a(0x50);

    cpu.step();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n()); // 0x50 - 0x10 = 0x40
}

#[test]
fn test_cmp_less_clears_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xC9);
    cpu.memory_mut().write(0x8001, 0x50);
    cpu.set_a(0x10);

    cpu.step();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n()); // 0x10 - 0x50 wraps to 0xC0
}

#[test]
fn test_cmp_zero_page() {
    let mut cpu = setup_cpu();

    // CMP $10
    cpu.memory_mut().write(0x8000, 0xC5);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0x01);
    cpu.set_a(0x01);

    let used = cpu.step();

    assert!(cpu.flag_z());
    assert_eq!(used, 3);
}

#[test]
fn test_cpx_immediate() {
    let mut cpu = setup_cpu();

    // CPX #$05
    cpu.memory_mut().write(0x8000, 0xE0);
    cpu.memory_mut().write(0x8001, 0x05);
    cpu.set_x(0x06);

    let used = cpu.step();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.x(), 0x06);
    assert_eq!(used, 2);
}

#[test]
fn test_cpy_absolute() {
    let mut cpu = setup_cpu();

    // CPY $2000
    cpu.memory_mut().write(0x8000, 0xCC);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2000, 0xFF);
    cpu.set_y(0x00);

    let used = cpu.step();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert_eq!(used, 4);
}
