//! Tests for LDX and LDY, including the zero-page,Y mode unique to LDX.

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a reset CPU with execution redirected to 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.set_pc(0x8000);
    cpu
}

// ========== LDX ==========

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup_cpu();

    // LDX #$44
    cpu.memory_mut().write(0x8000, 0xA2);
    cpu.memory_mut().write(0x8001, 0x44);

    let used = cpu.step();

    assert_eq!(cpu.x(), 0x44);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(used, 2);
}

#[test]
fn test_ldx_zero_sets_zero_flag() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA2);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.set_x(0x01);

    cpu.step();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    // LDX $10,Y with Y = 3 reads 0x0013
    cpu.memory_mut().write(0x8000, 0xB6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0013, 0x81);
    cpu.set_y(0x03);

    let used = cpu.step();

    assert_eq!(cpu.x(), 0x81);
    assert!(cpu.flag_n());
    assert_eq!(used, 4);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu();

    // LDX $20FF,Y with Y = 1
    cpu.memory_mut().write(0x8000, 0xBE);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2100, 0x0F);
    cpu.set_y(0x01);

    let used = cpu.step();

    assert_eq!(cpu.x(), 0x0F);
    assert_eq!(used, 5);
}

// ========== LDY ==========

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();

    // LDY #$80
    cpu.memory_mut().write(0x8000, 0xA0);
    cpu.memory_mut().write(0x8001, 0x80);

    let used = cpu.step();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(used, 2);
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();

    // LDY $F0,X with X = 0x20 wraps to 0x0010
    cpu.memory_mut().write(0x8000, 0xB4);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x0010, 0x3C);
    cpu.set_x(0x20);

    let used = cpu.step();

    assert_eq!(cpu.y(), 0x3C);
    assert_eq!(used, 4);
}

#[test]
fn test_ldy_absolute_x_no_cross() {
    let mut cpu = setup_cpu();

    // LDY $1200,X with X = 0x10
    cpu.memory_mut().write(0x8000, 0xBC);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1210, 0x11);
    cpu.set_x(0x10);

    let used = cpu.step();

    assert_eq!(cpu.y(), 0x11);
    assert_eq!(used, 4);
}
