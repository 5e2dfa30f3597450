//! Tests for STX and STY.

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a reset CPU with execution redirected to 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_stx_zero_page() {
    let mut cpu = setup_cpu();

    // STX $22
    cpu.memory_mut().write(0x8000, 0x86);
    cpu.memory_mut().write(0x8001, 0x22);
    cpu.set_x(0x55);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x0022), 0x55);
    assert_eq!(used, 3);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    // STX $10,Y with Y = 0x0F stores at 0x001F
    cpu.memory_mut().write(0x8000, 0x96);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.set_x(0x66);
    cpu.set_y(0x0F);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x001F), 0x66);
    assert_eq!(used, 4);
}

#[test]
fn test_stx_absolute() {
    let mut cpu = setup_cpu();

    // STX $1234
    cpu.memory_mut().write(0x8000, 0x8E);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.set_x(0x77);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x1234), 0x77);
    assert_eq!(used, 4);
}

#[test]
fn test_sty_zero_page() {
    let mut cpu = setup_cpu();

    // STY $30
    cpu.memory_mut().write(0x8000, 0x84);
    cpu.memory_mut().write(0x8001, 0x30);
    cpu.set_y(0x88);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x0030), 0x88);
    assert_eq!(used, 3);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();

    // STY $30,X with X = 1
    cpu.memory_mut().write(0x8000, 0x94);
    cpu.memory_mut().write(0x8001, 0x30);
    cpu.set_y(0x99);
    cpu.set_x(0x01);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x0031), 0x99);
    assert_eq!(used, 4);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();

    // STY $4000
    cpu.memory_mut().write(0x8000, 0x8C);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x40);
    cpu.set_y(0xAA);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x4000), 0xAA);
    assert_eq!(used, 4);
}

#[test]
fn test_stores_do_not_affect_flags() {
    let mut cpu = setup_cpu();

    // STX $22 with X = 0x80
    cpu.memory_mut().write(0x8000, 0x86);
    cpu.memory_mut().write(0x8001, 0x22);
    cpu.set_x(0x80);

    cpu.step();

    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}
