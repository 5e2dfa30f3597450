//! Tests for the shift and rotate instructions ASL, LSR, ROL, ROR in both
//! accumulator and memory (read-modify-write) forms.

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper to create a reset CPU with execution redirected to 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A); // ASL A
    cpu.set_a(0b0100_0001);

    let used = cpu.step();

    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(used, 2);
}

#[test]
fn test_asl_shifts_bit7_into_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0b1000_0000);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_asl_zero_page_read_modify_write() {
    let mut cpu = setup_cpu();

    // ASL $10
    cpu.memory_mut().write(0x8000, 0x06);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0b0000_0011);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x0010), 0b0000_0110);
    assert_eq!(used, 5);
}

#[test]
fn test_lsr_shifts_bit0_into_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x4A); // LSR A
    cpu.set_a(0b0000_0011);

    let used = cpu.step();

    assert_eq!(cpu.a(), 0b0000_0001);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n()); // LSR can never produce a negative
    assert_eq!(used, 2);
}

#[test]
fn test_rol_rotates_carry_into_bit0() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x2A); // ROL A
    cpu.set_a(0b1000_0000);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0b0000_0001);
    assert!(cpu.flag_c()); // old bit 7
}

#[test]
fn test_ror_rotates_carry_into_bit7() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x6A); // ROR A
    cpu.set_a(0b0000_0001);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0b1000_0000);
    assert!(cpu.flag_c()); // old bit 0
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_without_carry() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x6A);
    cpu.set_a(0b0000_0010);

    cpu.step();

    assert_eq!(cpu.a(), 0b0000_0001);
    assert!(!cpu.flag_c());
}

#[test]
fn test_rol_absolute_x_is_seven_cycles() {
    let mut cpu = setup_cpu();

    // ROL $1200,X with X = 4
    cpu.memory_mut().write(0x8000, 0x3E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1204, 0b0100_0000);
    cpu.set_x(0x04);

    let used = cpu.step();

    assert_eq!(cpu.memory().read(0x1204), 0b1000_0000);
    assert!(cpu.flag_n());
    assert_eq!(used, 7);
}
