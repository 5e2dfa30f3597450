//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register, setting Z and N
//! - STA, STX, STY: store a register, touching no flags
//!
//! Loads pay the page-crossing penalty on indexed absolute and indirect
//! indexed modes; stores resolve through the store-address path, which
//! charges the index fix-up cycle unconditionally instead.

use crate::addressing::AddressingMode;
use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// LDA: loads a byte of memory into the accumulator.
///
/// Flags: Z set iff A = 0, N set iff bit 7 of A is set, others untouched.
/// The flag behavior is identical across every addressing mode.
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.a = value;
    cpu.set_nz(value);
}

/// LDX: loads a byte of memory into the X register. Flags: Z, N.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.x = value;
    cpu.set_nz(value);
}

/// LDY: loads a byte of memory into the Y register. Flags: Z, N.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.y = value;
    cpu.set_nz(value);
}

/// STA: stores the accumulator at the effective address. No flags.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let addr = cpu.store_address(mode, cycles);
    let value = cpu.a;
    cpu.write_byte(addr, value, cycles);
}

/// STX: stores the X register at the effective address. No flags.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let addr = cpu.store_address(mode, cycles);
    let value = cpu.x;
    cpu.write_byte(addr, value, cycles);
}

/// STY: stores the Y register at the effective address. No flags.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let addr = cpu.store_address(mode, cycles);
    let value = cpu.y;
    cpu.write_byte(addr, value, cycles);
}
