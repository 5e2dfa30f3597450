//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, CMP, CPX,
//! CPY, BIT. All read their operand through the addressing resolver, so the
//! indexed modes pick up the page-crossing penalty automatically.
//!
//! ADC and SBC are binary-only: the decimal flag is tracked by the CPU but
//! never consulted here.

use crate::addressing::AddressingMode;
use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// Binary add with carry shared by ADC and SBC (SBC adds the one's
/// complement of its operand, which is exactly subtract-with-borrow).
///
/// Overflow: set when both inputs share a sign the result does not:
/// `V = (A ^ result) & (operand ^ result) & 0x80`.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = if cpu.flag_c { 1 } else { 0 };

    let result16 = a as u16 + value as u16 + carry_in as u16;
    let result = result16 as u8;

    cpu.flag_c = result16 > 0xFF;
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.a = result;
    cpu.set_nz(result);
}

/// Compare shared by CMP, CPX, CPY: computes `register - operand` and sets
/// C (no borrow), Z (equal), N (bit 7 of the difference) without storing it.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_nz(register.wrapping_sub(value));
}

/// ADC: adds the operand plus the carry flag to the accumulator.
/// Flags: C, Z, N, V.
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    add_with_carry(cpu, value);
}

/// SBC: subtracts the operand and the borrow (inverted carry) from the
/// accumulator. Flags: C (set when no borrow), Z, N, V.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    add_with_carry(cpu, value ^ 0xFF);
}

/// AND: bitwise AND of the accumulator and the operand. Flags: Z, N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.a &= value;
    cpu.set_nz(cpu.a);
}

/// ORA: bitwise OR of the accumulator and the operand. Flags: Z, N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.a |= value;
    cpu.set_nz(cpu.a);
}

/// EOR: bitwise exclusive-OR of the accumulator and the operand. Flags: Z, N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.a ^= value;
    cpu.set_nz(cpu.a);
}

/// CMP: compares the accumulator with the operand. Flags: C, Z, N.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// CPX: compares the X register with the operand. Flags: C, Z, N.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// CPY: compares the Y register with the operand. Flags: C, Z, N.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    let register = cpu.y;
    compare(cpu, register, value);
}

/// BIT: tests accumulator bits against memory without changing it.
///
/// Z is set from `A AND operand`; N and V copy bits 7 and 6 of the operand
/// itself, regardless of the accumulator.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let value = cpu.operand_value(mode, cycles);
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0b1000_0000) != 0;
    cpu.flag_v = (value & 0b0100_0000) != 0;
}
