//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR, each in accumulator and memory forms. The memory
//! forms are read-modify-write: the operand is read, modified during one
//! internal cycle, and written back to the same effective address. The bit
//! shifted out always lands in the carry flag.

use crate::addressing::AddressingMode;
use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// Applies a shift to the accumulator or to memory, depending on mode, and
/// sets C from the shifted-out bit and Z/N from the result.
fn shift_operand<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
    shift: fn(u8, bool) -> (u8, bool),
) {
    if mode == AddressingMode::Accumulator {
        cycles.tick(1);
        let (result, carry) = shift(cpu.a, cpu.flag_c);
        cpu.a = result;
        cpu.flag_c = carry;
        cpu.set_nz(result);
    } else {
        let addr = cpu.store_address(mode, cycles);
        let value = cpu.read_byte(addr, cycles);
        cycles.tick(1); // internal modify cycle
        let (result, carry) = shift(value, cpu.flag_c);
        cpu.write_byte(addr, result, cycles);
        cpu.flag_c = carry;
        cpu.set_nz(result);
    }
}

/// ASL: shifts left one bit; bit 7 moves to carry, bit 0 becomes 0.
/// Flags: C, Z, N.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    shift_operand(cpu, mode, cycles, |v, _| (v << 1, v & 0x80 != 0));
}

/// LSR: shifts right one bit; bit 0 moves to carry, bit 7 becomes 0.
/// Flags: C, Z, N (N always clears).
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    shift_operand(cpu, mode, cycles, |v, _| (v >> 1, v & 0x01 != 0));
}

/// ROL: rotates left through the carry; the old carry enters bit 0.
/// Flags: C, Z, N.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    shift_operand(cpu, mode, cycles, |v, c| {
        ((v << 1) | c as u8, v & 0x80 != 0)
    });
}

/// ROR: rotates right through the carry; the old carry enters bit 7.
/// Flags: C, Z, N.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    shift_operand(cpu, mode, cycles, |v, c| {
        ((v >> 1) | ((c as u8) << 7), v & 0x01 != 0)
    });
}
