//! # Increment and Decrement Instructions
//!
//! INC and DEC are read-modify-write: resolve the address through the store
//! path (unconditional index fix-up), read, spend one internal cycle on the
//! modify, write back. INX, INY, DEX, DEY are 2-cycle implied register
//! operations. All six set Z and N; none touch the carry.

use crate::addressing::AddressingMode;
use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// INC: increments the byte at the effective address, wrapping. Flags: Z, N.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let addr = cpu.store_address(mode, cycles);
    let value = cpu.read_byte(addr, cycles).wrapping_add(1);
    cycles.tick(1); // internal modify cycle
    cpu.write_byte(addr, value, cycles);
    cpu.set_nz(value);
}

/// DEC: decrements the byte at the effective address, wrapping. Flags: Z, N.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let addr = cpu.store_address(mode, cycles);
    let value = cpu.read_byte(addr, cycles).wrapping_sub(1);
    cycles.tick(1);
    cpu.write_byte(addr, value, cycles);
    cpu.set_nz(value);
}

/// INX: increments the X register, wrapping. Flags: Z, N.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);
}

/// INY: increments the Y register, wrapping. Flags: Z, N.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);
}

/// DEX: decrements the X register, wrapping. Flags: Z, N.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);
}

/// DEY: decrements the Y register, wrapping. Flags: Z, N.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);
}
