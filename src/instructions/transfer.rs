//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All implied mode, 2 cycles: the opcode
//! fetch plus one internal cycle. Every transfer sets Z and N from the
//! destination except TXS, which touches no flags.

use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// TAX: copies the accumulator to X. Flags: Z, N.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.x = cpu.a;
    cpu.set_nz(cpu.x);
}

/// TAY: copies the accumulator to Y. Flags: Z, N.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.y = cpu.a;
    cpu.set_nz(cpu.y);
}

/// TXA: copies X to the accumulator. Flags: Z, N.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.a = cpu.x;
    cpu.set_nz(cpu.a);
}

/// TYA: copies Y to the accumulator. Flags: Z, N.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.a = cpu.y;
    cpu.set_nz(cpu.a);
}

/// TSX: copies the stack pointer to X. Flags: Z, N.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.x = cpu.sp;
    cpu.set_nz(cpu.x);
}

/// TXS: copies X to the stack pointer. No flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.sp = cpu.x;
}
