//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED. All implied mode, 2 cycles, each
//! touching exactly one flag. There is no "set overflow" instruction; V is
//! only set by arithmetic, BIT, PLP, and RTI.

use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// CLC: clears the carry flag.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_c = false;
}

/// SEC: sets the carry flag.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_c = true;
}

/// CLI: clears the interrupt-disable flag.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_i = false;
}

/// SEI: sets the interrupt-disable flag.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_i = true;
}

/// CLV: clears the overflow flag.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_v = false;
}

/// CLD: clears the decimal mode flag.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_d = false;
}

/// SED: sets the decimal mode flag.
///
/// Tracked state only: ADC and SBC in this crate stay binary regardless.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    cpu.flag_d = true;
}
