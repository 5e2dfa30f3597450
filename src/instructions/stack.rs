//! # Stack Operations
//!
//! PHA, PHP, PLA, PLP. Pushes cost 3 cycles (fetch + write + internal),
//! pulls cost 4 (fetch + two internal + read). PHP pushes the status byte
//! with B and bit 5 set; PLP ignores those bits coming back, so the break
//! flag never round-trips through the stack.

use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// PHA: pushes the accumulator. No flags.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    let value = cpu.a;
    cpu.push_byte(value, cycles);
}

/// PHP: pushes the packed status with B and bit 5 set. No flags changed.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
    let status = cpu.status() | 0b0011_0000;
    cpu.push_byte(status, cycles);
}

/// PLA: pulls a byte into the accumulator. Flags: Z, N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(2);
    let value = cpu.pull_byte(cycles);
    cpu.a = value;
    cpu.set_nz(value);
}

/// PLP: pulls the status register, ignoring B and bit 5.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(2);
    let status = cpu.pull_byte(cycles);
    cpu.set_status(status);
}
