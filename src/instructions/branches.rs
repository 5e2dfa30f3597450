//! # Branch Instructions
//!
//! The eight conditional branches, all relative mode with a signed 8-bit
//! offset applied to the PC after the branch instruction. Shared timing:
//! 2 cycles not taken, 3 taken, 4 when the target lands in a different page
//! than the following instruction. None affect flags.
//!
//! Each branch is a condition over one flag; the fetch, target arithmetic,
//! and penalty accounting live in [`CPU::branch_if`].

use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// BCC: branch if carry clear.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = !cpu.flag_c;
    cpu.branch_if(taken, cycles);
}

/// BCS: branch if carry set.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = cpu.flag_c;
    cpu.branch_if(taken, cycles);
}

/// BEQ: branch if zero set.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = cpu.flag_z;
    cpu.branch_if(taken, cycles);
}

/// BNE: branch if zero clear.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = !cpu.flag_z;
    cpu.branch_if(taken, cycles);
}

/// BMI: branch if negative set.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = cpu.flag_n;
    cpu.branch_if(taken, cycles);
}

/// BPL: branch if negative clear.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = !cpu.flag_n;
    cpu.branch_if(taken, cycles);
}

/// BVC: branch if overflow clear.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = !cpu.flag_v;
    cpu.branch_if(taken, cycles);
}

/// BVS: branch if overflow set.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let taken = cpu.flag_v;
    cpu.branch_if(taken, cycles);
}
