//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, BRK, RTI, NOP.
//!
//! JSR and RTS follow the hardware return convention: JSR pushes the address
//! of the instruction after itself minus one, and RTS adds one back after
//! pulling. BRK is the software-interrupt path only; hardware interrupt
//! wiring is outside this crate.

use crate::addressing::AddressingMode;
use crate::cpu::IRQ_VECTOR;
use crate::cycles::Cycles;
use crate::memory::MemoryBus;
use crate::CPU;

/// JMP: assigns the operand address directly to PC. No flags, no stack.
///
/// Absolute (3 cycles) fetches the target; indirect (5 cycles) dereferences
/// a 16-bit pointer first. The NMOS indirect quirk is preserved: a pointer
/// at the end of a page, e.g. `JMP ($10FF)`, reads its high byte from
/// `$1000`, not `$1100`.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    cycles: &mut Cycles,
) {
    let target = match mode {
        AddressingMode::Absolute => cpu.fetch_word(cycles),
        AddressingMode::Indirect => {
            let ptr = cpu.fetch_word(cycles);
            let lo = cpu.read_byte(ptr, cycles) as u16;
            // High byte wraps within the pointer's page
            let hi_addr = if (ptr & 0x00FF) == 0x00FF {
                ptr & 0xFF00
            } else {
                ptr.wrapping_add(1)
            };
            let hi = cpu.read_byte(hi_addr, cycles) as u16;
            (hi << 8) | lo
        }
        _ => unreachable!("invalid addressing mode for JMP: {:?}", mode),
    };

    cpu.pc = target;
}

/// JSR: jumps to an absolute target, saving the return point on the stack.
///
/// Pushes the address of the following instruction minus one, high byte
/// first, then spends one internal cycle before taking the jump. 6 cycles.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    let target = cpu.fetch_word(cycles);
    // PC now points at the next instruction; the stack holds that minus one
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr, cycles);
    cycles.tick(1);
    cpu.pc = target;
}

/// RTS: pulls the address JSR saved and resumes one byte past it. 6 cycles.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(2);
    let return_addr = cpu.pull_word(cycles);
    cpu.pc = return_addr.wrapping_add(1);
    cycles.tick(1);
}

/// BRK: forces a software interrupt. 7 cycles.
///
/// Pushes PC+1 (the byte after BRK's padding byte, a hardware quirk), then
/// the status with B and bit 5 set, sets the interrupt-disable flag, and
/// loads PC from the vector at `0xFFFE/F`. The live B flag itself is not
/// changed; B exists only in the pushed byte.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1); // padding byte read
    let return_addr = cpu.pc.wrapping_add(1);
    cpu.push_word(return_addr, cycles);

    let status = cpu.status() | 0b0011_0000;
    cpu.push_byte(status, cycles);

    cpu.flag_i = true;

    let lo = cpu.read_byte(IRQ_VECTOR, cycles) as u16;
    let hi = cpu.read_byte(IRQ_VECTOR.wrapping_add(1), cycles) as u16;
    cpu.pc = (hi << 8) | lo;
}

/// RTI: returns from an interrupt. 6 cycles.
///
/// Pulls the status (B and bit 5 ignored), then the return PC. Unlike RTS,
/// no increment: BRK pushed the address to resume at directly.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(2);
    let status = cpu.pull_byte(cycles);
    cpu.set_status(status);
    cpu.pc = cpu.pull_word(cycles);
}

/// NOP: spends the internal cycle and nothing else. 2 cycles.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>, cycles: &mut Cycles) {
    cycles.tick(1);
}
