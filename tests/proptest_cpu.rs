//! Property-based tests for the engine's universally quantified invariants.

use emu6502::{Cycles, FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

/// Helper to create a reset CPU with execution redirected to 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset();
    cpu.set_pc(0x8000);
    cpu
}

proptest! {
    /// For every byte v, LDA #v loads A = v with Z = (v == 0) and
    /// N = (v & 0x80 != 0), directly from the reset location.
    #[test]
    fn prop_lda_immediate_flags(value in any::<u8>()) {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.reset();
        cpu.memory_mut().write(0xFFFC, 0xA9);
        cpu.memory_mut().write(0xFFFD, value);

        let used = cpu.execute(2);

        prop_assert_eq!(used, 2);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_n(), value & 0x80 != 0);
    }

    /// Zero-page,X arithmetic wraps within 8 bits for every base/index pair.
    #[test]
    fn prop_zero_page_x_wraps(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();

        cpu.memory_mut().write(0x8000, 0xB5); // LDA zp,X
        cpu.memory_mut().write(0x8001, base);
        let wrapped = base.wrapping_add(x) as u16;
        cpu.memory_mut().write(wrapped, value);
        cpu.set_x(x);

        let used = cpu.step();

        prop_assert_eq!(used, 4);
        prop_assert_eq!(cpu.a(), value);
    }

    /// A run never stops short of its budget, and over uniform 2-cycle NOPs
    /// it overshoots by at most one cycle.
    #[test]
    fn prop_execute_meets_budget(budget in 0u64..=400) {
        let mut cpu = setup_cpu();
        for addr in 0x8000u16..=0x80FF {
            cpu.memory_mut().write(addr, 0xEA); // NOP
        }

        let used = cpu.execute(budget);

        prop_assert!(used >= budget);
        prop_assert!(used - budget < 2);
    }

    /// Word writes round-trip through two independent byte reads.
    #[test]
    fn prop_write_word_round_trip(value in any::<u16>(), addr in 0u16..0xFFFF) {
        let mut mem = FlatMemory::new();
        let mut cycles = Cycles::new(2);

        mem.write_word(value, addr, &mut cycles);

        let lo = mem.read(addr) as u16;
        let hi = mem.read(addr.wrapping_add(1)) as u16;
        prop_assert_eq!((hi << 8) | lo, value);
        prop_assert_eq!(cycles.used(), 2);
    }

    /// ADC never desynchronizes the carry/result pair: A + M + C_in equals
    /// the 9-bit result encoded by (C_out, A').
    #[test]
    fn prop_adc_nine_bit_identity(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();

        cpu.memory_mut().write(0x8000, 0x69); // ADC #m
        cpu.memory_mut().write(0x8001, m);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.step();

        let expected = a as u16 + m as u16 + carry as u16;
        let encoded = ((cpu.flag_c() as u16) << 8) | cpu.a() as u16;
        prop_assert_eq!(encoded, expected);
        prop_assert_eq!(cpu.flag_z(), cpu.a() == 0);
        prop_assert_eq!(cpu.flag_n(), cpu.a() & 0x80 != 0);
    }

    /// Any undocumented byte is a reported 1-cycle no-op: registers and
    /// flags are untouched and exactly one record is produced.
    #[test]
    fn prop_unhandled_opcodes_preserve_state(
        opcode in proptest::sample::select(
            (0u16..=255)
                .map(|b| b as u8)
                .filter(|&b| emu6502::OPCODE_TABLE[b as usize].mnemonic == "???")
                .collect::<Vec<u8>>(),
        ),
        a in any::<u8>(),
        x in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();

        cpu.memory_mut().write(0x8000, opcode);
        cpu.set_a(a);
        cpu.set_x(x);

        let used = cpu.step();

        prop_assert_eq!(used, 1);
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.x(), x);
        prop_assert_eq!(cpu.unhandled_opcodes().len(), 1);
        prop_assert_eq!(cpu.unhandled_opcodes()[0].opcode, opcode);
        prop_assert_eq!(cpu.unhandled_opcodes()[0].pc, 0x8000);
    }
}
