//! # Opcode Decode Table
//!
//! The complete 256-entry decode table, the single source of truth for all
//! 6502 instruction metadata. Decode is a total function: every opcode byte
//! maps to an (operation, addressing mode, base cycle cost) triple, with the
//! 105 undocumented opcodes carrying the [`Operation::Illegal`] tag so the
//! execution loop can report them without a dispatch special case.
//!
//! The table covers:
//! - **151 documented instructions** - official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - marked with the "???" mnemonic
//!
//! `base_cycles` is the minimum cost of the instruction; the conditional
//! page-crossing and branch penalties are charged dynamically by the
//! addressing resolver and branch logic, never stored here.

use crate::addressing::AddressingMode;

/// Operation performed by an instruction, independent of addressing mode.
///
/// One variant per documented 6502 mnemonic, plus [`Illegal`](Self::Illegal)
/// for the undocumented gaps in the opcode space. The execution loop
/// dispatches on this tag; flag semantics for a given operation are identical
/// across all of its addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode; reported and skipped by the execution loop.
    Illegal,
}

/// Static metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Three-letter mnemonic, "???" for undocumented opcodes.
    pub mnemonic: &'static str,

    /// Operation tag the execution loop dispatches on.
    pub operation: Operation,

    /// How operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Minimum cycle cost; conditional penalties are charged dynamically.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
        size_bytes,
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    operation: Operation::Illegal,
    addressing_mode: AddressingMode::Implicit,
    base_cycles: 0,
    size_bytes: 1,
};

use crate::addressing::AddressingMode as AM;
use self::Operation as Op;

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use emu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Op::Brk, AM::Implicit, 7, 1),    // 0x00
    op("ORA", Op::Ora, AM::IndirectX, 6, 2),   // 0x01
    ILLEGAL,                                   // 0x02
    ILLEGAL,                                   // 0x03
    ILLEGAL,                                   // 0x04
    op("ORA", Op::Ora, AM::ZeroPage, 3, 2),    // 0x05
    op("ASL", Op::Asl, AM::ZeroPage, 5, 2),    // 0x06
    ILLEGAL,                                   // 0x07
    op("PHP", Op::Php, AM::Implicit, 3, 1),    // 0x08
    op("ORA", Op::Ora, AM::Immediate, 2, 2),   // 0x09
    op("ASL", Op::Asl, AM::Accumulator, 2, 1), // 0x0A
    ILLEGAL,                                   // 0x0B
    ILLEGAL,                                   // 0x0C
    op("ORA", Op::Ora, AM::Absolute, 4, 3),    // 0x0D
    op("ASL", Op::Asl, AM::Absolute, 6, 3),    // 0x0E
    ILLEGAL,                                   // 0x0F
    op("BPL", Op::Bpl, AM::Relative, 2, 2),    // 0x10
    op("ORA", Op::Ora, AM::IndirectY, 5, 2),   // 0x11
    ILLEGAL,                                   // 0x12
    ILLEGAL,                                   // 0x13
    ILLEGAL,                                   // 0x14
    op("ORA", Op::Ora, AM::ZeroPageX, 4, 2),   // 0x15
    op("ASL", Op::Asl, AM::ZeroPageX, 6, 2),   // 0x16
    ILLEGAL,                                   // 0x17
    op("CLC", Op::Clc, AM::Implicit, 2, 1),    // 0x18
    op("ORA", Op::Ora, AM::AbsoluteY, 4, 3),   // 0x19
    ILLEGAL,                                   // 0x1A
    ILLEGAL,                                   // 0x1B
    ILLEGAL,                                   // 0x1C
    op("ORA", Op::Ora, AM::AbsoluteX, 4, 3),   // 0x1D
    op("ASL", Op::Asl, AM::AbsoluteX, 7, 3),   // 0x1E
    ILLEGAL,                                   // 0x1F
    op("JSR", Op::Jsr, AM::Absolute, 6, 3),    // 0x20
    op("AND", Op::And, AM::IndirectX, 6, 2),   // 0x21
    ILLEGAL,                                   // 0x22
    ILLEGAL,                                   // 0x23
    op("BIT", Op::Bit, AM::ZeroPage, 3, 2),    // 0x24
    op("AND", Op::And, AM::ZeroPage, 3, 2),    // 0x25
    op("ROL", Op::Rol, AM::ZeroPage, 5, 2),    // 0x26
    ILLEGAL,                                   // 0x27
    op("PLP", Op::Plp, AM::Implicit, 4, 1),    // 0x28
    op("AND", Op::And, AM::Immediate, 2, 2),   // 0x29
    op("ROL", Op::Rol, AM::Accumulator, 2, 1), // 0x2A
    ILLEGAL,                                   // 0x2B
    op("BIT", Op::Bit, AM::Absolute, 4, 3),    // 0x2C
    op("AND", Op::And, AM::Absolute, 4, 3),    // 0x2D
    op("ROL", Op::Rol, AM::Absolute, 6, 3),    // 0x2E
    ILLEGAL,                                   // 0x2F
    op("BMI", Op::Bmi, AM::Relative, 2, 2),    // 0x30
    op("AND", Op::And, AM::IndirectY, 5, 2),   // 0x31
    ILLEGAL,                                   // 0x32
    ILLEGAL,                                   // 0x33
    ILLEGAL,                                   // 0x34
    op("AND", Op::And, AM::ZeroPageX, 4, 2),   // 0x35
    op("ROL", Op::Rol, AM::ZeroPageX, 6, 2),   // 0x36
    ILLEGAL,                                   // 0x37
    op("SEC", Op::Sec, AM::Implicit, 2, 1),    // 0x38
    op("AND", Op::And, AM::AbsoluteY, 4, 3),   // 0x39
    ILLEGAL,                                   // 0x3A
    ILLEGAL,                                   // 0x3B
    ILLEGAL,                                   // 0x3C
    op("AND", Op::And, AM::AbsoluteX, 4, 3),   // 0x3D
    op("ROL", Op::Rol, AM::AbsoluteX, 7, 3),   // 0x3E
    ILLEGAL,                                   // 0x3F
    op("RTI", Op::Rti, AM::Implicit, 6, 1),    // 0x40
    op("EOR", Op::Eor, AM::IndirectX, 6, 2),   // 0x41
    ILLEGAL,                                   // 0x42
    ILLEGAL,                                   // 0x43
    ILLEGAL,                                   // 0x44
    op("EOR", Op::Eor, AM::ZeroPage, 3, 2),    // 0x45
    op("LSR", Op::Lsr, AM::ZeroPage, 5, 2),    // 0x46
    ILLEGAL,                                   // 0x47
    op("PHA", Op::Pha, AM::Implicit, 3, 1),    // 0x48
    op("EOR", Op::Eor, AM::Immediate, 2, 2),   // 0x49
    op("LSR", Op::Lsr, AM::Accumulator, 2, 1), // 0x4A
    ILLEGAL,                                   // 0x4B
    op("JMP", Op::Jmp, AM::Absolute, 3, 3),    // 0x4C
    op("EOR", Op::Eor, AM::Absolute, 4, 3),    // 0x4D
    op("LSR", Op::Lsr, AM::Absolute, 6, 3),    // 0x4E
    ILLEGAL,                                   // 0x4F
    op("BVC", Op::Bvc, AM::Relative, 2, 2),    // 0x50
    op("EOR", Op::Eor, AM::IndirectY, 5, 2),   // 0x51
    ILLEGAL,                                   // 0x52
    ILLEGAL,                                   // 0x53
    ILLEGAL,                                   // 0x54
    op("EOR", Op::Eor, AM::ZeroPageX, 4, 2),   // 0x55
    op("LSR", Op::Lsr, AM::ZeroPageX, 6, 2),   // 0x56
    ILLEGAL,                                   // 0x57
    op("CLI", Op::Cli, AM::Implicit, 2, 1),    // 0x58
    op("EOR", Op::Eor, AM::AbsoluteY, 4, 3),   // 0x59
    ILLEGAL,                                   // 0x5A
    ILLEGAL,                                   // 0x5B
    ILLEGAL,                                   // 0x5C
    op("EOR", Op::Eor, AM::AbsoluteX, 4, 3),   // 0x5D
    op("LSR", Op::Lsr, AM::AbsoluteX, 7, 3),   // 0x5E
    ILLEGAL,                                   // 0x5F
    op("RTS", Op::Rts, AM::Implicit, 6, 1),    // 0x60
    op("ADC", Op::Adc, AM::IndirectX, 6, 2),   // 0x61
    ILLEGAL,                                   // 0x62
    ILLEGAL,                                   // 0x63
    ILLEGAL,                                   // 0x64
    op("ADC", Op::Adc, AM::ZeroPage, 3, 2),    // 0x65
    op("ROR", Op::Ror, AM::ZeroPage, 5, 2),    // 0x66
    ILLEGAL,                                   // 0x67
    op("PLA", Op::Pla, AM::Implicit, 4, 1),    // 0x68
    op("ADC", Op::Adc, AM::Immediate, 2, 2),   // 0x69
    op("ROR", Op::Ror, AM::Accumulator, 2, 1), // 0x6A
    ILLEGAL,                                   // 0x6B
    op("JMP", Op::Jmp, AM::Indirect, 5, 3),    // 0x6C
    op("ADC", Op::Adc, AM::Absolute, 4, 3),    // 0x6D
    op("ROR", Op::Ror, AM::Absolute, 6, 3),    // 0x6E
    ILLEGAL,                                   // 0x6F
    op("BVS", Op::Bvs, AM::Relative, 2, 2),    // 0x70
    op("ADC", Op::Adc, AM::IndirectY, 5, 2),   // 0x71
    ILLEGAL,                                   // 0x72
    ILLEGAL,                                   // 0x73
    ILLEGAL,                                   // 0x74
    op("ADC", Op::Adc, AM::ZeroPageX, 4, 2),   // 0x75
    op("ROR", Op::Ror, AM::ZeroPageX, 6, 2),   // 0x76
    ILLEGAL,                                   // 0x77
    op("SEI", Op::Sei, AM::Implicit, 2, 1),    // 0x78
    op("ADC", Op::Adc, AM::AbsoluteY, 4, 3),   // 0x79
    ILLEGAL,                                   // 0x7A
    ILLEGAL,                                   // 0x7B
    ILLEGAL,                                   // 0x7C
    op("ADC", Op::Adc, AM::AbsoluteX, 4, 3),   // 0x7D
    op("ROR", Op::Ror, AM::AbsoluteX, 7, 3),   // 0x7E
    ILLEGAL,                                   // 0x7F
    ILLEGAL,                                   // 0x80
    op("STA", Op::Sta, AM::IndirectX, 6, 2),   // 0x81
    ILLEGAL,                                   // 0x82
    ILLEGAL,                                   // 0x83
    op("STY", Op::Sty, AM::ZeroPage, 3, 2),    // 0x84
    op("STA", Op::Sta, AM::ZeroPage, 3, 2),    // 0x85
    op("STX", Op::Stx, AM::ZeroPage, 3, 2),    // 0x86
    ILLEGAL,                                   // 0x87
    op("DEY", Op::Dey, AM::Implicit, 2, 1),    // 0x88
    ILLEGAL,                                   // 0x89
    op("TXA", Op::Txa, AM::Implicit, 2, 1),    // 0x8A
    ILLEGAL,                                   // 0x8B
    op("STY", Op::Sty, AM::Absolute, 4, 3),    // 0x8C
    op("STA", Op::Sta, AM::Absolute, 4, 3),    // 0x8D
    op("STX", Op::Stx, AM::Absolute, 4, 3),    // 0x8E
    ILLEGAL,                                   // 0x8F
    op("BCC", Op::Bcc, AM::Relative, 2, 2),    // 0x90
    op("STA", Op::Sta, AM::IndirectY, 6, 2),   // 0x91
    ILLEGAL,                                   // 0x92
    ILLEGAL,                                   // 0x93
    op("STY", Op::Sty, AM::ZeroPageX, 4, 2),   // 0x94
    op("STA", Op::Sta, AM::ZeroPageX, 4, 2),   // 0x95
    op("STX", Op::Stx, AM::ZeroPageY, 4, 2),   // 0x96
    ILLEGAL,                                   // 0x97
    op("TYA", Op::Tya, AM::Implicit, 2, 1),    // 0x98
    op("STA", Op::Sta, AM::AbsoluteY, 5, 3),   // 0x99
    op("TXS", Op::Txs, AM::Implicit, 2, 1),    // 0x9A
    ILLEGAL,                                   // 0x9B
    ILLEGAL,                                   // 0x9C
    op("STA", Op::Sta, AM::AbsoluteX, 5, 3),   // 0x9D
    ILLEGAL,                                   // 0x9E
    ILLEGAL,                                   // 0x9F
    op("LDY", Op::Ldy, AM::Immediate, 2, 2),   // 0xA0
    op("LDA", Op::Lda, AM::IndirectX, 6, 2),   // 0xA1
    op("LDX", Op::Ldx, AM::Immediate, 2, 2),   // 0xA2
    ILLEGAL,                                   // 0xA3
    op("LDY", Op::Ldy, AM::ZeroPage, 3, 2),    // 0xA4
    op("LDA", Op::Lda, AM::ZeroPage, 3, 2),    // 0xA5
    op("LDX", Op::Ldx, AM::ZeroPage, 3, 2),    // 0xA6
    ILLEGAL,                                   // 0xA7
    op("TAY", Op::Tay, AM::Implicit, 2, 1),    // 0xA8
    op("LDA", Op::Lda, AM::Immediate, 2, 2),   // 0xA9
    op("TAX", Op::Tax, AM::Implicit, 2, 1),    // 0xAA
    ILLEGAL,                                   // 0xAB
    op("LDY", Op::Ldy, AM::Absolute, 4, 3),    // 0xAC
    op("LDA", Op::Lda, AM::Absolute, 4, 3),    // 0xAD
    op("LDX", Op::Ldx, AM::Absolute, 4, 3),    // 0xAE
    ILLEGAL,                                   // 0xAF
    op("BCS", Op::Bcs, AM::Relative, 2, 2),    // 0xB0
    op("LDA", Op::Lda, AM::IndirectY, 5, 2),   // 0xB1
    ILLEGAL,                                   // 0xB2
    ILLEGAL,                                   // 0xB3
    op("LDY", Op::Ldy, AM::ZeroPageX, 4, 2),   // 0xB4
    op("LDA", Op::Lda, AM::ZeroPageX, 4, 2),   // 0xB5
    op("LDX", Op::Ldx, AM::ZeroPageY, 4, 2),   // 0xB6
    ILLEGAL,                                   // 0xB7
    op("CLV", Op::Clv, AM::Implicit, 2, 1),    // 0xB8
    op("LDA", Op::Lda, AM::AbsoluteY, 4, 3),   // 0xB9
    op("TSX", Op::Tsx, AM::Implicit, 2, 1),    // 0xBA
    ILLEGAL,                                   // 0xBB
    op("LDY", Op::Ldy, AM::AbsoluteX, 4, 3),   // 0xBC
    op("LDA", Op::Lda, AM::AbsoluteX, 4, 3),   // 0xBD
    op("LDX", Op::Ldx, AM::AbsoluteY, 4, 3),   // 0xBE
    ILLEGAL,                                   // 0xBF
    op("CPY", Op::Cpy, AM::Immediate, 2, 2),   // 0xC0
    op("CMP", Op::Cmp, AM::IndirectX, 6, 2),   // 0xC1
    ILLEGAL,                                   // 0xC2
    ILLEGAL,                                   // 0xC3
    op("CPY", Op::Cpy, AM::ZeroPage, 3, 2),    // 0xC4
    op("CMP", Op::Cmp, AM::ZeroPage, 3, 2),    // 0xC5
    op("DEC", Op::Dec, AM::ZeroPage, 5, 2),    // 0xC6
    ILLEGAL,                                   // 0xC7
    op("INY", Op::Iny, AM::Implicit, 2, 1),    // 0xC8
    op("CMP", Op::Cmp, AM::Immediate, 2, 2),   // 0xC9
    op("DEX", Op::Dex, AM::Implicit, 2, 1),    // 0xCA
    ILLEGAL,                                   // 0xCB
    op("CPY", Op::Cpy, AM::Absolute, 4, 3),    // 0xCC
    op("CMP", Op::Cmp, AM::Absolute, 4, 3),    // 0xCD
    op("DEC", Op::Dec, AM::Absolute, 6, 3),    // 0xCE
    ILLEGAL,                                   // 0xCF
    op("BNE", Op::Bne, AM::Relative, 2, 2),    // 0xD0
    op("CMP", Op::Cmp, AM::IndirectY, 5, 2),   // 0xD1
    ILLEGAL,                                   // 0xD2
    ILLEGAL,                                   // 0xD3
    ILLEGAL,                                   // 0xD4
    op("CMP", Op::Cmp, AM::ZeroPageX, 4, 2),   // 0xD5
    op("DEC", Op::Dec, AM::ZeroPageX, 6, 2),   // 0xD6
    ILLEGAL,                                   // 0xD7
    op("CLD", Op::Cld, AM::Implicit, 2, 1),    // 0xD8
    op("CMP", Op::Cmp, AM::AbsoluteY, 4, 3),   // 0xD9
    ILLEGAL,                                   // 0xDA
    ILLEGAL,                                   // 0xDB
    ILLEGAL,                                   // 0xDC
    op("CMP", Op::Cmp, AM::AbsoluteX, 4, 3),   // 0xDD
    op("DEC", Op::Dec, AM::AbsoluteX, 7, 3),   // 0xDE
    ILLEGAL,                                   // 0xDF
    op("CPX", Op::Cpx, AM::Immediate, 2, 2),   // 0xE0
    op("SBC", Op::Sbc, AM::IndirectX, 6, 2),   // 0xE1
    ILLEGAL,                                   // 0xE2
    ILLEGAL,                                   // 0xE3
    op("CPX", Op::Cpx, AM::ZeroPage, 3, 2),    // 0xE4
    op("SBC", Op::Sbc, AM::ZeroPage, 3, 2),    // 0xE5
    op("INC", Op::Inc, AM::ZeroPage, 5, 2),    // 0xE6
    ILLEGAL,                                   // 0xE7
    op("INX", Op::Inx, AM::Implicit, 2, 1),    // 0xE8
    op("SBC", Op::Sbc, AM::Immediate, 2, 2),   // 0xE9
    op("NOP", Op::Nop, AM::Implicit, 2, 1),    // 0xEA
    ILLEGAL,                                   // 0xEB
    op("CPX", Op::Cpx, AM::Absolute, 4, 3),    // 0xEC
    op("SBC", Op::Sbc, AM::Absolute, 4, 3),    // 0xED
    op("INC", Op::Inc, AM::Absolute, 6, 3),    // 0xEE
    ILLEGAL,                                   // 0xEF
    op("BEQ", Op::Beq, AM::Relative, 2, 2),    // 0xF0
    op("SBC", Op::Sbc, AM::IndirectY, 5, 2),   // 0xF1
    ILLEGAL,                                   // 0xF2
    ILLEGAL,                                   // 0xF3
    ILLEGAL,                                   // 0xF4
    op("SBC", Op::Sbc, AM::ZeroPageX, 4, 2),   // 0xF5
    op("INC", Op::Inc, AM::ZeroPageX, 6, 2),   // 0xF6
    ILLEGAL,                                   // 0xF7
    op("SED", Op::Sed, AM::Implicit, 2, 1),    // 0xF8
    op("SBC", Op::Sbc, AM::AbsoluteY, 4, 3),   // 0xF9
    ILLEGAL,                                   // 0xFA
    ILLEGAL,                                   // 0xFB
    ILLEGAL,                                   // 0xFC
    op("SBC", Op::Sbc, AM::AbsoluteX, 4, 3),   // 0xFD
    op("INC", Op::Inc, AM::AbsoluteX, 7, 3),   // 0xFE
    ILLEGAL,                                   // 0xFF
];
