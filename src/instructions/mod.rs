//! # Instruction Implementations
//!
//! The 56 documented 6502 operations, organized by category. Each is a
//! standalone function taking the CPU, the decoded addressing mode where one
//! applies, and the run's cycle accountant. Operand consumption goes through
//! the CPU's fetch primitives, so PC and the cycle count stay consistent
//! without any per-instruction bookkeeping.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **stack**: PHA, PHP, PLA, PLP
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, BRK, RTI, NOP
//! - **flags**: CLC, SEC, CLI, SEI, CLV, CLD, SED

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
