//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the 6502 register file and status flags and owns
//! the memory bus. Execution is budgeted: [`CPU::execute`] creates one
//! [`Cycles`] accountant for the run and loops fetch-decode-execute until the
//! charged total reaches the request. The budget is consulted only between
//! instructions; a started instruction always completes, so the delivered
//! total can exceed the request by at most the cost of the longest
//! instruction (7 cycles).
//!
//! ## State machine
//!
//! A freshly constructed CPU is not in a defined state. [`CPU::reset`] is the
//! one entry point that establishes one: PC at the reset location, SP at its
//! initial value, registers and flags cleared, memory re-initialized. Calling
//! `execute` before `reset` is a precondition violation, caught by a debug
//! assertion.

use crate::addressing::page_crossed;
use crate::cycles::Cycles;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::memory::MemoryBus;
use crate::opcodes::{Operation, OPCODE_TABLE};
use crate::UnhandledOpcode;

/// Address execution starts from after reset.
///
/// Reset points PC directly at this location; the three bytes at
/// `0xFFFC..=0xFFFE` are exactly enough for an absolute `JMP` when an
/// embedder wants vectored startup instead of inline code.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Location BRK loads the interrupt handler address from (little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack region; the stack pointer offsets into this page.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value established by reset.
const INITIAL_SP: u8 = 0xFD;

/// 6502 CPU state and execution context.
///
/// Contains all processor state (registers, flags, cycle total) and owns the
/// memory bus, generic over the [`MemoryBus`] implementation. One CPU owns one
/// bus exclusively; independent machines need disjoint CPU/bus pairs.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset();
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (STACK_PAGE + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Carry flag (set on unsigned overflow/no-borrow)
    pub(crate) flag_c: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Decimal mode flag (tracked only; ADC/SBC stay binary)
    pub(crate) flag_d: bool,

    /// Break flag (set in pushed status by BRK/PHP, not by hardware state)
    pub(crate) flag_b: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Total cycles charged across all runs since reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Unrecognized-opcode records since reset (the diagnostic side-channel)
    unhandled: Vec<UnhandledOpcode>,

    /// Set by reset; execution before reset is a precondition violation
    ready: bool,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU owning the given memory bus.
    ///
    /// The CPU is not yet in a defined state: call [`reset`](Self::reset)
    /// before executing anything.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            cycles: 0,
            memory,
            unhandled: Vec::new(),
            ready: false,
        }
    }

    /// Brings the processor to its defined starting state.
    ///
    /// - PC points at [`RESET_VECTOR`] (0xFFFC); execution starts there
    /// - SP is set to 0xFD (descending stack in page one)
    /// - A, X, Y and all seven flags are cleared
    /// - The memory bus is re-initialized via [`MemoryBus::reset`]
    /// - The lifetime cycle counter and unhandled-opcode records are cleared
    ///
    /// Load program bytes *after* reset; a `FlatMemory` bus zero-fills here.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset();
    ///
    /// cpu.memory_mut().write(0xFFFC, 0xA9); // LDA #$01
    /// cpu.memory_mut().write(0xFFFD, 0x01);
    /// cpu.execute(2);
    /// assert_eq!(cpu.a(), 0x01);
    /// ```
    pub fn reset(&mut self) {
        self.pc = RESET_VECTOR;
        self.sp = INITIAL_SP;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;
        self.cycles = 0;
        self.unhandled.clear();
        self.memory.reset();
        self.ready = true;
    }

    /// Runs the fetch-decode-execute loop until at least `cycles_requested`
    /// cycles have been charged.
    ///
    /// Returns the cycles actually charged, which may exceed the request by
    /// up to the cost of the final instruction: the budget is checked only
    /// between instructions, never mid-instruction. Useful for frame-locked
    /// execution (e.g. 29780 cycles per 60 Hz NTSC frame).
    ///
    /// # Preconditions
    ///
    /// [`reset`](Self::reset) must have been called; in debug builds this is
    /// asserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset();
    /// cpu.memory_mut().write(0xFFFC, 0xA9); // LDA #$42 - 2 cycles
    /// cpu.memory_mut().write(0xFFFD, 0x42);
    ///
    /// let used = cpu.execute(1); // LDA completes even though 1 was asked for
    /// assert_eq!(used, 2);
    /// ```
    pub fn execute(&mut self, cycles_requested: u64) -> u64 {
        debug_assert!(self.ready, "execute called before reset");

        let mut cycles = Cycles::new(cycles_requested);
        while !cycles.exhausted() {
            self.step_instruction(&mut cycles);
        }

        let used = cycles.used();
        self.cycles += used;
        used
    }

    /// Executes exactly one instruction and returns its cycle cost.
    ///
    /// Equivalent to `execute(1)`: a budget of one cycle admits one
    /// instruction, which then completes atomically.
    pub fn step(&mut self) -> u64 {
        self.execute(1)
    }

    /// Fetches, decodes, and executes a single instruction.
    fn step_instruction(&mut self, cycles: &mut Cycles) {
        let op_addr = self.pc;
        let opcode = self.fetch_byte(cycles);
        let metadata = &OPCODE_TABLE[opcode as usize];
        let mode = metadata.addressing_mode;

        match metadata.operation {
            Operation::Lda => load_store::execute_lda(self, mode, cycles),
            Operation::Ldx => load_store::execute_ldx(self, mode, cycles),
            Operation::Ldy => load_store::execute_ldy(self, mode, cycles),
            Operation::Sta => load_store::execute_sta(self, mode, cycles),
            Operation::Stx => load_store::execute_stx(self, mode, cycles),
            Operation::Sty => load_store::execute_sty(self, mode, cycles),

            Operation::Tax => transfer::execute_tax(self, cycles),
            Operation::Tay => transfer::execute_tay(self, cycles),
            Operation::Txa => transfer::execute_txa(self, cycles),
            Operation::Tya => transfer::execute_tya(self, cycles),
            Operation::Tsx => transfer::execute_tsx(self, cycles),
            Operation::Txs => transfer::execute_txs(self, cycles),

            Operation::Pha => stack::execute_pha(self, cycles),
            Operation::Php => stack::execute_php(self, cycles),
            Operation::Pla => stack::execute_pla(self, cycles),
            Operation::Plp => stack::execute_plp(self, cycles),

            Operation::Adc => alu::execute_adc(self, mode, cycles),
            Operation::Sbc => alu::execute_sbc(self, mode, cycles),
            Operation::And => alu::execute_and(self, mode, cycles),
            Operation::Ora => alu::execute_ora(self, mode, cycles),
            Operation::Eor => alu::execute_eor(self, mode, cycles),
            Operation::Cmp => alu::execute_cmp(self, mode, cycles),
            Operation::Cpx => alu::execute_cpx(self, mode, cycles),
            Operation::Cpy => alu::execute_cpy(self, mode, cycles),
            Operation::Bit => alu::execute_bit(self, mode, cycles),

            Operation::Inc => inc_dec::execute_inc(self, mode, cycles),
            Operation::Dec => inc_dec::execute_dec(self, mode, cycles),
            Operation::Inx => inc_dec::execute_inx(self, cycles),
            Operation::Iny => inc_dec::execute_iny(self, cycles),
            Operation::Dex => inc_dec::execute_dex(self, cycles),
            Operation::Dey => inc_dec::execute_dey(self, cycles),

            Operation::Asl => shifts::execute_asl(self, mode, cycles),
            Operation::Lsr => shifts::execute_lsr(self, mode, cycles),
            Operation::Rol => shifts::execute_rol(self, mode, cycles),
            Operation::Ror => shifts::execute_ror(self, mode, cycles),

            Operation::Bcc => branches::execute_bcc(self, cycles),
            Operation::Bcs => branches::execute_bcs(self, cycles),
            Operation::Beq => branches::execute_beq(self, cycles),
            Operation::Bne => branches::execute_bne(self, cycles),
            Operation::Bmi => branches::execute_bmi(self, cycles),
            Operation::Bpl => branches::execute_bpl(self, cycles),
            Operation::Bvc => branches::execute_bvc(self, cycles),
            Operation::Bvs => branches::execute_bvs(self, cycles),

            Operation::Jmp => control::execute_jmp(self, mode, cycles),
            Operation::Jsr => control::execute_jsr(self, cycles),
            Operation::Rts => control::execute_rts(self, cycles),
            Operation::Brk => control::execute_brk(self, cycles),
            Operation::Rti => control::execute_rti(self, cycles),
            Operation::Nop => control::execute_nop(self, cycles),

            Operation::Clc => flags::execute_clc(self, cycles),
            Operation::Sec => flags::execute_sec(self, cycles),
            Operation::Cli => flags::execute_cli(self, cycles),
            Operation::Sei => flags::execute_sei(self, cycles),
            Operation::Clv => flags::execute_clv(self, cycles),
            Operation::Cld => flags::execute_cld(self, cycles),
            Operation::Sed => flags::execute_sed(self, cycles),

            Operation::Illegal => self.record_unhandled(opcode, op_addr),
        }
    }

    /// Reports an unrecognized opcode and continues.
    ///
    /// Only the opcode fetch has been charged at this point; the byte is
    /// treated as a cycle-neutral no-operation so a run over unknown bytes
    /// still makes budget progress.
    fn record_unhandled(&mut self, opcode: u8, pc: u16) {
        let record = UnhandledOpcode { opcode, pc };
        log::warn!("{}", record);
        self.unhandled.push(record);
    }

    // ========== Fetch and access primitives ==========
    //
    // Every instruction byte flows through fetch_byte, which is what keeps PC
    // and the cycle accountant consistent by construction.

    /// Reads the byte at PC, advances PC, charges 1 cycle.
    pub(crate) fn fetch_byte(&mut self, cycles: &mut Cycles) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        cycles.tick(1);
        value
    }

    /// Reads a little-endian word via two PC-relative fetches; 2 cycles.
    pub(crate) fn fetch_word(&mut self, cycles: &mut Cycles) -> u16 {
        let lo = self.fetch_byte(cycles) as u16;
        let hi = self.fetch_byte(cycles) as u16;
        (hi << 8) | lo
    }

    /// Reads from a resolved address without touching PC; 1 cycle.
    pub(crate) fn read_byte(&mut self, addr: u16, cycles: &mut Cycles) -> u8 {
        cycles.tick(1);
        self.memory.read(addr)
    }

    /// Writes to a resolved address; 1 cycle.
    pub(crate) fn write_byte(&mut self, addr: u16, value: u8, cycles: &mut Cycles) {
        cycles.tick(1);
        self.memory.write(addr, value);
    }

    // ========== Stack primitives ==========

    /// Pushes a byte at STACK_PAGE + SP, then decrements SP (wrapping).
    pub(crate) fn push_byte(&mut self, value: u8, cycles: &mut Cycles) {
        self.write_byte(STACK_PAGE | self.sp as u16, value, cycles);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at STACK_PAGE + SP.
    pub(crate) fn pull_byte(&mut self, cycles: &mut Cycles) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(STACK_PAGE | self.sp as u16, cycles)
    }

    /// Pushes a word, high byte first, so the low byte sits at the lower
    /// stack address.
    pub(crate) fn push_word(&mut self, value: u16, cycles: &mut Cycles) {
        self.push_byte((value >> 8) as u8, cycles);
        self.push_byte((value & 0xFF) as u8, cycles);
    }

    /// Pulls a word pushed by [`push_word`](Self::push_word).
    pub(crate) fn pull_word(&mut self, cycles: &mut Cycles) -> u16 {
        let lo = self.pull_byte(cycles) as u16;
        let hi = self.pull_byte(cycles) as u16;
        (hi << 8) | lo
    }

    // ========== Flag helpers ==========

    /// Sets Z and N from a result byte: Z exactly when the value is zero,
    /// N exactly when bit 7 is set. No other flag is touched.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// Relative branch shared by all eight conditional branches.
    ///
    /// The offset byte is always fetched (2 cycles total with the opcode);
    /// a taken branch costs one more, plus another if the target lands in a
    /// different page than the instruction following the branch.
    pub(crate) fn branch_if(&mut self, taken: bool, cycles: &mut Cycles) {
        let offset = self.fetch_byte(cycles) as i8;
        if taken {
            let target = self.pc.wrapping_add_signed(offset as i16);
            cycles.tick(1);
            if page_crossed(self.pc, target) {
                cycles.tick(1);
            }
            self.pc = target;
        }
    }

    // ========== Register getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is STACK_PAGE + SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns total cycles charged since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the status register as a packed byte (NV1B DIZC).
    ///
    /// Bit 5 always reads as 1, matching the hardware's unused line.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Sets N, V, D, I, Z, C from a packed status byte.
    ///
    /// The B flag and bit 5 in the byte are ignored, which is exactly what
    /// PLP and RTI require of a status popped off the stack.
    pub fn set_status(&mut self, status: u8) {
        self.flag_n = (status & 0b1000_0000) != 0;
        self.flag_v = (status & 0b0100_0000) != 0;
        self.flag_d = (status & 0b0000_1000) != 0;
        self.flag_i = (status & 0b0000_0100) != 0;
        self.flag_z = (status & 0b0000_0010) != 0;
        self.flag_c = (status & 0b0000_0001) != 0;
    }

    // ========== Status flag getters ==========

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // ========== Harness setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    // ========== Bus and diagnostics ==========

    /// Shared access to the owned memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the owned memory bus.
    ///
    /// This is the program-loading boundary: loaders write opcode and operand
    /// bytes through [`MemoryBus::write`] before execution starts.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Unrecognized-opcode records accumulated since the last reset.
    pub fn unhandled_opcodes(&self) -> &[UnhandledOpcode] {
        &self.unhandled
    }
}
