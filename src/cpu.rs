//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, U, B, D, I, Z, C packed in [`StatusFlags`]
//! - **Instruction counter**: number of instructions executed since reset
//!
//! ## Execution Model
//!
//! Execution is cooperative; the host drives it:
//! - `step()`: service one pending interrupt or execute one instruction
//! - `run_for_steps()` / `run_until()`: step until a budget or stop condition
//! - `execute()`: step until a breakpoint, halt, self-loop or error
//!
//! `CPU` owns its bus and every mutation goes through `&mut self`. A host that
//! shares a CPU between threads must serialize access itself (for example
//! with a `Mutex`); calling into the core from two contexts mid-step is not
//! supported.

use std::collections::BTreeSet;

use log::{trace, warn};

use crate::instructions;
use crate::interrupts::CpuState;
use crate::{CpuConfig, ExecutionError, IllegalOpcodePolicy, MemoryBus, StatusFlags, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Why a run loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The step budget was used up.
    BudgetExhausted,
    /// The CPU was halted with [`CPU::halt`] before the run started.
    Halted,
    /// PC reached a breakpoint; the instruction there has not executed.
    Breakpoint(u16),
    /// An instruction jumped to itself (only with `stop_on_self_loop`).
    SelfLoop(u16),
    /// The caller's stop predicate returned true.
    Condition,
}

/// Summary of a run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Steps taken (instructions plus interrupt entries).
    pub steps: u64,
    /// Why the loop stopped.
    pub reason: StopReason,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepKind {
    Instruction,
    Interrupt,
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer and the memory bus it owns. It is generic over the memory
/// implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.status(), 0x24);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) status: StatusFlags,

    pub(crate) config: CpuConfig,

    pub(crate) state: CpuState,

    /// State to restore on each RTI, innermost handler last
    pub(crate) interrupted: Vec<CpuState>,

    /// Latched NMI request (edge)
    pub(crate) nmi_pending: bool,

    /// Latched IRQ request, held until serviced or cleared
    pub(crate) irq_pending: bool,

    pub(crate) halted: bool,

    /// Instructions executed since the last reset
    pub(crate) instructions: u64,

    pub(crate) breakpoints: BTreeSet<u16>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the default configuration and resets it.
    ///
    /// The program counter is loaded from the reset vector at 0xFFFC/0xFFFD,
    /// so the program image and vector should be in place beforehand.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration and resets it.
    ///
    /// ```
    /// use cpu6502::{CpuConfig, FlatMemory, CPU};
    ///
    /// let cpu = CPU::with_config(FlatMemory::new(), CpuConfig::nmos());
    /// assert!(cpu.config().decimal_mode);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            status: StatusFlags::POWER_ON,
            config,
            state: CpuState::Resetting,
            interrupted: Vec::new(),
            nmi_pending: false,
            irq_pending: false,
            halted: false,
            instructions: 0,
            breakpoints: BTreeSet::new(),
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Executes one step and advances the CPU state.
    ///
    /// At the instruction boundary a pending NMI is serviced first, then an
    /// unmasked IRQ; servicing an interrupt is the whole step. Otherwise the
    /// opcode at PC is fetched, decoded through [`OPCODE_TABLE`] and executed.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::IllegalOpcode`] for an undocumented opcode when
    /// the configured policy is [`IllegalOpcodePolicy::Trap`]. PC is left on
    /// the offending opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        self.step_kind().map(|_| ())
    }

    pub(crate) fn step_kind(&mut self) -> Result<StepKind, ExecutionError> {
        if self.poll_interrupts() {
            return Ok(StepKind::Interrupt);
        }

        let address = self.pc;
        let opcode = self.fetch_byte();
        let metadata = OPCODE_TABLE[opcode as usize];

        trace!(
            "{:04X}  {:02X}  {} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            address,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            self.a,
            self.x,
            self.y,
            self.status.bits(),
            self.sp
        );

        if !metadata.is_documented() {
            match self.config.illegal_opcode_policy {
                IllegalOpcodePolicy::Trap => {
                    warn!("Illegal opcode 0x{:02X} at 0x{:04X}, trapping", opcode, address);
                    self.pc = address;
                    return Err(ExecutionError::IllegalOpcode { opcode, address });
                }
                IllegalOpcodePolicy::Nop => {
                    warn!("Illegal opcode 0x{:02X} at 0x{:04X}, treated as NOP", opcode, address);
                    self.instructions += 1;
                    return Ok(StepKind::Instruction);
                }
            }
        }

        instructions::execute(self, metadata.mnemonic, metadata.addressing_mode);
        self.instructions += 1;

        Ok(StepKind::Instruction)
    }

    /// Steps until `budget` steps have run or another stop condition hits.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, StopReason};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// let outcome = cpu.run_for_steps(5).unwrap();
    /// assert_eq!(outcome.steps, 5);
    /// assert_eq!(outcome.reason, StopReason::BudgetExhausted);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_steps(&mut self, budget: u64) -> Result<RunOutcome, ExecutionError> {
        self.run_until(budget, |_| false)
    }

    /// Steps until `stop` returns true after a step, or the budget, a
    /// breakpoint, a halt or (if configured) a self-loop ends the run.
    ///
    /// A breakpoint on the address the run starts at is ignored for the
    /// first step so a host can resume from it.
    pub fn run_until<F>(&mut self, budget: u64, mut stop: F) -> Result<RunOutcome, ExecutionError>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut steps = 0u64;
        loop {
            if self.halted {
                return Ok(RunOutcome {
                    steps,
                    reason: StopReason::Halted,
                });
            }
            if steps > 0 && self.breakpoints.contains(&self.pc) {
                return Ok(RunOutcome {
                    steps,
                    reason: StopReason::Breakpoint(self.pc),
                });
            }
            if steps >= budget {
                return Ok(RunOutcome {
                    steps,
                    reason: StopReason::BudgetExhausted,
                });
            }

            let before = self.pc;
            let kind = self.step_kind()?;
            steps += 1;

            if self.config.stop_on_self_loop && kind == StepKind::Instruction && self.pc == before {
                return Ok(RunOutcome {
                    steps,
                    reason: StopReason::SelfLoop(before),
                });
            }
            if stop(self) {
                return Ok(RunOutcome {
                    steps,
                    reason: StopReason::Condition,
                });
            }
        }
    }

    /// Runs with no step budget.
    ///
    /// Returns only on a breakpoint, a halt, a self-loop (when
    /// `stop_on_self_loop` is configured) or an error. Without any of those
    /// this never returns, just like the hardware.
    pub fn execute(&mut self) -> Result<RunOutcome, ExecutionError> {
        self.run_until(u64::MAX, |_| false)
    }

    // ========== Halt and Breakpoints ==========

    /// Stops run loops before their next step. `step()` still executes.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Clears a halt.
    pub fn resume(&mut self) {
        self.halted = false;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Stops run loops when PC reaches `addr`.
    pub fn add_breakpoint(&mut self, addr: u16) {
        self.breakpoints.insert(addr);
    }

    /// Returns whether a breakpoint was set at `addr`.
    pub fn remove_breakpoint(&mut self, addr: u16) -> bool {
        self.breakpoints.remove(&addr)
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = u16> + '_ {
        self.breakpoints.iter().copied()
    }

    // ========== Stack ==========

    /// Pushes a byte at 0x0100 | SP, then decrements SP (wrapping within page one).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping within page one), then reads 0x0100 | SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pulls a word low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Flags ==========

    /// Sets or clears the given flag bits.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, StatusFlags};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_flag(StatusFlags::CARRY, true);
    /// assert!(cpu.flag(StatusFlags::CARRY));
    /// cpu.set_flag(StatusFlags::CARRY, false);
    /// assert!(!cpu.flag(StatusFlags::CARRY));
    /// ```
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.status.set(flag, value);
        self.status.insert(StatusFlags::UNUSED);
    }

    /// Returns true if every bit of `flag` is set.
    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.status.contains(flag)
    }

    pub(crate) fn update_zero_negative(&mut self, value: u8) {
        self.status.update_zero_negative(value);
    }

    // ========== Register Getters ==========

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
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    pub fn status_flags(&self) -> StatusFlags {
        self.status
    }

    /// Instructions executed since the last reset (interrupt entries excluded).
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next step.
    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag(StatusFlags::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag(StatusFlags::CARRY)
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads the status register; bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.status = StatusFlags::from_bits_retain(value) | StatusFlags::UNUSED;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.set_flag(StatusFlags::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.set_flag(StatusFlags::OVERFLOW, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.set_flag(StatusFlags::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.set_flag(StatusFlags::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.set_flag(StatusFlags::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.set_flag(StatusFlags::CARRY, value);
    }

    // ========== Memory Access ==========

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus (program loading, peripheral wiring).
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Reads a byte through the bus without affecting CPU state.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte through the bus without affecting CPU state.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("a", &format_args!("{:02X}", self.a))
            .field("x", &format_args!("{:02X}", self.x))
            .field("y", &format_args!("{:02X}", self.y))
            .field("pc", &format_args!("{:04X}", self.pc))
            .field("sp", &format_args!("{:02X}", self.sp))
            .field("status", &self.status)
            .field("state", &self.state)
            .finish()
    }
}
