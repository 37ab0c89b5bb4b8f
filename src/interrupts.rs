//! # Interrupt and Reset Controller
//!
//! The 6502 has three ways to redirect execution through the vector table at
//! the top of memory:
//!
//! | Event | Vector        | Maskable by I | Pushes PC/P |
//! |-------|---------------|---------------|-------------|
//! | NMI   | 0xFFFA/0xFFFB | no            | yes         |
//! | RESET | 0xFFFC/0xFFFD | no            | no          |
//! | IRQ   | 0xFFFE/0xFFFF | yes           | yes         |
//!
//! BRK shares the IRQ vector and pushes status with `B` set; NMI and IRQ
//! push it with `B` clear.
//!
//! Requests are only acted on at instruction boundaries. NMI is edge
//! triggered: [`CPU::request_nmi`] latches one request, consumed when serviced.
//! IRQ is level triggered: it is asserted while either a latched
//! [`CPU::request_irq`] is outstanding or the bus reports
//! [`MemoryBus::irq_active`]. When both are pending, NMI wins.

use log::debug;

use crate::memory::regions::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::{MemoryBus, StatusFlags, CPU};

/// Handler frames remembered for RTI. A page-one stack holds at most 85
/// three-byte frames, so deeper nesting means handlers left without RTI.
const MAX_NESTED_HANDLERS: usize = 128;

/// Coarse execution state of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    /// Executing the main program.
    Running,
    /// Inside `reset`.
    Resetting,
    /// Inside an IRQ or BRK handler (entered, RTI not yet executed).
    ServicingIrq,
    /// Inside an NMI handler (entered, RTI not yet executed).
    ServicingNmi,
}

/// Hardware interrupt sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    Irq,
    Nmi,
}

impl InterruptKind {
    /// Address of the little-endian handler vector.
    pub const fn vector(self) -> u16 {
        match self {
            InterruptKind::Irq => IRQ_VECTOR,
            InterruptKind::Nmi => NMI_VECTOR,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Performs the reset sequence.
    ///
    /// - A, X, Y are cleared and SP is set to 0xFF
    /// - status becomes U | I (further IRQs disabled)
    /// - pending NMI/IRQ requests are dropped
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - memory is zeroed afterwards only if `clear_memory_on_reset` is set
    ///
    /// Halt state and breakpoints are kept; they belong to the host.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x34);
    /// mem.write(0xFFFD, 0x12);
    /// let mut cpu = CPU::new(mem);
    ///
    /// cpu.set_a(0x55);
    /// cpu.set_sp(0x10);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.a(), 0x00);
    /// assert_eq!(cpu.sp(), 0xFF);
    /// assert_eq!(cpu.pc(), 0x1234);
    /// ```
    pub fn reset(&mut self) {
        self.state = CpuState::Resetting;

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFF;
        self.status = StatusFlags::POWER_ON;
        self.nmi_pending = false;
        self.irq_pending = false;
        self.instructions = 0;
        self.interrupted.clear();

        self.pc = self.memory.read_u16(RESET_VECTOR);

        if self.config.clear_memory_on_reset {
            for addr in 0..=0xFFFFu16 {
                self.memory.write(addr, 0x00);
            }
        }

        debug!("Reset: PC = 0x{:04X}", self.pc);
        self.state = CpuState::Running;
    }

    /// Latches a non-maskable interrupt, serviced at the next step.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Latches an interrupt request, serviced at the first step where I is clear.
    pub fn request_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Withdraws a latched interrupt request that has not been serviced.
    pub fn clear_irq(&mut self) {
        self.irq_pending = false;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// True if an IRQ is asserted (latched or from the bus), masked or not.
    pub fn irq_pending(&self) -> bool {
        self.irq_pending || self.memory.irq_active()
    }

    /// Services at most one pending interrupt. Returns true if one was taken.
    pub(crate) fn poll_interrupts(&mut self) -> bool {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(InterruptKind::Nmi);
            return true;
        }

        if self.irq_pending() && !self.status.contains(StatusFlags::INTERRUPT_DISABLE) {
            self.irq_pending = false;
            self.service_interrupt(InterruptKind::Irq);
            return true;
        }

        false
    }

    /// Hardware interrupt entry: push PC and P (B clear), set I, vector.
    pub(crate) fn service_interrupt(&mut self, kind: InterruptKind) {
        debug!("{:?} at PC 0x{:04X}", kind, self.pc);
        self.enter_handler(kind.vector(), false);
        self.state = match kind {
            InterruptKind::Irq => CpuState::ServicingIrq,
            InterruptKind::Nmi => CpuState::ServicingNmi,
        };
    }

    /// Shared by interrupts and BRK. PC must already hold the return address.
    ///
    /// The current state is saved so RTI can go back to it; the caller sets
    /// the handler state afterwards.
    pub(crate) fn enter_handler(&mut self, vector: u16, brk: bool) {
        if self.interrupted.len() == MAX_NESTED_HANDLERS {
            self.interrupted.remove(0);
        }
        self.interrupted.push(self.state);

        self.push_word(self.pc);
        let pushed = self.status.to_stack(brk);
        self.push(pushed);
        self.status.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.memory.read_u16(vector);
    }

    /// Pulls P then PC and returns to the state the handler interrupted.
    ///
    /// An RTI with no handler entered (a program faking a return frame)
    /// lands in `Running`.
    pub(crate) fn return_from_interrupt(&mut self) {
        let pulled = self.pull();
        self.status = StatusFlags::from_stack(pulled);
        self.pc = self.pull_word();
        self.state = self.interrupted.pop().unwrap_or(CpuState::Running);
    }
}
