//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes the address of the BRK opcode + 2 (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::interrupts::CpuState;
use crate::memory::regions::IRQ_VECTOR;
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Indirect mode reproduces the page-wrap bug: `JMP ($xxFF)` reads its high
/// byte from `$xx00`.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.effective_address(mode);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address minus one), high byte first, then jumps to the target.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let target = cpu.effective_address(mode);
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR and resumes one byte past it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte long but behaves as two: the byte after the opcode is a
/// padding byte skipped by the return address.
///
/// Flags affected:
/// - B: Set to 1 in the pushed status byte only
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    // Padding byte
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.enter_handler(IRQ_VECTOR, true);
    cpu.state = CpuState::ServicingIrq;
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B cleared, U forced) then PC. Unlike RTS there is no +1.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.return_from_interrupt();
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
