//! # Load and Store Instructions
//!
//! This module implements register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory (updates Z and N)
//! - STA, STX, STY: Store a register to memory (no flags affected)

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.a = cpu.operand_value(mode);
    cpu.update_zero_negative(cpu.a);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.x = cpu.operand_value(mode);
    cpu.update_zero_negative(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.y = cpu.operand_value(mode);
    cpu.update_zero_negative(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode);
    cpu.memory.write(addr, cpu.y);
}
