//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on carry clear / set
//! - BNE / BEQ: Branch on zero clear / set
//! - BPL / BMI: Branch on negative clear / set
//! - BVC / BVS: Branch on overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit
//! offset measured from the address of the following instruction. The
//! offset byte is always consumed, so a branch not taken falls through to
//! the next instruction.

use crate::{AddressingMode, MemoryBus, StatusFlags, CPU};

/// Shared branch body: resolves the target and takes it if `flag` is `when`.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, flag: StatusFlags, when: bool) {
    let target = cpu.effective_address(mode);
    if cpu.status.contains(flag) == when {
        cpu.pc = target;
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// No flags are affected.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::CARRY, false);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::CARRY, true);
}

/// Executes the BEQ (Branch if Equal) instruction, taken when Z is set.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::ZERO, true);
}

/// Executes the BNE (Branch if Not Equal) instruction, taken when Z is clear.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::ZERO, false);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::NEGATIVE, true);
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::NEGATIVE, false);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::OVERFLOW, false);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, StatusFlags::OVERFLOW, true);
}
