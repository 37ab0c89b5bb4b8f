//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works either on the accumulator or as a read-modify-write on memory.

use crate::{AddressingMode, MemoryBus, StatusFlags, CPU};

/// Resolves the operand, applies `op` to it, writes the result back and
/// updates C, Z and N. `op` returns the result and the new carry.
fn read_modify_write<M, F>(cpu: &mut CPU<M>, mode: AddressingMode, op: F)
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let operand = cpu.resolve_operand(mode);
    let value = cpu.read_operand(operand);
    let carry_in = cpu.status.contains(StatusFlags::CARRY);

    let (result, carry_out) = op(value, carry_in);

    cpu.write_operand(operand, result);
    cpu.status.set(StatusFlags::CARRY, carry_out);
    cpu.update_zero_negative(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always
/// cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    read_modify_write(cpu, mode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
