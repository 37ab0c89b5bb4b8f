//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ADC and SBC are binary unless decimal mode is enabled in the CPU
//! configuration *and* the D flag is set, in which case they follow NMOS BCD
//! behavior.

use crate::{AddressingMode, MemoryBus, StatusFlags, CPU};

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.config.decimal_mode && cpu.status.contains(StatusFlags::DECIMAL)
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags affected:
/// - C: Set if the unsigned sum exceeds 0xFF (decimal: 99)
/// - Z: Set if the result is zero
/// - V: Set if both inputs share a sign the result does not
/// - N: Set from bit 7 of the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    if decimal_active(cpu) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. The carry flag acts as an inverted borrow:
/// it is set afterwards when no borrow was needed.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    if decimal_active(cpu) {
        subtract_decimal(cpu, value);
    } else {
        // A - M - !C == A + !M + C
        add_binary(cpu, !value);
    }
}

fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(StatusFlags::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(StatusFlags::CARRY, sum > 0xFF);
    // Overflow: both operands had the same sign and the result's differs
    cpu.status
        .set(StatusFlags::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.update_zero_negative(result);

    cpu.a = result;
}

/// NMOS decimal addition. Z reflects the binary sum; N and V come from the
/// intermediate result before the high-nibble adjustment.
fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(StatusFlags::CARRY) as u16;

    let binary = (a as u16 + value as u16 + carry_in) as u8;

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16;
    if lo > 0x09 {
        lo += 0x06;
    }
    if lo > 0x0F {
        hi += 1;
    }

    let intermediate = ((hi << 4) | (lo & 0x0F)) as u8;
    cpu.status.set(StatusFlags::ZERO, binary == 0);
    cpu.status.set(StatusFlags::NEGATIVE, intermediate & 0x80 != 0);
    cpu.status.set(
        StatusFlags::OVERFLOW,
        (a ^ intermediate) & (value ^ intermediate) & 0x80 != 0,
    );

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.status.set(StatusFlags::CARRY, hi > 0x0F);

    cpu.a = ((hi << 4) | (lo & 0x0F)) as u8;
}

/// NMOS decimal subtraction. All flags follow the binary subtraction.
fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let borrow = !cpu.status.contains(StatusFlags::CARRY) as i16;

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }
    let result = (((hi << 4) as u16) | ((lo & 0x0F) as u16)) as u8;

    // Flags exactly as a binary SBC would leave them
    add_binary(cpu, !value);

    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a &= value;
    cpu.update_zero_negative(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a |= value;
    cpu.update_zero_negative(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a ^= value;
    cpu.update_zero_negative(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is not modified.
///
/// Flags affected:
/// - Z: Set if `A & M` is zero
/// - V: Copied from bit 6 of M
/// - N: Copied from bit 7 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.status.set(StatusFlags::ZERO, cpu.a & value == 0);
    cpu.status.set(StatusFlags::OVERFLOW, value & 0x40 != 0);
    cpu.status.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
}

/// Shared compare: `register - value` without storing the difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let difference = register.wrapping_sub(value);
    cpu.status.set(StatusFlags::CARRY, register >= value);
    cpu.update_zero_negative(difference);
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected:
/// - C: Set if A >= M (unsigned)
/// - Z: Set if A == M
/// - N: Set from bit 7 of A - M
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let register = cpu.y;
    compare(cpu, register, value);
}
