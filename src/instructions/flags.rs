//! # Flag Instructions
//!
//! Set or clear a single status flag. There is no SEV; V is only set by
//! ADC, SBC, BIT, PLP and RTI.

use crate::{MemoryBus, StatusFlags, CPU};

/// CLC: clear carry.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(StatusFlags::CARRY);
}

/// SEC: set carry.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(StatusFlags::CARRY);
}

/// CLI: clear interrupt disable. A pending IRQ is taken at the next step.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(StatusFlags::INTERRUPT_DISABLE);
}

/// SEI: set interrupt disable.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(StatusFlags::INTERRUPT_DISABLE);
}

/// CLD: clear decimal mode.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(StatusFlags::DECIMAL);
}

/// SED: set decimal mode. Only affects arithmetic when decimal mode is
/// enabled in the configuration.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.insert(StatusFlags::DECIMAL);
}

/// CLV: clear overflow.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.remove(StatusFlags::OVERFLOW);
}
