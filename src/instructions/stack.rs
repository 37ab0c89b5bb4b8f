//! # Stack Instructions
//!
//! - PHA / PLA: Push / pull the accumulator
//! - PHP / PLP: Push / pull the processor status
//!
//! The stack lives in page one (0x0100-0x01FF) and grows downward. SP wraps
//! within the page in both directions.

use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B and U set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pushed = cpu.status.to_stack(true);
    cpu.push(pushed);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pull();
    cpu.update_zero_negative(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B is not a real flag and is dropped; U reads back as 1.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pulled = cpu.pull();
    cpu.status = StatusFlags::from_stack(pulled);
}
