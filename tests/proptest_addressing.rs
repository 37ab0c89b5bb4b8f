//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that the addressing modes calculate effective
//! addresses correctly and handle edge cases like zero-page wraparound and
//! page boundary crossing.

use cpu6502::{FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

proptest! {
    /// Property: Zero page addressing reads from address 0x00XX
    #[test]
    fn prop_zero_page_address_calculation(zp_addr in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(zp_addr as u16, value);
        cpu.memory_mut().load(0x8000, &[0xA5, zp_addr]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(
        base in any::<u8>(),
        x in any::<u8>(),
        value in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.memory_mut().write(base.wrapping_add(x) as u16, value);
        cpu.memory_mut().load(0x8000, &[0xB5, base]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: STX zero page,Y never writes outside the zero page
    #[test]
    fn prop_zero_page_y_store_stays_in_zero_page(base in any::<u8>(), y in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.set_x(0xA5);
        cpu.memory_mut().load(0x8000, &[0x96, base]);

        cpu.step().unwrap();

        let target = base.wrapping_add(y) as u16;
        prop_assert_eq!(cpu.memory().read(target), 0xA5);
        let unwrapped = base as u16 + y as u16;
        if unwrapped > 0xFF {
            prop_assert_eq!(cpu.memory().read(unwrapped), 0x00);
        }
    }

    /// Property: Absolute,X is a full 16-bit add with wraparound
    #[test]
    fn prop_absolute_x_full_add(
        base in 0x0200u16..=0xFFFF,
        x in any::<u8>(),
        value in 1u8..=255,
    ) {
        let target = base.wrapping_add(x as u16);
        // Keep the instruction bytes and the target apart
        prop_assume!(!(0x8000..=0x8002).contains(&target));
        prop_assume!(!(0xFFFC..=0xFFFD).contains(&target));

        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.memory_mut().write(target, value);
        cpu.memory_mut().load(0x8000, &[0xBD, base as u8, (base >> 8) as u8]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (Indirect),Y reads the zero-page pointer then adds Y as 16 bits
    #[test]
    fn prop_indirect_y(zp in any::<u8>(), pointer in 0x0200u16..0x7000, y in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.memory_mut().write(zp as u16, pointer as u8);
        cpu.memory_mut().write(zp.wrapping_add(1) as u16, (pointer >> 8) as u8);
        cpu.memory_mut().write(pointer + y as u16, value);
        cpu.memory_mut().load(0x8000, &[0xB1, zp]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (Indirect,X) adds X in the zero page before dereferencing
    #[test]
    fn prop_indirect_x(zp in any::<u8>(), x in any::<u8>(), pointer in 0x0200u16..0x7000, value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let slot = zp.wrapping_add(x);
        cpu.memory_mut().write(slot as u16, pointer as u8);
        cpu.memory_mut().write(slot.wrapping_add(1) as u16, (pointer >> 8) as u8);
        cpu.memory_mut().write(pointer, value);
        cpu.memory_mut().load(0x8000, &[0xA1, zp]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: JMP indirect never carries into the pointer's high byte
    #[test]
    fn prop_jmp_indirect_stays_in_page(page in 0x02u8..0x70, offset in any::<u8>(), lo in any::<u8>(), hi in any::<u8>()) {
        let pointer = (page as u16) << 8 | offset as u16;
        let hi_addr = (page as u16) << 8 | offset.wrapping_add(1) as u16;

        let mut cpu = setup_cpu();
        cpu.memory_mut().write(pointer, lo);
        cpu.memory_mut().write(hi_addr, hi);
        cpu.memory_mut().load(0x8000, &[0x6C, offset, page]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), (hi as u16) << 8 | lo as u16);
    }
}
