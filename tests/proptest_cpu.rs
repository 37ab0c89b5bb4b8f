//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use cpu6502::{FlatMemory, MemoryBus, Mnemonic, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Documented opcodes that don't modify PC in special ways (excludes
/// branches, jumps, calls, returns)
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            m.is_documented()
                && !matches!(
                    m.mnemonic,
                    Mnemonic::Bcc
                        | Mnemonic::Bcs
                        | Mnemonic::Beq
                        | Mnemonic::Bmi
                        | Mnemonic::Bne
                        | Mnemonic::Bpl
                        | Mnemonic::Bvc
                        | Mnemonic::Bvs
                        | Mnemonic::Jmp
                        | Mnemonic::Jsr
                        | Mnemonic::Rts
                        | Mnemonic::Rti
                        | Mnemonic::Brk
                )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

fn documented_opcodes() -> Vec<u8> {
    (0..=255u8)
        .filter(|&op| OPCODE_TABLE[op as usize].is_documented())
        .collect()
}

// ========== PC Advancement Property Tests ==========

proptest! {
    /// Property: For non-branching instructions, PC advances by exactly size_bytes
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        let expected_size = OPCODE_TABLE[opcode as usize].size_bytes as u16;

        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), 0x8000 + expected_size);
    }

    /// Property: the unused status bit is set after every documented instruction
    #[test]
    fn prop_unused_flag_always_set(
        opcode in prop::sample::select(documented_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        status in any::<u8>(),
        stack_byte in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);
        // Whatever PLP/RTI pull
        cpu.memory_mut().write(0x0100, stack_byte);
        cpu.set_status(status);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.status() & 0x20, 0x20);
    }
}

// ========== Arithmetic Property Tests ==========

proptest! {
    /// Property: ADC with carry-in 0 matches wide arithmetic
    #[test]
    fn prop_adc_carry_and_overflow(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x69, m]);
        cpu.set_a(a);
        cpu.set_flag_c(false);

        cpu.step().unwrap();

        let unsigned = a as u16 + m as u16;
        let signed = a as i8 as i16 + m as i8 as i16;
        prop_assert_eq!(cpu.a(), unsigned as u8);
        prop_assert_eq!(cpu.flag_c(), unsigned > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), unsigned as u8 == 0);
        prop_assert_eq!(cpu.flag_n(), unsigned as u8 & 0x80 != 0);
    }

    /// Property: SBC with C set is exact subtraction; C means no borrow
    #[test]
    fn prop_sbc_borrow(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xE9, m]);
        cpu.set_a(a);
        cpu.set_flag_c(true);

        cpu.step().unwrap();

        let signed = a as i8 as i16 - m as i8 as i16;
        prop_assert_eq!(cpu.a(), a.wrapping_sub(m));
        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    /// Property: CMP sets C, Z, N from the unstored difference
    #[test]
    fn prop_cmp_flags(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xC9, m]);
        cpu.set_a(a);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_z(), a == m);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(m) & 0x80 != 0);
    }

    /// Property: ROL then ROR restores both the value and the carry
    #[test]
    fn prop_rol_ror_inverse(value in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x2A, 0x6A]);
        cpu.set_a(value);
        cpu.set_flag_c(carry);

        cpu.run_for_steps(2).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_c(), carry);
    }
}

// ========== Stack Property Tests ==========

proptest! {
    /// Property: PHA; PLA restores A and SP from any starting SP
    #[test]
    fn prop_pha_pla_round_trip(value in any::<u8>(), sp in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
        cpu.set_a(value);
        cpu.set_sp(sp);

        cpu.run_for_steps(3).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.memory().read(0x0100 | sp as u16), value);
    }

    /// Property: JSR; RTS returns to the instruction after the JSR
    #[test]
    fn prop_jsr_rts_returns(target in 0x0200u16..0x7000, sp in 0x10u8..=0xFF) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x20, target as u8, (target >> 8) as u8]);
        cpu.memory_mut().write(target, 0x60);
        cpu.set_sp(sp);

        cpu.run_for_steps(2).unwrap();

        prop_assert_eq!(cpu.pc(), 0x8003);
        prop_assert_eq!(cpu.sp(), sp);
    }
}

// ========== Memory Property Tests ==========

proptest! {
    /// Property: write then read returns the written value
    #[test]
    fn prop_memory_write_read(addr in any::<u16>(), value in any::<u8>()) {
        let mut memory = FlatMemory::new();
        memory.write(addr, value);
        prop_assert_eq!(memory.read(addr), value);
    }
}
