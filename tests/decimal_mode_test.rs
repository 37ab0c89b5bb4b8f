//! Tests for NMOS binary-coded-decimal arithmetic.
//!
//! BCD only applies when the CPU is configured with `decimal_mode` and the
//! D flag is set.

use cpu6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

fn setup_nmos_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::with_config(memory, CpuConfig::nmos())
}

fn run(opcode: u8, a: u8, value: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_nmos_cpu();
    cpu.memory_mut().load(0x8000, &[opcode, value]);
    cpu.set_flag_d(true);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step().unwrap();
    cpu
}

#[test]
fn test_adc_decimal_simple() {
    let cpu = run(0x69, 0x09, 0x01, false);
    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_carry_out() {
    let cpu = run(0x69, 0x58, 0x46, true);
    assert_eq!(cpu.a(), 0x05);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_99_plus_1() {
    let cpu = run(0x69, 0x99, 0x01, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    // Z follows the binary sum (0x9A), not the decimal result
    assert!(!cpu.flag_z());
}

#[test]
fn test_sbc_decimal_simple() {
    let cpu = run(0xE9, 0x46, 0x12, true);
    assert_eq!(cpu.a(), 0x34);
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_decimal_borrow() {
    let cpu = run(0xE9, 0x40, 0x13, true);
    assert_eq!(cpu.a(), 0x27);
    assert!(cpu.flag_c());

    let cpu = run(0xE9, 0x00, 0x01, true);
    assert_eq!(cpu.a(), 0x99);
    assert!(!cpu.flag_c());
}

#[test]
fn test_decimal_mode_needs_d_flag() {
    let mut cpu = setup_nmos_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x09);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x0A);
}

#[test]
fn test_sed_cld_switch_arithmetic() {
    let mut cpu = setup_nmos_cpu();
    // SED; LDA #$15; CLC; ADC #$27; CLD; ADC #$01
    cpu.memory_mut()
        .load(0x8000, &[0xF8, 0xA9, 0x15, 0x18, 0x69, 0x27, 0xD8, 0x69, 0x01]);
    cpu.run_for_steps(4).unwrap();
    assert_eq!(cpu.a(), 0x42);

    cpu.run_for_steps(2).unwrap();
    assert_eq!(cpu.a(), 0x43);
    assert!(!cpu.flag_d());
}
