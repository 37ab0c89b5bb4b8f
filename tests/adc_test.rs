//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (C, Z, V, N)
//! - Signed overflow in both directions

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Runs `ADC #value` with the given accumulator and carry.
fn adc_immediate(a: u8, value: u8, carry: bool) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, value]);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step().unwrap();
    cpu
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let cpu = adc_immediate(0x10, 0x05, false);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_with_carry_in() {
    let cpu = adc_immediate(0x10, 0x05, true);
    assert_eq!(cpu.a(), 0x16);
}

// ========== Flag Tests ==========

#[test]
fn test_adc_carry_and_zero() {
    let cpu = adc_immediate(0x01, 0xFF, false);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_positive_overflow() {
    // 0x50 + 0x50 = 0xA0: two positives give a negative
    let cpu = adc_immediate(0x50, 0x50, false);
    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_negative_overflow() {
    // 0xD0 + 0x90 = 0x160: two negatives give a positive
    let cpu = adc_immediate(0xD0, 0x90, false);
    assert_eq!(cpu.a(), 0x60);
    assert!(cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let cpu = adc_immediate(0x7F, 0x80, true);
    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_decimal_flag_ignored_by_default() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_flag_d(true);
    cpu.set_a(0x09);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x0A);
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x65, 0x42]);
    cpu.memory_mut().write(0x0042, 0x20);
    cpu.set_a(0x01);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x21);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x75, 0x40]);
    cpu.memory_mut().write(0x0045, 0x20);
    cpu.set_x(0x05);
    cpu.set_a(0x01);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn test_adc_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6D, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x30);
    cpu.set_a(0x01);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x31);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_adc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x7D, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x30);
    cpu.set_x(0x01);
    cpu.set_a(0x01);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x31);
}

#[test]
fn test_adc_absolute_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x79, 0x00, 0x12]);
    cpu.memory_mut().write(0x1210, 0x30);
    cpu.set_y(0x10);
    cpu.set_a(0x01);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x31);
}

#[test]
fn test_adc_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x61, 0x20]);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3000, 0x40);
    cpu.set_x(0x04);
    cpu.set_a(0x02);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x71, 0x20]);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x30);
    cpu.memory_mut().write(0x3005, 0x40);
    cpu.set_y(0x05);
    cpu.set_a(0x02);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);
}
