//! Tests for PHA, PLA, PHP and PLP and stack pointer wraparound.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x42);
    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    // PHA; LDA #$00; PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x9C);
    cpu.run_for_steps(3).unwrap();

    assert_eq!(cpu.a(), 0x9C);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_pla_sets_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x0100, 0x00);
    cpu.set_a(0x55);
    // SP wraps from 0xFF to 0x00 on pull
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(0x01); // C only (U forced)
    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FF), 0x31);
    // The live register has no B bit
    assert_eq!(cpu.status(), 0x21);
}

#[test]
fn test_plp_drops_break_forces_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x0100, 0xDF); // everything but U, B set
    cpu.step().unwrap();
    assert_eq!(cpu.status(), 0xEF);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();
    // PHP; CLC; SEI; PLP
    cpu.memory_mut().load(0x8000, &[0x08, 0x18, 0x78, 0x28]);
    cpu.set_status(0xC3);
    cpu.run_for_steps(4).unwrap();
    assert_eq!(cpu.status(), 0xE3);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_256_pushes_wrap_within_stack_page() {
    let mut cpu = setup_cpu();
    for addr in 0x8000..0x8100u16 {
        cpu.memory_mut().write(addr, 0x48); // PHA
    }
    cpu.memory_mut().write(0x00FF, 0xEE);
    cpu.memory_mut().write(0x0200, 0xEE);
    cpu.set_a(0xA5);

    cpu.run_for_steps(256).unwrap();

    assert_eq!(cpu.sp(), 0xFF, "SP wraps 0x00 -> 0xFF");
    assert!((0x0100..=0x01FF).all(|addr| cpu.memory().read(addr) == 0xA5));
    assert_eq!(cpu.memory().read(0x00FF), 0xEE, "Zero page untouched");
    assert_eq!(cpu.memory().read(0x0200), 0xEE, "Page two untouched");
}
