//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary CPU state and memory image, then executes a short
//! burst of instructions looking for panics and broken register invariants.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{CpuConfig, FlatMemory, IllegalOpcodePolicy, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte; U is forced on by the CPU
    status: u8,
    decimal_mode: bool,
    lenient: bool,
    irq: bool,
    nmi: bool,
}

/// Memory regions the program is likely to touch
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Target of absolute addressing at 0x4000
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.write_u16(0xFFFC, 0x8000);
    memory.write_u16(0xFFFE, 0x9000);
    memory.write_u16(0xFFFA, 0xA000);

    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let policy = if input.cpu_state.lenient {
        IllegalOpcodePolicy::Nop
    } else {
        IllegalOpcodePolicy::Trap
    };
    let config = CpuConfig::default()
        .with_decimal_mode(input.cpu_state.decimal_mode)
        .with_illegal_opcode_policy(policy);

    let mut cpu = CPU::with_config(memory, config);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    if input.cpu_state.irq {
        cpu.request_irq();
    }
    if input.cpu_state.nmi {
        cpu.request_nmi();
    }

    for _ in 0..input.steps % 32 {
        let pc = cpu.pc();
        let before = cpu.instructions();
        match cpu.step() {
            Ok(()) => {}
            Err(_) => {
                // A trapped opcode leaves PC on the offending byte
                assert!(!input.cpu_state.lenient);
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.instructions(), before);
                break;
            }
        }

        assert_eq!(cpu.status() & 0x20, 0x20, "U must stay set");
        assert!(cpu.instructions() <= before + 1);
    }
});
