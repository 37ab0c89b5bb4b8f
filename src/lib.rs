//! # 6502 CPU Interpreter Core
//!
//! An instruction-level interpreter for the documented MOS 6502 instruction
//! set, aimed at NES-style hosts (Ricoh 2A03 by default) and designed for
//! modularity, clarity and WebAssembly portability.
//!
//! The crate provides the CPU state structure, a trait-based memory bus
//! abstraction, a table-driven opcode decoder, the addressing-mode resolver,
//! the semantics of all 151 documented opcodes, and reset/IRQ/NMI handling.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // LDA #$05; ADC #$03
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]);
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x08);
//! assert!(!cpu.flag_c());
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//! - **Table-Driven Design**: All opcode metadata in a single const table
//! - **Cooperative execution**: The host drives `step()` or a bounded run loop
//!
//! ## Modules
//!
//! - `cpu` - CPU state, stack helpers and the run loop
//! - `registers` - Status register flags
//! - `memory` - MemoryBus trait, flat 64KB memory and the address map
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Opcode metadata table
//! - `interrupts` - Reset, IRQ and NMI handling
//! - `config` - Chip-variant configuration
//! - `devices` - Memory-mapped peripheral overlay
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: one `trace!` line per executed
//! instruction, `debug!` on reset and interrupt entry, `warn!` on illegal
//! opcodes. No logger is installed; hosts pick their own.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{CpuConfig, IllegalOpcodePolicy};
pub use cpu::{RunOutcome, StopReason, CPU, STACK_BASE};
pub use devices::{Device, DeviceError, MappedMemory, RamDevice};
pub use interrupts::{CpuState, InterruptKind};
pub use memory::{regions, FlatMemory, MemoryBus, MemoryRegion};
pub use opcodes::{find_opcode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::StatusFlags;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// An undocumented opcode was fetched under [`IllegalOpcodePolicy::Trap`].
    ///
    /// `address` is where the opcode was fetched from; PC has been left there.
    IllegalOpcode { opcode: u8, address: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, address } => {
                write!(
                    f,
                    "Illegal opcode 0x{:02X} at address 0x{:04X}",
                    opcode, address
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
