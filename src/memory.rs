//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, plus `FlatMemory`, a plain 64KB byte array.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed for every 16-bit address
//! - Peripheral register windows are ordinary storage unless a wrapper bus
//!   (such as [`MappedMemory`](crate::MappedMemory)) intercepts them
//! - 16-bit address arithmetic wraps in the caller, never in the bus

use std::ops::RangeInclusive;

/// Total size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Size of one memory page in bytes.
pub const PAGE_SIZE: u16 = 0x100;

/// Named regions of the NES-style 6502 address map.
///
/// The regions carry meaning for higher layers only; the core reads and
/// writes all of them the same way.
pub mod regions {
    use std::ops::RangeInclusive;

    /// Zero page, reachable with single-byte operands.
    pub const ZERO_PAGE: RangeInclusive<u16> = 0x0000..=0x00FF;

    /// Hardware stack page.
    pub const STACK: RangeInclusive<u16> = 0x0100..=0x01FF;

    /// Picture processing unit register window.
    pub const PPU_REGISTERS: RangeInclusive<u16> = 0x2000..=0x2007;

    /// Audio processing unit and I/O register window.
    pub const APU_IO_REGISTERS: RangeInclusive<u16> = 0x4000..=0x4017;

    /// Non-maskable interrupt vector (little-endian word).
    pub const NMI_VECTOR: u16 = 0xFFFA;

    /// Reset vector (little-endian word).
    pub const RESET_VECTOR: u16 = 0xFFFC;

    /// IRQ/BRK vector (little-endian word).
    pub const IRQ_VECTOR: u16 = 0xFFFE;

    /// The vector table as a whole.
    pub const VECTORS: RangeInclusive<u16> = 0xFFFA..=0xFFFF;
}

/// Classification of an address within the memory map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    ZeroPage,
    Stack,
    PpuRegisters,
    ApuIoRegisters,
    Vectors,
    General,
}

impl MemoryRegion {
    /// Returns the region an address belongs to.
    pub fn of(addr: u16) -> Self {
        if regions::ZERO_PAGE.contains(&addr) {
            MemoryRegion::ZeroPage
        } else if regions::STACK.contains(&addr) {
            MemoryRegion::Stack
        } else if regions::PPU_REGISTERS.contains(&addr) {
            MemoryRegion::PpuRegisters
        } else if regions::APU_IO_REGISTERS.contains(&addr) {
            MemoryRegion::ApuIoRegisters
        } else if regions::VECTORS.contains(&addr) {
            MemoryRegion::Vectors
        } else {
            MemoryRegion::General
        }
    }

    /// The address range of this region, or `None` for general memory.
    pub fn range(self) -> Option<RangeInclusive<u16>> {
        match self {
            MemoryRegion::ZeroPage => Some(regions::ZERO_PAGE),
            MemoryRegion::Stack => Some(regions::STACK),
            MemoryRegion::PpuRegisters => Some(regions::PPU_REGISTERS),
            MemoryRegion::ApuIoRegisters => Some(regions::APU_IO_REGISTERS),
            MemoryRegion::Vectors => Some(regions::VECTORS),
            MemoryRegion::General => None,
        }
    }
}

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Intercepting a Peripheral Window
///
/// ```
/// use cpu6502::{FlatMemory, MemoryBus};
///
/// /// Counts writes to the PPU control register, stores everything else.
/// struct CountingBus {
///     ram: FlatMemory,
///     ppu_ctrl_writes: u32,
/// }
///
/// impl MemoryBus for CountingBus {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram.read(addr)
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr == 0x2000 {
///             self.ppu_ctrl_writes += 1;
///         }
///         self.ram.write(addr, value);
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped locations may
    /// ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The line is level-sensitive: the CPU samples it at every instruction
    /// boundary and services it while the I flag is clear. The default
    /// implementation reports no interrupt.
    fn irq_active(&self) -> bool {
        false
    }

    /// Reads a little-endian 16-bit word; the high byte address wraps at 0xFFFF.
    fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian 16-bit word.
    fn write_u16(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous
/// array initialized to 0x00. The size is fixed for the lifetime of the value.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_u16(0xFFFC, 0x8000); // Reset vector
/// memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]); // LDA #$05; ADC #$03
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x08);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Bytes that would land past 0xFFFF are dropped. Returns the number of
    /// bytes written.
    pub fn load(&mut self, start: u16, bytes: &[u8]) -> usize {
        let start = start as usize;
        let len = bytes.len().min(MEMORY_SIZE - start);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
        len
    }

    /// Sets every byte to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Borrows one 256-byte page.
    pub fn page(&self, page: u8) -> &[u8] {
        let start = (page as usize) << 8;
        &self.data[start..start + PAGE_SIZE as usize]
    }

    /// Borrows the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
