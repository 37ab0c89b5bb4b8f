//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the operand bytes following an opcode into an
//! [`Operand`].
//!
//! Resolution consumes the operand bytes at the current program counter and
//! advances the program counter past them. The caller (the dispatcher) has
//! already advanced PC past the opcode byte itself.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (the offset is relative to the address after the operand)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction size (opcode plus operands).
    pub const fn instruction_size(self) -> u8 {
        1 + self.operand_bytes()
    }
}

/// The result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implicit instructions).
    None,
    /// The accumulator is the operand.
    Accumulator,
    /// A literal byte taken from the instruction stream.
    Value(u8),
    /// An effective address in memory (also the branch target for relative mode).
    Address(u16),
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the next byte of the instruction stream and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the next little-endian word of the instruction stream and advances PC.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a 16-bit pointer stored in the zero page.
    ///
    /// The high byte comes from `(addr + 1) mod 256`; the pointer never
    /// straddles into page one.
    fn read_zero_page_pointer(&self, addr: u8) -> u16 {
        let lo = self.memory.read(addr as u16) as u16;
        let hi = self.memory.read(addr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Resolves `mode` into an operand, consuming its operand bytes.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Value(self.fetch_byte()),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                Operand::Address(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                Operand::Address(base.wrapping_add(self.y) as u16)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                Operand::Address(self.pc.wrapping_add_signed(offset as i16))
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Operand::Address(base.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Operand::Address(base.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let target_lo = self.memory.read(ptr) as u16;
                // Hardware bug: the high byte never crosses into the next page
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let target_hi = self.memory.read(hi_addr) as u16;
                Operand::Address((target_hi << 8) | target_lo)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                Operand::Address(self.read_zero_page_pointer(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_zero_page_pointer(zp);
                Operand::Address(base.wrapping_add(self.y as u16))
            }
        }
    }

    /// Reads the byte an operand refers to.
    ///
    /// `Operand::None` reads as zero; no documented instruction asks for it.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::None => 0,
            Operand::Accumulator => self.a,
            Operand::Value(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
        }
    }

    /// Writes back to an operand's location (accumulator or memory).
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::None | Operand::Value(_) => {}
        }
    }

    /// Resolves `mode` and reads the byte it designates.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        let operand = self.resolve_operand(mode);
        self.read_operand(operand)
    }

    /// Resolves `mode` to an effective address.
    ///
    /// Modes without an address resolve to 0x0000; the opcode table never
    /// pairs those modes with address-only instructions.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode) -> u16 {
        match self.resolve_operand(mode) {
            Operand::Address(addr) => addr,
            _ => 0x0000,
        }
    }
}
