//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for instruction decoding.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Decoded as [`Mnemonic::Illegal`] and handled
//!   by the configured [`IllegalOpcodePolicy`](crate::IllegalOpcodePolicy)
//!
//! Every byte value decodes to exactly one entry, so the dispatcher is total.

use crate::addressing::AddressingMode;

/// Instruction mnemonics of the documented NMOS 6502 instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Any undocumented opcode.
    Illegal,
}

impl Mnemonic {
    /// Three-letter assembler name (`"???"` for undocumented opcodes).
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Illegal => "???",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoding information for a single opcode byte.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.is_documented());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Entry used for every undocumented opcode.
    pub const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
        mnemonic: Mnemonic::Illegal,
        addressing_mode: AddressingMode::Implicit,
        size_bytes: 1,
    };

    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            size_bytes: addressing_mode.instruction_size(),
        }
    }

    /// Whether the opcode belongs to the documented instruction set.
    pub const fn is_documented(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Illegal)
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic.as_str(), "???");
/// assert_eq!(illegal.size_bytes, 1);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_opcode_table();

const fn build_opcode_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t = [OpcodeMetadata::ILLEGAL; 256];

    // Load/store
    t[0xA9] = OpcodeMetadata::new(Lda, Immediate);
    t[0xA5] = OpcodeMetadata::new(Lda, ZeroPage);
    t[0xB5] = OpcodeMetadata::new(Lda, ZeroPageX);
    t[0xAD] = OpcodeMetadata::new(Lda, Absolute);
    t[0xBD] = OpcodeMetadata::new(Lda, AbsoluteX);
    t[0xB9] = OpcodeMetadata::new(Lda, AbsoluteY);
    t[0xA1] = OpcodeMetadata::new(Lda, IndirectX);
    t[0xB1] = OpcodeMetadata::new(Lda, IndirectY);

    t[0xA2] = OpcodeMetadata::new(Ldx, Immediate);
    t[0xA6] = OpcodeMetadata::new(Ldx, ZeroPage);
    t[0xB6] = OpcodeMetadata::new(Ldx, ZeroPageY);
    t[0xAE] = OpcodeMetadata::new(Ldx, Absolute);
    t[0xBE] = OpcodeMetadata::new(Ldx, AbsoluteY);

    t[0xA0] = OpcodeMetadata::new(Ldy, Immediate);
    t[0xA4] = OpcodeMetadata::new(Ldy, ZeroPage);
    t[0xB4] = OpcodeMetadata::new(Ldy, ZeroPageX);
    t[0xAC] = OpcodeMetadata::new(Ldy, Absolute);
    t[0xBC] = OpcodeMetadata::new(Ldy, AbsoluteX);

    t[0x85] = OpcodeMetadata::new(Sta, ZeroPage);
    t[0x95] = OpcodeMetadata::new(Sta, ZeroPageX);
    t[0x8D] = OpcodeMetadata::new(Sta, Absolute);
    t[0x9D] = OpcodeMetadata::new(Sta, AbsoluteX);
    t[0x99] = OpcodeMetadata::new(Sta, AbsoluteY);
    t[0x81] = OpcodeMetadata::new(Sta, IndirectX);
    t[0x91] = OpcodeMetadata::new(Sta, IndirectY);

    t[0x86] = OpcodeMetadata::new(Stx, ZeroPage);
    t[0x96] = OpcodeMetadata::new(Stx, ZeroPageY);
    t[0x8E] = OpcodeMetadata::new(Stx, Absolute);

    t[0x84] = OpcodeMetadata::new(Sty, ZeroPage);
    t[0x94] = OpcodeMetadata::new(Sty, ZeroPageX);
    t[0x8C] = OpcodeMetadata::new(Sty, Absolute);

    // Arithmetic and logic
    t[0x69] = OpcodeMetadata::new(Adc, Immediate);
    t[0x65] = OpcodeMetadata::new(Adc, ZeroPage);
    t[0x75] = OpcodeMetadata::new(Adc, ZeroPageX);
    t[0x6D] = OpcodeMetadata::new(Adc, Absolute);
    t[0x7D] = OpcodeMetadata::new(Adc, AbsoluteX);
    t[0x79] = OpcodeMetadata::new(Adc, AbsoluteY);
    t[0x61] = OpcodeMetadata::new(Adc, IndirectX);
    t[0x71] = OpcodeMetadata::new(Adc, IndirectY);

    t[0xE9] = OpcodeMetadata::new(Sbc, Immediate);
    t[0xE5] = OpcodeMetadata::new(Sbc, ZeroPage);
    t[0xF5] = OpcodeMetadata::new(Sbc, ZeroPageX);
    t[0xED] = OpcodeMetadata::new(Sbc, Absolute);
    t[0xFD] = OpcodeMetadata::new(Sbc, AbsoluteX);
    t[0xF9] = OpcodeMetadata::new(Sbc, AbsoluteY);
    t[0xE1] = OpcodeMetadata::new(Sbc, IndirectX);
    t[0xF1] = OpcodeMetadata::new(Sbc, IndirectY);

    t[0x29] = OpcodeMetadata::new(And, Immediate);
    t[0x25] = OpcodeMetadata::new(And, ZeroPage);
    t[0x35] = OpcodeMetadata::new(And, ZeroPageX);
    t[0x2D] = OpcodeMetadata::new(And, Absolute);
    t[0x3D] = OpcodeMetadata::new(And, AbsoluteX);
    t[0x39] = OpcodeMetadata::new(And, AbsoluteY);
    t[0x21] = OpcodeMetadata::new(And, IndirectX);
    t[0x31] = OpcodeMetadata::new(And, IndirectY);

    t[0x09] = OpcodeMetadata::new(Ora, Immediate);
    t[0x05] = OpcodeMetadata::new(Ora, ZeroPage);
    t[0x15] = OpcodeMetadata::new(Ora, ZeroPageX);
    t[0x0D] = OpcodeMetadata::new(Ora, Absolute);
    t[0x1D] = OpcodeMetadata::new(Ora, AbsoluteX);
    t[0x19] = OpcodeMetadata::new(Ora, AbsoluteY);
    t[0x01] = OpcodeMetadata::new(Ora, IndirectX);
    t[0x11] = OpcodeMetadata::new(Ora, IndirectY);

    t[0x49] = OpcodeMetadata::new(Eor, Immediate);
    t[0x45] = OpcodeMetadata::new(Eor, ZeroPage);
    t[0x55] = OpcodeMetadata::new(Eor, ZeroPageX);
    t[0x4D] = OpcodeMetadata::new(Eor, Absolute);
    t[0x5D] = OpcodeMetadata::new(Eor, AbsoluteX);
    t[0x59] = OpcodeMetadata::new(Eor, AbsoluteY);
    t[0x41] = OpcodeMetadata::new(Eor, IndirectX);
    t[0x51] = OpcodeMetadata::new(Eor, IndirectY);

    t[0x24] = OpcodeMetadata::new(Bit, ZeroPage);
    t[0x2C] = OpcodeMetadata::new(Bit, Absolute);

    // Compares
    t[0xC9] = OpcodeMetadata::new(Cmp, Immediate);
    t[0xC5] = OpcodeMetadata::new(Cmp, ZeroPage);
    t[0xD5] = OpcodeMetadata::new(Cmp, ZeroPageX);
    t[0xCD] = OpcodeMetadata::new(Cmp, Absolute);
    t[0xDD] = OpcodeMetadata::new(Cmp, AbsoluteX);
    t[0xD9] = OpcodeMetadata::new(Cmp, AbsoluteY);
    t[0xC1] = OpcodeMetadata::new(Cmp, IndirectX);
    t[0xD1] = OpcodeMetadata::new(Cmp, IndirectY);

    t[0xE0] = OpcodeMetadata::new(Cpx, Immediate);
    t[0xE4] = OpcodeMetadata::new(Cpx, ZeroPage);
    t[0xEC] = OpcodeMetadata::new(Cpx, Absolute);

    t[0xC0] = OpcodeMetadata::new(Cpy, Immediate);
    t[0xC4] = OpcodeMetadata::new(Cpy, ZeroPage);
    t[0xCC] = OpcodeMetadata::new(Cpy, Absolute);

    // Shifts and rotates
    t[0x0A] = OpcodeMetadata::new(Asl, Accumulator);
    t[0x06] = OpcodeMetadata::new(Asl, ZeroPage);
    t[0x16] = OpcodeMetadata::new(Asl, ZeroPageX);
    t[0x0E] = OpcodeMetadata::new(Asl, Absolute);
    t[0x1E] = OpcodeMetadata::new(Asl, AbsoluteX);

    t[0x4A] = OpcodeMetadata::new(Lsr, Accumulator);
    t[0x46] = OpcodeMetadata::new(Lsr, ZeroPage);
    t[0x56] = OpcodeMetadata::new(Lsr, ZeroPageX);
    t[0x4E] = OpcodeMetadata::new(Lsr, Absolute);
    t[0x5E] = OpcodeMetadata::new(Lsr, AbsoluteX);

    t[0x2A] = OpcodeMetadata::new(Rol, Accumulator);
    t[0x26] = OpcodeMetadata::new(Rol, ZeroPage);
    t[0x36] = OpcodeMetadata::new(Rol, ZeroPageX);
    t[0x2E] = OpcodeMetadata::new(Rol, Absolute);
    t[0x3E] = OpcodeMetadata::new(Rol, AbsoluteX);

    t[0x6A] = OpcodeMetadata::new(Ror, Accumulator);
    t[0x66] = OpcodeMetadata::new(Ror, ZeroPage);
    t[0x76] = OpcodeMetadata::new(Ror, ZeroPageX);
    t[0x6E] = OpcodeMetadata::new(Ror, Absolute);
    t[0x7E] = OpcodeMetadata::new(Ror, AbsoluteX);

    // Increments and decrements
    t[0xE6] = OpcodeMetadata::new(Inc, ZeroPage);
    t[0xF6] = OpcodeMetadata::new(Inc, ZeroPageX);
    t[0xEE] = OpcodeMetadata::new(Inc, Absolute);
    t[0xFE] = OpcodeMetadata::new(Inc, AbsoluteX);

    t[0xC6] = OpcodeMetadata::new(Dec, ZeroPage);
    t[0xD6] = OpcodeMetadata::new(Dec, ZeroPageX);
    t[0xCE] = OpcodeMetadata::new(Dec, Absolute);
    t[0xDE] = OpcodeMetadata::new(Dec, AbsoluteX);

    t[0xE8] = OpcodeMetadata::new(Inx, Implicit);
    t[0xC8] = OpcodeMetadata::new(Iny, Implicit);
    t[0xCA] = OpcodeMetadata::new(Dex, Implicit);
    t[0x88] = OpcodeMetadata::new(Dey, Implicit);

    // Transfers
    t[0xAA] = OpcodeMetadata::new(Tax, Implicit);
    t[0xA8] = OpcodeMetadata::new(Tay, Implicit);
    t[0xBA] = OpcodeMetadata::new(Tsx, Implicit);
    t[0x8A] = OpcodeMetadata::new(Txa, Implicit);
    t[0x9A] = OpcodeMetadata::new(Txs, Implicit);
    t[0x98] = OpcodeMetadata::new(Tya, Implicit);

    // Stack
    t[0x48] = OpcodeMetadata::new(Pha, Implicit);
    t[0x08] = OpcodeMetadata::new(Php, Implicit);
    t[0x68] = OpcodeMetadata::new(Pla, Implicit);
    t[0x28] = OpcodeMetadata::new(Plp, Implicit);

    // Status flags
    t[0x18] = OpcodeMetadata::new(Clc, Implicit);
    t[0x38] = OpcodeMetadata::new(Sec, Implicit);
    t[0x58] = OpcodeMetadata::new(Cli, Implicit);
    t[0x78] = OpcodeMetadata::new(Sei, Implicit);
    t[0xB8] = OpcodeMetadata::new(Clv, Implicit);
    t[0xD8] = OpcodeMetadata::new(Cld, Implicit);
    t[0xF8] = OpcodeMetadata::new(Sed, Implicit);

    // Branches
    t[0x90] = OpcodeMetadata::new(Bcc, Relative);
    t[0xB0] = OpcodeMetadata::new(Bcs, Relative);
    t[0xF0] = OpcodeMetadata::new(Beq, Relative);
    t[0xD0] = OpcodeMetadata::new(Bne, Relative);
    t[0x30] = OpcodeMetadata::new(Bmi, Relative);
    t[0x10] = OpcodeMetadata::new(Bpl, Relative);
    t[0x50] = OpcodeMetadata::new(Bvc, Relative);
    t[0x70] = OpcodeMetadata::new(Bvs, Relative);

    // Control flow
    t[0x4C] = OpcodeMetadata::new(Jmp, Absolute);
    t[0x6C] = OpcodeMetadata::new(Jmp, Indirect);
    t[0x20] = OpcodeMetadata::new(Jsr, Absolute);
    t[0x60] = OpcodeMetadata::new(Rts, Implicit);
    t[0x00] = OpcodeMetadata::new(Brk, Implicit);
    t[0x40] = OpcodeMetadata::new(Rti, Implicit);
    t[0xEA] = OpcodeMetadata::new(Nop, Implicit);

    t
}

/// Finds the opcode byte for a documented `(mnemonic, mode)` pair.
///
/// ```
/// use cpu6502::{find_opcode, AddressingMode, Mnemonic};
///
/// assert_eq!(find_opcode(Mnemonic::Jmp, AddressingMode::Indirect), Some(0x6C));
/// assert_eq!(find_opcode(Mnemonic::Sta, AddressingMode::Immediate), None);
/// ```
pub fn find_opcode(mnemonic: Mnemonic, mode: AddressingMode) -> Option<u8> {
    if mnemonic == Mnemonic::Illegal {
        return None;
    }
    OPCODE_TABLE
        .iter()
        .position(|m| m.mnemonic == mnemonic && m.addressing_mode == mode)
        .map(|i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| m.is_documented()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_sizes_match_addressing_modes() {
        for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
            if meta.is_documented() {
                assert_eq!(
                    meta.size_bytes,
                    meta.addressing_mode.instruction_size(),
                    "opcode 0x{:02X}",
                    opcode
                );
            } else {
                assert_eq!(meta.size_bytes, 1);
            }
        }
    }

    #[test]
    fn test_find_opcode_round_trips_table() {
        for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
            if meta.is_documented() {
                assert_eq!(
                    find_opcode(meta.mnemonic, meta.addressing_mode),
                    Some(opcode as u8)
                );
            }
        }
    }
}
