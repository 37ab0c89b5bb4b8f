//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function that takes a
//! mutable reference to the CPU and the addressing mode decoded from the opcode
//! table. The dispatcher has already advanced PC past the opcode byte; the
//! routine consumes any operand bytes through the addressing resolver.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, MemoryBus, Mnemonic, CPU};

/// Runs the semantic routine for `mnemonic` in `mode`.
///
/// `Mnemonic::Illegal` never reaches this point; the dispatcher applies the
/// illegal-opcode policy first.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, mode: AddressingMode) {
    match mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, mode),
        Mnemonic::Sbc => alu::execute_sbc(cpu, mode),
        Mnemonic::And => alu::execute_and(cpu, mode),
        Mnemonic::Ora => alu::execute_ora(cpu, mode),
        Mnemonic::Eor => alu::execute_eor(cpu, mode),
        Mnemonic::Bit => alu::execute_bit(cpu, mode),
        Mnemonic::Cmp => alu::execute_cmp(cpu, mode),
        Mnemonic::Cpx => alu::execute_cpx(cpu, mode),
        Mnemonic::Cpy => alu::execute_cpy(cpu, mode),

        Mnemonic::Asl => shifts::execute_asl(cpu, mode),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, mode),
        Mnemonic::Rol => shifts::execute_rol(cpu, mode),
        Mnemonic::Ror => shifts::execute_ror(cpu, mode),

        Mnemonic::Lda => load_store::execute_lda(cpu, mode),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, mode),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, mode),
        Mnemonic::Sta => load_store::execute_sta(cpu, mode),
        Mnemonic::Stx => load_store::execute_stx(cpu, mode),
        Mnemonic::Sty => load_store::execute_sty(cpu, mode),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, mode),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, mode),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),

        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),

        Mnemonic::Pha => stack::execute_pha(cpu),
        Mnemonic::Php => stack::execute_php(cpu),
        Mnemonic::Pla => stack::execute_pla(cpu),
        Mnemonic::Plp => stack::execute_plp(cpu),

        Mnemonic::Clc => flags::execute_clc(cpu),
        Mnemonic::Sec => flags::execute_sec(cpu),
        Mnemonic::Cli => flags::execute_cli(cpu),
        Mnemonic::Sei => flags::execute_sei(cpu),
        Mnemonic::Cld => flags::execute_cld(cpu),
        Mnemonic::Sed => flags::execute_sed(cpu),
        Mnemonic::Clv => flags::execute_clv(cpu),

        Mnemonic::Bcc => branches::execute_bcc(cpu, mode),
        Mnemonic::Bcs => branches::execute_bcs(cpu, mode),
        Mnemonic::Beq => branches::execute_beq(cpu, mode),
        Mnemonic::Bne => branches::execute_bne(cpu, mode),
        Mnemonic::Bmi => branches::execute_bmi(cpu, mode),
        Mnemonic::Bpl => branches::execute_bpl(cpu, mode),
        Mnemonic::Bvc => branches::execute_bvc(cpu, mode),
        Mnemonic::Bvs => branches::execute_bvs(cpu, mode),

        Mnemonic::Jmp => control::execute_jmp(cpu, mode),
        Mnemonic::Jsr => control::execute_jsr(cpu, mode),
        Mnemonic::Rts => control::execute_rts(cpu),
        Mnemonic::Brk => control::execute_brk(cpu),
        Mnemonic::Rti => control::execute_rti(cpu),
        Mnemonic::Nop => control::execute_nop(cpu),

        Mnemonic::Illegal => {}
    }
}
