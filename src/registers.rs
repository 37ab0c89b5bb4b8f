//! # Status Register
//!
//! The processor status byte (`P`) packs eight condition bits:
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  N V U B D I Z C
//! ```
//!
//! Bit 5 (`U`) is wired high on the NMOS part, so every value the CPU holds
//! or restores has it set. `B` only has meaning in the copy of `P` pushed by
//! BRK/PHP; the CPU clears it when restoring status from the stack.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags, usable as masks for
    /// [`CPU::set_flag`](crate::CPU::set_flag) and [`CPU::flag`](crate::CPU::flag).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        /// Carry (unsigned overflow / no borrow).
        const CARRY = 0x01;
        /// Zero result.
        const ZERO = 0x02;
        /// IRQ disable.
        const INTERRUPT_DISABLE = 0x04;
        /// Decimal (BCD) mode.
        const DECIMAL = 0x08;
        /// Break; set in status bytes pushed by BRK and PHP.
        const BREAK = 0x10;
        /// Unused; always reads as 1.
        const UNUSED = 0x20;
        /// Signed overflow.
        const OVERFLOW = 0x40;
        /// Negative (bit 7 of the result).
        const NEGATIVE = 0x80;
    }
}

impl StatusFlags {
    /// Status immediately after reset: IRQs disabled, unused bit high.
    pub const POWER_ON: StatusFlags =
        StatusFlags::UNUSED.union(StatusFlags::INTERRUPT_DISABLE);

    /// Converts a byte pulled from the stack into register form.
    ///
    /// `B` is discarded and `U` forced on.
    pub fn from_stack(value: u8) -> Self {
        (StatusFlags::from_bits_retain(value) - StatusFlags::BREAK) | StatusFlags::UNUSED
    }

    /// Byte to push for the given source; BRK/PHP push with `B` set,
    /// hardware interrupts push with it clear.
    pub fn to_stack(self, brk: bool) -> u8 {
        let pushed = self | StatusFlags::UNUSED;
        if brk {
            (pushed | StatusFlags::BREAK).bits()
        } else {
            (pushed - StatusFlags::BREAK).bits()
        }
    }

    /// Sets `Z` and `N` from a result byte.
    pub fn update_zero_negative(&mut self, value: u8) {
        self.set(StatusFlags::ZERO, value == 0);
        self.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        StatusFlags::POWER_ON
    }
}
