//! CPU configuration.
//!
//! Chip-variant choices that are observable by programs: what happens on an
//! undocumented opcode, whether decimal mode changes ADC/SBC, and whether a
//! reset wipes memory. Also holds the self-loop stop condition for run loops.

/// What the dispatcher does with one of the 105 undocumented opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodePolicy {
    /// Refuse to execute: PC stays on the opcode and `step` returns
    /// [`ExecutionError::IllegalOpcode`](crate::ExecutionError::IllegalOpcode).
    #[default]
    Trap,

    /// Treat the opcode as a one-byte NOP.
    Nop,
}

/// Configuration for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, IllegalOpcodePolicy};
///
/// let config = CpuConfig::default()
///     .with_illegal_opcode_policy(IllegalOpcodePolicy::Nop)
///     .with_decimal_mode(true);
///
/// assert!(config.decimal_mode);
/// assert!(!config.clear_memory_on_reset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Handling of undocumented opcodes.
    pub illegal_opcode_policy: IllegalOpcodePolicy,

    /// Honour the D flag in ADC/SBC (NMOS BCD arithmetic).
    ///
    /// Off by default: the Ricoh 2A03 used in the NES has the D flag but no
    /// BCD adder.
    pub decimal_mode: bool,

    /// Zero all 64KB of memory during `reset`, after the reset vector has
    /// been read. Real hardware leaves memory alone.
    pub clear_memory_on_reset: bool,

    /// End run loops when an instruction leaves PC where it was (`JMP *`,
    /// a branch to itself). Test ROMs park there to signal completion; NES
    /// programs also spin there while waiting for NMI, so this is off by
    /// default.
    pub stop_on_self_loop: bool,
}

impl CpuConfig {
    /// Ricoh 2A03 (NES): binary-only arithmetic. Same as `default()`.
    pub const fn ricoh_2a03() -> Self {
        Self {
            illegal_opcode_policy: IllegalOpcodePolicy::Trap,
            decimal_mode: false,
            clear_memory_on_reset: false,
            stop_on_self_loop: false,
        }
    }

    /// Stock NMOS 6502 with working decimal mode.
    pub const fn nmos() -> Self {
        Self {
            decimal_mode: true,
            ..Self::ricoh_2a03()
        }
    }

    pub const fn with_illegal_opcode_policy(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_opcode_policy = policy;
        self
    }

    pub const fn with_decimal_mode(mut self, enabled: bool) -> Self {
        self.decimal_mode = enabled;
        self
    }

    pub const fn with_clear_memory_on_reset(mut self, enabled: bool) -> Self {
        self.clear_memory_on_reset = enabled;
        self
    }

    pub const fn with_stop_on_self_loop(mut self, enabled: bool) -> Self {
        self.stop_on_self_loop = enabled;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::ricoh_2a03()
    }
}
