//! WASM API for the 6502 interpreter.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt
//! requests and state inspection.

use crate::{
    regions, CpuConfig, FlatMemory, IllegalOpcodePolicy, MemoryBus, StopReason, CPU, OPCODE_TABLE,
};
use wasm_bindgen::prelude::*;

/// Where a freshly constructed emulator starts executing.
const DEFAULT_PROGRAM_START: u16 = 0x0600;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

fn describe(reason: StopReason) -> String {
    match reason {
        StopReason::BudgetExhausted => "budget".to_string(),
        StopReason::Halted => "halted".to_string(),
        StopReason::Breakpoint(pc) => format!("breakpoint:{:04X}", pc),
        StopReason::SelfLoop(pc) => format!("self-loop:{:04X}", pc),
        StopReason::Condition => "condition".to_string(),
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u16,
    last_stop: String,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator over 64KB of zeroed RAM, reset to 0x0600.
    ///
    /// `decimal_mode` selects NMOS BCD arithmetic; `lenient` runs illegal
    /// opcodes as NOPs instead of trapping. Run loops stop on self-loops so a
    /// finished program parked on `JMP *` returns control to the page.
    #[wasm_bindgen(constructor)]
    pub fn new(decimal_mode: bool, lenient: bool) -> Self {
        let policy = if lenient {
            IllegalOpcodePolicy::Nop
        } else {
            IllegalOpcodePolicy::Trap
        };
        let config = CpuConfig::default()
            .with_decimal_mode(decimal_mode)
            .with_illegal_opcode_policy(policy)
            .with_stop_on_self_loop(true);

        let mut memory = FlatMemory::new();
        memory.write_u16(regions::RESET_VECTOR, DEFAULT_PROGRAM_START);

        Emulator6502 {
            cpu: CPU::with_config(memory, config),
            program_start: DEFAULT_PROGRAM_START,
            program_end: DEFAULT_PROGRAM_START,
            last_stop: String::new(),
        }
    }

    /// Execute a single instruction (or interrupt entry)
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step()?;
        Ok(())
    }

    /// Run at most `max_steps` steps and return how many were taken.
    ///
    /// The reason the run ended is available from `last_stop`.
    pub fn run(&mut self, max_steps: u32) -> Result<u32, JsError> {
        let outcome = self.cpu.run_for_steps(max_steps as u64)?;
        self.last_stop = describe(outcome.reason);
        Ok(outcome.steps as u32)
    }

    /// Reset the CPU. Memory contents are kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Point the reset vector at `addr` (takes effect on the next reset)
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.cpu.memory_mut().write_u16(regions::RESET_VECTOR, addr);
    }

    pub fn request_irq(&mut self) {
        self.cpu.request_irq();
    }

    pub fn request_nmi(&mut self) {
        self.cpu.request_nmi();
    }

    pub fn add_breakpoint(&mut self, addr: u16) {
        self.cpu.add_breakpoint(addr);
    }

    pub fn remove_breakpoint(&mut self, addr: u16) -> bool {
        self.cpu.remove_breakpoint(addr)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn last_stop(&self) -> String {
        self.last_stop.clone()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write(addr, value);
    }

    /// Copy of a 256-byte page (for efficient display)
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.cpu.memory().page(page))
    }

    /// Mnemonic of the opcode stored at `addr` ("???" if undocumented)
    pub fn mnemonic_at(&self, addr: u16) -> String {
        let opcode = self.cpu.read(addr);
        OPCODE_TABLE[opcode as usize].mnemonic.to_string()
    }

    /// Load a program into memory and set PC.
    ///
    /// Bytes past 0xFFFF are dropped. `program_end` becomes the address of
    /// the last byte loaded, or `start_addr` for an empty program.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let loaded = self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = match loaded {
            0 => start_addr,
            n => start_addr.wrapping_add((n - 1) as u16),
        };
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Address of the last byte of the loaded program
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new(false, false)
    }
}
