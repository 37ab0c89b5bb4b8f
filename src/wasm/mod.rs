//! WebAssembly bindings for the cpu6502 interpreter.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser-based stepping and inspection of 6502 programs.

pub mod api;

pub use api::{Emulator6502, JsError};
