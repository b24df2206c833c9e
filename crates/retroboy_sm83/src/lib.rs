//! Cycle-stepped interpreter for the SM83, the 8-bit core inside the
//! Game Boy (DMG) SoC.
//!
//! The crate only models the CPU: memory and I/O are reached through the
//! [`Bus`] capability the host passes to every [`Cpu::step`] call, and the
//! interrupt controller observes the core through [`Bus::cpu_event`].

pub mod catalog;
pub mod cpu;
mod error;

pub use catalog::{Instruction, Op};
pub use cpu::{
    BootState, Bus, Cpu, CpuConfig, CpuEvent, Dispatch, FlatBus, Flags, FnBus, RegisterPair,
    Registers, RunState, Step,
};
pub use error::CpuError;

/// Largest cost any single dispatch can load into the tick budget
/// (a taken `CALL cc`).
pub const MAX_INSTRUCTION_TICKS: u8 = 24;
