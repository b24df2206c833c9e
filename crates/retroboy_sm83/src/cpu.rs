mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod regs;
mod state;
mod step;


pub use bus::{Bus, FlatBus, FnBus};
pub use init::{BootState, CpuConfig};
pub use regs::{Flags, RegisterPair, Registers};
pub use state::{CpuEvent, RunState};
pub use step::{Dispatch, Step};

/// Extra ticks charged when a conditional `JR`/`JP` is taken.
pub const JUMP_PENALTY: u8 = 4;
/// Extra ticks charged when a conditional `CALL`/`RET` is taken.
pub const CALL_PENALTY: u8 = 12;

/// SM83 core state.
///
/// One value per emulated processor. The core owns no memory: every
/// [`Cpu::step`] borrows the host's [`Bus`] for the duration of the call.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Ticks left before the next opcode fetch.
    ticks: u8,
    state: RunState,
    /// Mirror of the last EI/DI/RETI effect, for the interrupt controller.
    ime: bool,
    config: CpuConfig,
    /// Bytes fetched from the instruction stream by the current dispatch.
    fetched: [u8; 3],
    fetched_len: u8,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f().contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut f = self.regs.f();
        f.set(flag, value);
        self.regs.set_f(f);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.set_f(Flags::empty());
    }
}
