use super::Cpu;

/// Execution state visible to the interrupt controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    /// Entered by HALT. No fetches until [`Cpu::wake`].
    Halted,
    /// Entered by STOP. No fetches until [`Cpu::wake`].
    Stopped,
    /// An unassigned opcode was executed. Only `reset` leaves this state.
    Locked { opcode: u8, addr: u16 },
}

/// Side effects the core reports to its collaborators through
/// [`super::Bus::cpu_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuEvent {
    /// EI or RETI executed.
    InterruptsEnabled,
    /// DI executed.
    InterruptsDisabled,
    Halted,
    Stopped,
    LockedUp { opcode: u8, addr: u16 },
}

impl Cpu {
    #[inline]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Remaining ticks of the instruction in flight.
    #[inline]
    pub fn ticks(&self) -> u8 {
        self.ticks
    }

    /// True when no instruction is in flight: the only point at which an
    /// interrupt controller may redirect execution.
    #[inline]
    pub fn at_instruction_boundary(&self) -> bool {
        self.ticks == 0
    }

    /// Whether the last EI/DI/RETI left interrupts enabled.
    #[inline]
    pub fn interrupts_enabled(&self) -> bool {
        self.ime
    }

    /// Leave HALT or STOP. Has no effect on a locked or running core.
    pub fn wake(&mut self) {
        if matches!(self.state, RunState::Halted | RunState::Stopped) {
            log::debug!("SM83 wake from {:?} at PC=0x{:04X}", self.state, self.regs.pc);
            self.state = RunState::Running;
        }
    }
}
