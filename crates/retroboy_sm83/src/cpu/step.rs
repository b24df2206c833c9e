use std::fmt;

use crate::catalog::{self, Instruction, Op, PREFIX};
use crate::{CpuError, MAX_INSTRUCTION_TICKS};

use super::{Bus, Cpu, CpuEvent, RunState};

/// Outcome of one scheduler tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// An instruction is still in flight; `remaining` ticks are left
    /// before the next fetch.
    Busy { remaining: u8 },
    /// A new instruction was fetched and executed on this tick.
    Executed(Dispatch),
    /// The budget is drained and the core is halted or stopped.
    Idle(RunState),
}

/// Record of one dispatched instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// Address of the first byte (the opcode or the `0xCB` escape).
    pub addr: u16,
    bytes: [u8; 3],
    len: u8,
    pub instruction: &'static Instruction,
}

impl Dispatch {
    /// Every byte fetched from the instruction stream, escape byte included.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Immediate operand bytes, little-endian as fetched.
    pub fn operands(&self) -> &[u8] {
        match self.bytes() {
            [PREFIX, ..] => &[],
            [_, rest @ ..] => rest,
            [] => &[],
        }
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}: {}",
            self.addr,
            self.instruction.render(self.operands())
        )
    }
}

impl Cpu {
    /// Advance by exactly one tick.
    ///
    /// With ticks left in the budget this only decrements it. Otherwise a
    /// halted or stopped core idles, and a running core fetches, executes
    /// and reloads the budget with the instruction's cost.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Step, CpuError> {
        if let RunState::Locked { opcode, addr } = self.state {
            return Err(CpuError::Locked { opcode, addr });
        }

        if self.ticks > 0 {
            self.ticks -= 1;
            return Ok(Step::Busy {
                remaining: self.ticks,
            });
        }

        match self.state {
            RunState::Running => {}
            idle => return Ok(Step::Idle(idle)),
        }

        let addr = self.regs.pc;
        self.fetched_len = 0;
        let mut instruction = catalog::lookup(self.fetch8(bus));
        if instruction.op == Op::Prefix {
            instruction = catalog::lookup_prefixed(self.fetch8(bus));
        }

        if !instruction.is_valid() {
            return Err(self.lock_up(bus, addr));
        }

        self.ticks = instruction.ticks;
        self.execute(bus, instruction.op);

        let dispatch = Dispatch {
            addr,
            bytes: self.fetched,
            len: self.fetched_len,
            instruction,
        };
        log::trace!("{dispatch}");
        bus.instruction_dispatched(&dispatch);
        Ok(Step::Executed(dispatch))
    }

    /// Step until the next instruction has been dispatched, or the core
    /// is found idle.
    ///
    /// Drains whatever is left of the instruction in flight first, so the
    /// returned dispatch is always a fresh one.
    pub fn step_instruction<B: Bus>(&mut self, bus: &mut B) -> Result<Step, CpuError> {
        loop {
            match self.step(bus)? {
                Step::Busy { .. } => continue,
                other => return Ok(other),
            }
        }
    }

    /// Add a taken-branch penalty to the budget of the instruction being
    /// executed.
    pub(super) fn charge(&mut self, extra: u8) {
        self.ticks = match self.ticks.checked_add(extra) {
            Some(ticks) if ticks <= MAX_INSTRUCTION_TICKS => ticks,
            _ => panic!(
                "tick budget overflow: {} + {extra} at PC=0x{:04X}",
                self.ticks, self.regs.pc
            ),
        };
    }

    fn lock_up<B: Bus>(&mut self, bus: &mut B, addr: u16) -> CpuError {
        let opcode = self.fetched[0];
        log::error!(
            "SM83 locked: invalid opcode 0x{opcode:02X} at PC=0x{addr:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.ticks = 0;
        self.state = RunState::Locked { opcode, addr };
        bus.cpu_event(CpuEvent::LockedUp { opcode, addr });
        CpuError::InvalidOpcode { opcode, addr }
    }
}
