use crate::cpu::{Bus, Cpu, CpuEvent, RunState};

impl Cpu {
    pub(super) fn set_ime(&mut self, enabled: bool) {
        if self.ime != enabled {
            log::debug!(
                "SM83 interrupts {} at PC=0x{:04X}",
                if enabled { "enabled" } else { "disabled" },
                self.regs.pc
            );
        }
        self.ime = enabled;
    }

    pub(super) fn exec_di<B: Bus>(&mut self, bus: &mut B) {
        self.set_ime(false);
        bus.cpu_event(CpuEvent::InterruptsDisabled);
    }

    pub(super) fn exec_ei<B: Bus>(&mut self, bus: &mut B) {
        self.set_ime(true);
        bus.cpu_event(CpuEvent::InterruptsEnabled);
    }

    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) {
        log::debug!("SM83 HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.state = RunState::Halted;
        bus.cpu_event(CpuEvent::Halted);
    }

    /// STOP is encoded as two bytes; the padding byte is fetched and
    /// discarded.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        let _padding = self.fetch8(bus);
        log::debug!("SM83 STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.state = RunState::Stopped;
        bus.cpu_event(CpuEvent::Stopped);
    }
}
