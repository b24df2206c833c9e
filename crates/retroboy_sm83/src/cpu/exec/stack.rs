use crate::catalog::Stack16;
use crate::cpu::{Bus, Cpu, CpuEvent};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, reg: Stack16) {
        let value = self.read_stack16(reg);
        self.push_u16(bus, value);
    }

    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, reg: Stack16) {
        let value = self.pop_u16(bus);
        self.write_stack16(reg, value);
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(vector);
    }

    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
        self.set_ime(true);
        bus.cpu_event(CpuEvent::InterruptsEnabled);
    }
}
