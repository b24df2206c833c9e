use crate::catalog::{Indirect, R16, R8};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, dst: R8, src: R8) {
        let value = self.read_r8(bus, src);
        self.write_r8(bus, dst, value);
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, dst: R8) {
        let value = self.fetch8(bus);
        self.write_r8(bus, dst, value);
    }

    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, dst: R16) {
        let value = self.fetch16(bus);
        self.write_r16(dst, value);
    }

    /// Address for `[BC]`, `[DE]`, `[HL+]`, `[HL-]`, applying the HL
    /// post-increment/decrement.
    fn indirect_addr(&mut self, target: Indirect) -> u16 {
        match target {
            Indirect::Bc => self.regs.bc(),
            Indirect::De => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, target: Indirect) {
        let addr = self.indirect_addr(target);
        bus.write8(addr, self.regs.a());
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, source: Indirect) {
        let addr = self.indirect_addr(source);
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    pub(super) fn exec_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        bus.write8(addr, self.regs.a());
    }

    pub(super) fn exec_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.regs.c());
        bus.write8(addr, self.regs.a());
    }

    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | u16::from(self.regs.c());
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a());
    }

    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let value = bus.read8(addr);
        self.regs.set_a(value);
    }

    /// `LD [a16], SP`, low byte first.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let value = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(value);
    }
}
