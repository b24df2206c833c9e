use crate::catalog::{R8, ShiftOp};

use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Rotate/shift `value`, leaving Z N H C as the extended-table forms
    /// define them.
    pub(super) fn shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.get_flag(Flags::C);
        let (result, carry) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        let mut f = Flags::empty();
        f.set(Flags::Z, result == 0);
        f.set(Flags::C, carry);
        self.regs.set_f(f);
        result
    }

    pub(super) fn exec_shift<B: Bus>(&mut self, bus: &mut B, op: ShiftOp, reg: R8) {
        let value = self.read_r8(bus, reg);
        let result = self.shift(op, value);
        self.write_r8(bus, reg, result);
    }

    /// RLCA/RRCA/RLA/RRA: the extended rotate on A, except Z is always
    /// cleared.
    pub(super) fn exec_rotate_a(&mut self, op: ShiftOp) {
        let result = self.shift(op, self.regs.a());
        self.regs.set_a(result);
        self.set_flag(Flags::Z, false);
    }

    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: R8) {
        let value = self.read_r8(bus, reg);
        self.set_flag(Flags::Z, value & (1 << bit) == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, true);
    }

    pub(super) fn exec_res<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: R8) {
        let value = self.read_r8(bus, reg);
        self.write_r8(bus, reg, value & !(1 << bit));
    }

    pub(super) fn exec_set<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: R8) {
        let value = self.read_r8(bus, reg);
        self.write_r8(bus, reg, value | (1 << bit));
    }
}
