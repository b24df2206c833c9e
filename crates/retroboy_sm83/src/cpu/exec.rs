mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::catalog::{Op, ShiftOp};

use super::{Bus, Cpu};

impl Cpu {
    /// Run the semantic handler for `op`.
    ///
    /// The budget has already been loaded with the descriptor's cost;
    /// handlers only touch it to add a taken-branch penalty.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, op: Op) {
        match op {
            Op::Nop => {}
            Op::Stop => self.exec_stop(bus),
            Op::Halt => self.exec_halt(bus),
            Op::Di => self.exec_di(bus),
            Op::Ei => self.exec_ei(bus),
            // Both are resolved by `step` before a handler is chosen.
            Op::Prefix | Op::Invalid => {}

            Op::Ld(dst, src) => self.exec_ld_r_r(bus, dst, src),
            Op::LdImm(dst) => self.exec_ld_r_d8(bus, dst),
            Op::StoreA(target) => self.exec_ld_indirect_a(bus, target),
            Op::LoadA(source) => self.exec_ld_a_indirect(bus, source),
            Op::StoreHighImm => self.exec_ldh_a8_a(bus),
            Op::LoadHighImm => self.exec_ldh_a_a8(bus),
            Op::StoreHighC => self.exec_ldh_c_a(bus),
            Op::LoadHighC => self.exec_ldh_a_c(bus),
            Op::StoreAbs => self.exec_ld_a16_a(bus),
            Op::LoadAbs => self.exec_ld_a_a16(bus),

            Op::LdImm16(dst) => self.exec_ld_rr_d16(bus, dst),
            Op::StoreSp => self.exec_ld_a16_sp(bus),
            Op::LdSpHl => self.regs.sp = self.regs.hl(),
            Op::LdHlSpImm => self.exec_ld_hl_sp_r8(bus),
            Op::Push(reg) => self.exec_push(bus, reg),
            Op::Pop(reg) => self.exec_pop(bus, reg),

            Op::Alu(alu_op, src) => {
                let value = self.read_r8(bus, src);
                self.alu(alu_op, value);
            }
            Op::AluImm(alu_op) => {
                let value = self.fetch8(bus);
                self.alu(alu_op, value);
            }
            Op::Inc(reg) => self.exec_inc8(bus, reg),
            Op::Dec(reg) => self.exec_dec8(bus, reg),
            Op::Daa => self.alu_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            Op::Inc16(reg) => self.exec_inc16(reg),
            Op::Dec16(reg) => self.exec_dec16(reg),
            Op::AddHl(reg) => self.alu_add16_hl(self.read_r16(reg)),
            Op::AddSpImm => self.exec_add_sp_r8(bus),

            Op::Rlca => self.exec_rotate_a(ShiftOp::Rlc),
            Op::Rrca => self.exec_rotate_a(ShiftOp::Rrc),
            Op::Rla => self.exec_rotate_a(ShiftOp::Rl),
            Op::Rra => self.exec_rotate_a(ShiftOp::Rr),

            Op::Jr => self.exec_jr(bus, None),
            Op::JrCc(cc) => self.exec_jr(bus, Some(cc)),
            Op::Jp => self.exec_jp(bus, None),
            Op::JpCc(cc) => self.exec_jp(bus, Some(cc)),
            Op::JpHl => self.regs.pc = self.regs.hl(),
            Op::Call => self.exec_call(bus, None),
            Op::CallCc(cc) => self.exec_call(bus, Some(cc)),
            Op::Ret => self.exec_ret(bus, None),
            Op::RetCc(cc) => self.exec_ret(bus, Some(cc)),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(vector) => self.exec_rst(bus, vector),

            Op::Shift(shift_op, reg) => self.exec_shift(bus, shift_op, reg),
            Op::Bit(bit, reg) => self.exec_bit(bus, bit, reg),
            Op::Res(bit, reg) => self.exec_res(bus, bit, reg),
            Op::Set(bit, reg) => self.exec_set(bus, bit, reg),
        }
    }
}
