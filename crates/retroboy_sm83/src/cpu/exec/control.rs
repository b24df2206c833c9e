use crate::catalog::Cond;
use crate::cpu::{Bus, Cpu, CALL_PENALTY, JUMP_PENALTY};

impl Cpu {
    /// Evaluate an optional condition, charging `penalty` when a
    /// conditional transfer is taken. Unconditional forms already carry
    /// their full cost in the catalog.
    fn branch_taken(&mut self, cc: Option<Cond>, penalty: u8) -> bool {
        match cc {
            None => true,
            Some(cc) => {
                let taken = self.cc_condition(cc);
                if taken {
                    self.charge(penalty);
                }
                taken
            }
        }
    }

    /// `JR e` / `JR cc, e`. The displacement is relative to the address
    /// after the operand.
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, cc: Option<Cond>) {
        let offset = self.fetch8(bus) as i8;
        if self.branch_taken(cc, JUMP_PENALTY) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        }
    }

    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, cc: Option<Cond>) {
        let addr = self.fetch16(bus);
        if self.branch_taken(cc, JUMP_PENALTY) {
            self.regs.pc = addr;
        }
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cc: Option<Cond>) {
        let addr = self.fetch16(bus);
        if self.branch_taken(cc, CALL_PENALTY) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cc: Option<Cond>) {
        if self.branch_taken(cc, CALL_PENALTY) {
            self.regs.pc = self.pop_u16(bus);
        }
    }
}
