use crate::catalog::AluOp;

use super::{Cpu, Flags};

impl Cpu {
    /// Apply one of the eight accumulator operations to `value`.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// ADD/ADC on A. `use_carry` selects ADC.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a();
        let carry_in = u8::from(use_carry && self.get_flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.set_a(result);

        let mut f = Flags::empty();
        f.set(Flags::Z, result == 0);
        f.set(Flags::H, half > 0x0F);
        f.set(Flags::C, full > 0xFF);
        self.regs.set_f(f);
    }

    /// SUB/SBC on A. `use_carry` selects SBC.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry);
        self.regs.set_a(result);
    }

    /// CP: flags of `A - value`, A untouched.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a();
        let borrow = u8::from(use_carry && self.get_flag(Flags::C));

        let mut f = Flags::N;
        f.set(Flags::H, (a & 0x0F) < (value & 0x0F) + borrow);
        f.set(Flags::C, u16::from(a) < u16::from(value) + u16::from(borrow));

        let result = a.wrapping_sub(value).wrapping_sub(borrow);
        f.set(Flags::Z, result == 0);
        self.regs.set_f(f);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a() & value;
        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a() | value;
        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a() ^ value;
        self.regs.set_a(result);

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// After an addition the corrections are chosen from the flags and the
    /// digit thresholds, and C is set when the high digit was corrected.
    /// After a subtraction only the flags select corrections and C keeps its
    /// value. N is left alone in both cases.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a();
        let mut carry = self.get_flag(Flags::C);
        let half = self.get_flag(Flags::H);

        if !self.get_flag(Flags::N) {
            if carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
            if half || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
        } else {
            if carry {
                a = a.wrapping_sub(0x60);
            }
            if half {
                a = a.wrapping_sub(0x06);
            }
        }

        self.regs.set_a(a);
        self.set_flag(Flags::Z, a == 0);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, carry);
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (value & 0x0F) == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// `ADD HL,rr`: carries out of bit 11 and bit 15, Z unaffected.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, u32::from(hl) + u32::from(value) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// `base + sign_extend(imm8)` for `ADD SP,e` and `LD HL,SP+e`.
    ///
    /// H and C come from the unsigned low-byte addition; Z and N are
    /// cleared.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let low = base & 0x00FF;
        let imm = u16::from(imm8);

        let mut f = Flags::empty();
        f.set(Flags::H, (low & 0x0F) + (imm & 0x0F) > 0x0F);
        f.set(Flags::C, low + imm > 0xFF);
        self.regs.set_f(f);

        base.wrapping_add(imm8 as i8 as u16)
    }
}
