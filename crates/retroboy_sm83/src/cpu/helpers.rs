use crate::catalog::{Cond, R16, R8, Stack16};

use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Read the byte at PC and advance PC. Every byte of the current
    /// instruction passes through here, so it is also what fills the
    /// dispatch record.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        if let Some(slot) = self.fetched.get_mut(self.fetched_len as usize) {
            *slot = value;
            self.fetched_len += 1;
        }
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    /// Read an 8-bit register, or the byte at HL for [`R8::HlInd`].
    #[inline]
    pub(super) fn read_r8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b(),
            R8::C => self.regs.c(),
            R8::D => self.regs.d(),
            R8::E => self.regs.e(),
            R8::H => self.regs.h(),
            R8::L => self.regs.l(),
            R8::HlInd => bus.read8(self.regs.hl()),
            R8::A => self.regs.a(),
        }
    }

    #[inline]
    pub(super) fn write_r8<B: Bus>(&mut self, bus: &mut B, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.set_b(value),
            R8::C => self.regs.set_c(value),
            R8::D => self.regs.set_d(value),
            R8::E => self.regs.set_e(value),
            R8::H => self.regs.set_h(value),
            R8::L => self.regs.set_l(value),
            R8::HlInd => bus.write8(self.regs.hl(), value),
            R8::A => self.regs.set_a(value),
        }
    }

    pub(super) fn read_r16(&self, reg: R16) -> u16 {
        match reg {
            R16::Bc => self.regs.bc(),
            R16::De => self.regs.de(),
            R16::Hl => self.regs.hl(),
            R16::Sp => self.regs.sp,
        }
    }

    pub(super) fn write_r16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::Bc => self.regs.set_bc(value),
            R16::De => self.regs.set_de(value),
            R16::Hl => self.regs.set_hl(value),
            R16::Sp => self.regs.sp = value,
        }
    }

    pub(super) fn read_stack16(&self, reg: Stack16) -> u16 {
        match reg {
            Stack16::Bc => self.regs.bc(),
            Stack16::De => self.regs.de(),
            Stack16::Hl => self.regs.hl(),
            Stack16::Af => self.regs.af(),
        }
    }

    /// POP AF goes through `set_af`, which drops the low nibble of F.
    pub(super) fn write_stack16(&mut self, reg: Stack16, value: u16) {
        match reg {
            Stack16::Bc => self.regs.set_bc(value),
            Stack16::De => self.regs.set_de(value),
            Stack16::Hl => self.regs.set_hl(value),
            Stack16::Af => self.regs.set_af(value),
        }
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let lo = value as u8;
        let hi = (value >> 8) as u8;
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn cc_condition(&self, cc: Cond) -> bool {
        match cc {
            Cond::Nz => !self.get_flag(Flags::Z),
            Cond::Z => self.get_flag(Flags::Z),
            Cond::Nc => !self.get_flag(Flags::C),
            Cond::C => self.get_flag(Flags::C),
        }
    }
}
