use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Only the upper nibble exists in hardware; bits 0–3 always read as
    /// zero, which `from_bits_truncate` enforces on every raw write.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Zero.
        const Z = 0x80;
        /// Subtract.
        const N = 0x40;
        /// Half carry (out of bit 3, or bit 11 for 16-bit adds).
        const H = 0x20;
        /// Carry.
        const C = 0x10;
    }
}

/// A 16-bit register pair stored in a single cell.
///
/// The high and low halves are views of the same `u16`, so a write through
/// either half is immediately visible through the other view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegisterPair(u16);

impl RegisterPair {
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: u16) {
        self.0 = value;
    }

    #[inline]
    pub const fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn lo(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn set_hi(&mut self, value: u8) {
        self.0 = (self.0 & 0x00FF) | ((value as u16) << 8);
    }

    #[inline]
    pub fn set_lo(&mut self, value: u8) {
        self.0 = (self.0 & 0xFF00) | value as u16;
    }
}

/// Architectural register file of the SM83.
///
/// AF, BC, DE and HL are register pairs with the first-named register in the
/// high byte. The AF pair is only reachable through accessors that keep the
/// low nibble of F clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    af: RegisterPair,
    bc: RegisterPair,
    de: RegisterPair,
    hl: RegisterPair,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn a(&self) -> u8 {
        self.af.hi()
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af.set_hi(value);
    }

    #[inline]
    pub fn f(&self) -> Flags {
        Flags::from_bits_truncate(self.af.lo())
    }

    #[inline]
    pub fn set_f(&mut self, flags: Flags) {
        self.af.set_lo(flags.bits());
    }

    /// Write F from a raw byte; the low nibble is dropped.
    #[inline]
    pub fn set_f_bits(&mut self, value: u8) {
        self.set_f(Flags::from_bits_truncate(value));
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.bc.hi()
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc.set_hi(value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.bc.lo()
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc.set_lo(value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        self.de.hi()
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de.set_hi(value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.de.lo()
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de.set_lo(value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        self.hl.hi()
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl.set_hi(value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.hl.lo()
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl.set_lo(value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.af.get()
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        // Lower 4 bits of F are always zero.
        self.af.set(value & 0xFFF0);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.bc.get()
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.bc.set(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.de.get()
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.de.set(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.hl.get()
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.hl.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_halves_track_the_16_bit_view() {
        let mut pair = RegisterPair::new(0x1234);
        assert_eq!((pair.hi(), pair.lo()), (0x12, 0x34));

        pair.set_hi(0xAB);
        assert_eq!(pair.get(), 0xAB34);
        pair.set_lo(0xCD);
        assert_eq!(pair.get(), 0xABCD);

        pair.set(0x0F0E);
        assert_eq!((pair.hi(), pair.lo()), (0x0F, 0x0E));
    }

    #[test]
    fn register_pairs_use_high_byte_first_order() {
        let mut regs = Registers::default();
        regs.set_bc(0x0102);
        regs.set_de(0x0304);
        regs.set_hl(0x0506);
        assert_eq!((regs.b(), regs.c()), (0x01, 0x02));
        assert_eq!((regs.d(), regs.e()), (0x03, 0x04));
        assert_eq!((regs.h(), regs.l()), (0x05, 0x06));

        regs.set_b(0xAA);
        regs.set_e(0xBB);
        regs.set_l(0xCC);
        assert_eq!(regs.bc(), 0xAA02);
        assert_eq!(regs.de(), 0x03BB);
        assert_eq!(regs.hl(), 0x05CC);
    }

    #[test]
    fn af_keeps_low_flag_nibble_clear() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a(), 0x12);
        assert_eq!(regs.f().bits(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);

        regs.set_f_bits(0x5A);
        assert_eq!(regs.af(), 0x1250);

        regs.set_a(0x99);
        assert_eq!(regs.af(), 0x9950);
    }
}
