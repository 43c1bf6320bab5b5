//! # Status Register Codec
//!
//! Packs the eight flag bits into the processor status byte and back.
//!
//! Bit layout (MSB to LSB): `N V U B D I Z C`.
//!
//! Both U and B round-trip through `set_status`/`status`. Real hardware has
//! no storage for B and forces U high; keeping them as plain bits makes
//! `PLP`/`RTI` exact inverses of `PHP`/interrupt entry.

use crate::Registers;

/// Carry flag
pub const FLAG_C: u8 = 0b0000_0001;
/// Zero flag
pub const FLAG_Z: u8 = 0b0000_0010;
/// Interrupt disable flag
pub const FLAG_I: u8 = 0b0000_0100;
/// Decimal mode flag
pub const FLAG_D: u8 = 0b0000_1000;
/// Break flag
pub const FLAG_B: u8 = 0b0001_0000;
/// Unused bit 5
pub const FLAG_U: u8 = 0b0010_0000;
/// Overflow flag
pub const FLAG_V: u8 = 0b0100_0000;
/// Negative flag
pub const FLAG_N: u8 = 0b1000_0000;

impl Registers {
    /// Returns the status register as a packed byte.
    ///
    /// ```
    /// use cpu2a03::Registers;
    ///
    /// let mut regs = Registers::new(0x8000, 0xFD);
    /// regs.flag_n = true;
    /// regs.flag_c = true;
    /// assert_eq!(regs.status(), 0b1010_0001);
    /// ```
    pub const fn status(&self) -> u8 {
        let mut status = 0;

        if self.flag_n {
            status |= FLAG_N;
        }
        if self.flag_v {
            status |= FLAG_V;
        }
        if self.flag_u {
            status |= FLAG_U;
        }
        if self.flag_b {
            status |= FLAG_B;
        }
        if self.flag_d {
            status |= FLAG_D;
        }
        if self.flag_i {
            status |= FLAG_I;
        }
        if self.flag_z {
            status |= FLAG_Z;
        }
        if self.flag_c {
            status |= FLAG_C;
        }

        status
    }

    /// Unpacks all eight bits of `status`, including U and B.
    pub fn set_status(&mut self, status: u8) {
        self.flag_n = status & FLAG_N != 0;
        self.flag_v = status & FLAG_V != 0;
        self.flag_u = status & FLAG_U != 0;
        self.flag_b = status & FLAG_B != 0;
        self.flag_d = status & FLAG_D != 0;
        self.flag_i = status & FLAG_I != 0;
        self.flag_z = status & FLAG_Z != 0;
        self.flag_c = status & FLAG_C != 0;
    }

    /// Sets Z if `value` is zero and N from bit 7 of `value`.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs() -> Registers {
        Registers::new(0x0000, 0xFD)
    }

    #[test]
    fn test_power_on_status_has_unused_bit() {
        assert_eq!(regs().status(), FLAG_U);
    }

    #[test]
    fn test_status_roundtrip_every_byte() {
        let mut regs = regs();

        for status in 0..=u8::MAX {
            regs.set_status(status);
            assert_eq!(regs.status(), status, "status 0x{:02X}", status);
        }
    }

    #[test]
    fn test_set_status_of_status_is_idempotent() {
        let mut regs = regs();
        regs.flag_v = true;
        regs.flag_z = true;
        regs.flag_i = true;

        let before = regs;
        regs.set_status(regs.status());

        assert_eq!(regs, before);
    }

    #[test]
    fn test_set_status_clears_unused_bit() {
        let mut regs = regs();
        regs.set_status(0x00);

        assert!(!regs.flag_u);
        assert_eq!(regs.status(), 0x00);
    }

    #[test]
    fn test_set_zero_negative_every_byte() {
        let mut regs = regs();

        for value in 0..=u8::MAX {
            regs.set_zero_negative(value);
            assert_eq!(regs.flag_z, value == 0);
            assert_eq!(regs.flag_n, value & 0x80 != 0);
        }
    }
}
