//! 6502 register file.

use std::fmt;

/// 6502 CPU register set.
///
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
/// - N V U B D I Z C: individual status flags
///
/// All widths are enforced by the field types, so every mutation truncates
/// to the register's width. Status byte packing lives in `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Program counter (address of next instruction)
    pub pc: u16,
    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub flag_n: bool,
    /// Overflow flag (set on signed overflow)
    pub flag_v: bool,
    /// Unused bit 5, reads back as whatever was last unpacked (1 at power-on)
    pub flag_u: bool,
    /// Break flag
    pub flag_b: bool,
    /// Decimal mode flag (stored only; the 2A03 has no BCD unit)
    pub flag_d: bool,
    /// Interrupt disable flag
    pub flag_i: bool,
    /// Zero flag (set if result is zero)
    pub flag_z: bool,
    /// Carry flag (set on unsigned overflow, cleared on borrow)
    pub flag_c: bool,
}

impl Registers {
    /// Creates a register file with the given PC and SP and every other
    /// register cleared. Only the unused bit is set in the status.
    pub const fn new(pc: u16, sp: u8) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp,
            flag_n: false,
            flag_v: false,
            flag_u: true,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
        }
    }

    /// Full address of the current stack slot.
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | self.sp as u16
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X}",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status()
        )
    }
}
