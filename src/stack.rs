//! # Stack Operations
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows
//! downward. SP is an 8-bit offset into this page; the full stack address is
//! 0x0100 | SP. SP wraps from 0x00 to 0xFF (and back) without any guard,
//! exactly as on hardware.

use crate::{MemoryBus, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Writes `value` at the current stack slot, then decrements SP.
    pub fn push(&mut self, value: u8) {
        let addr = self.regs.stack_addr();
        self.memory.write(addr, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte at the new stack slot.
    pub fn pop(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(self.regs.stack_addr())
    }

    /// Pushes a word high byte first, so the low byte pops first.
    pub fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pops a word pushed by `push_word`.
    pub fn pop_word(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlatMemory, MemoryBus, CPU};

    #[test]
    fn test_push_writes_then_decrements() {
        let mut cpu = CPU::new(FlatMemory::new());

        cpu.push(0x42);

        assert_eq!(cpu.memory().read(0x01FD), 0x42);
        assert_eq!(cpu.sp(), 0xFC);
    }

    #[test]
    fn test_push_pop_roundtrip_every_byte() {
        let mut cpu = CPU::new(FlatMemory::new());

        for value in 0..=u8::MAX {
            let sp = cpu.sp();
            cpu.push(value);
            assert_eq!(cpu.pop(), value);
            assert_eq!(cpu.sp(), sp);
        }
    }

    #[test]
    fn test_push_word_pops_low_byte_first() {
        let mut cpu = CPU::new(FlatMemory::new());
        let sp = cpu.sp();

        cpu.push_word(0xAABB);

        assert_eq!(cpu.pop(), 0xBB);
        assert_eq!(cpu.pop(), 0xAA);
        assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn test_pop_word_inverts_push_word() {
        let mut cpu = CPU::new(FlatMemory::new());

        cpu.push_word(0x1234);

        assert_eq!(cpu.pop_word(), 0x1234);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_stack_pointer_wraps_below_zero() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_sp(0x00);

        cpu.push(0x11);
        assert_eq!(cpu.memory().read(0x0100), 0x11);
        assert_eq!(cpu.sp(), 0xFF);

        cpu.push(0x22);
        assert_eq!(cpu.memory().read(0x01FF), 0x22);

        assert_eq!(cpu.pop(), 0x22);
        assert_eq!(cpu.pop(), 0x11);
        assert_eq!(cpu.sp(), 0x00);
    }
}
