//! # Interrupt Controller
//!
//! NMI, IRQ and RST are explicit, synchronous calls made by the host between
//! `step()` calls. Each one runs the same entry sequence:
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push the packed status byte
//! 3. Load PC from the little-endian vector
//! 4. Set the I flag
//! 5. Charge 7 cycles
//!
//! The host is the one deciding whether an IRQ should be taken, so `irq()`
//! does not look at the I flag. `irq_if_enabled()` does.

use crate::{MemoryBus, CPU};

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector address.
pub const RST_VECTOR: u16 = 0xFFFC;

/// IRQ (and hardware BRK) vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles charged for an interrupt entry.
pub const INTERRUPT_CYCLES: u64 = 7;

/// Which vector BRK jumps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrkVector {
    /// Route BRK through 0xFFFA.
    #[default]
    Nmi,
    /// Route BRK through 0xFFFE, as NMOS hardware does.
    Irq,
}

impl BrkVector {
    /// Address of the selected vector.
    pub const fn address(self) -> u16 {
        match self {
            BrkVector::Nmi => NMI_VECTOR,
            BrkVector::Irq => IRQ_VECTOR,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the interrupt entry sequence through `vector`, charging 7 cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu2a03::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0xFFFA, 0x00);
    /// memory.write(0xFFFB, 0x90);
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.set_pc(0x8000);
    /// cpu.nmi();
    ///
    /// assert_eq!(cpu.pc(), 0x9000);
    /// assert!(cpu.flag_i());
    /// assert_eq!(cpu.cycles(), 7);
    /// ```
    pub fn interrupt(&mut self, vector: u16) {
        self.enter_interrupt(vector);
        self.cycles += INTERRUPT_CYCLES;
    }

    /// Entry sequence without the cycle charge. BRK pays through its opcode
    /// table entry instead.
    pub(crate) fn enter_interrupt(&mut self, vector: u16) {
        log::debug!(
            "interrupt via 0x{:04X} from PC=0x{:04X}",
            vector,
            self.regs.pc
        );

        self.push_word(self.regs.pc);
        self.push(self.regs.status());
        self.regs.pc = self.memory.read_word(vector);
        self.regs.flag_i = true;
    }

    /// Non-maskable interrupt through 0xFFFA.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
    }

    /// Interrupt request through 0xFFFE, regardless of the I flag.
    pub fn irq(&mut self) {
        self.interrupt(IRQ_VECTOR);
    }

    /// Takes an IRQ only when the I flag is clear. Returns whether it was taken.
    pub fn irq_if_enabled(&mut self) -> bool {
        if self.regs.flag_i {
            return false;
        }
        self.irq();
        true
    }

    /// Reset through 0xFFFC.
    pub fn rst(&mut self) {
        self.interrupt(RST_VECTOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFA, 0xAA);
        memory.write(0xFFFB, 0xAB);
        memory.write(0xFFFC, 0xCA);
        memory.write(0xFFFD, 0xCB);
        memory.write(0xFFFE, 0xBA);
        memory.write(0xFFFF, 0xBB);

        let mut cpu = CPU::new(memory);
        cpu.set_pc(0x8123);
        cpu
    }

    #[test]
    fn test_brk_vector_addresses() {
        assert_eq!(BrkVector::Nmi.address(), 0xFFFA);
        assert_eq!(BrkVector::Irq.address(), 0xFFFE);
        assert_eq!(BrkVector::default(), BrkVector::Nmi);
    }

    #[test]
    fn test_irq_respects_i_flag_when_asked() {
        let mut cpu = setup_cpu();
        cpu.set_flag_i(true);

        assert!(!cpu.irq_if_enabled());
        assert_eq!(cpu.pc(), 0x8123);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.cycles(), 0);

        cpu.set_flag_i(false);
        assert!(cpu.irq_if_enabled());
        assert_eq!(cpu.pc(), 0xBBBA);
    }

    #[test]
    fn test_interrupt_pushes_status_before_setting_i() {
        let mut cpu = setup_cpu();
        cpu.set_flag_i(false);
        let status = cpu.status();

        cpu.irq();

        assert_eq!(cpu.pop(), status);
        assert!(cpu.flag_i());
    }
}
