//! # Load and Store Instructions
//!
//! Loads copy the resolved operand into a register and update N and Z.
//! Stores write a register to the resolved address and touch no flags.

use super::Flow;
use crate::{AddressingResult, MemoryBus, CPU};

pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.regs.a = step.operand;
    cpu.regs.set_zero_negative(step.operand);
    Flow::Advance
}

pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.regs.x = step.operand;
    cpu.regs.set_zero_negative(step.operand);
    Flow::Advance
}

pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.regs.y = step.operand;
    cpu.regs.set_zero_negative(step.operand);
    Flow::Advance
}

/// Executes the STA (Store Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.set_pc(0x8000);
/// cpu.load(0x8000, &[0x8D, 0x00, 0x02]); // STA $0200
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.read(0x0200), 0x42);
/// assert_eq!(cpu.pc(), 0x8003);
/// ```
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.write_back(step.target, cpu.regs.a);
    Flow::Advance
}

pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.write_back(step.target, cpu.regs.x);
    Flow::Advance
}

pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.write_back(step.target, cpu.regs.y);
    Flow::Advance
}
