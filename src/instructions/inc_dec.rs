//! # Increment and Decrement Instructions
//!
//! All six wrap at 8 bits (0xFF + 1 = 0x00, 0x00 - 1 = 0xFF) and set N and Z
//! from the new value. INC and DEC write back to memory.

use super::Flow;
use crate::{AddressingResult, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let result = step.operand.wrapping_add(1);
    cpu.write_back(step.target, result);
    cpu.regs.set_zero_negative(result);
    Flow::Advance
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let result = step.operand.wrapping_sub(1);
    cpu.write_back(step.target, result);
    cpu.regs.set_zero_negative(result);
    Flow::Advance
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.set_zero_negative(cpu.regs.x);
    Flow::Advance
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.set_zero_negative(cpu.regs.y);
    Flow::Advance
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.set_zero_negative(cpu.regs.x);
    Flow::Advance
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.set_zero_negative(cpu.regs.y);
    Flow::Advance
}
