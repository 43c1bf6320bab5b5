//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! The result always goes back to where the operand came from: the
//! accumulator in accumulator mode, otherwise the resolved memory address.

use super::Flow;
use crate::{AddressingResult, MemoryBus, CPU};

fn commit<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult, result: u8) -> Flow {
    cpu.write_back(step.target, result);
    cpu.regs.set_zero_negative(result);
    Flow::Advance
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.set_pc(0x8000);
/// cpu.load(0x8000, &[0x06, 0x10]); // ASL $10
/// cpu.write(0x0010, 0x81);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.read(0x0010), 0x02);
/// assert!(cpu.flag_c());
/// ```
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let value = step.operand;
    cpu.regs.flag_c = value & 0x80 != 0;
    commit(cpu, step, value << 1)
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let value = step.operand;
    cpu.regs.flag_c = value & 0x01 != 0;
    commit(cpu, step, value >> 1)
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old carry enters bit 0, bit 7 leaves into carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let value = step.operand;
    let carry_in = cpu.regs.flag_c as u8;
    cpu.regs.flag_c = value & 0x80 != 0;
    commit(cpu, step, (value << 1) | carry_in)
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old carry enters bit 7, bit 0 leaves into carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let value = step.operand;
    let carry_in = cpu.regs.flag_c as u8;
    cpu.regs.flag_c = value & 0x01 != 0;
    commit(cpu, step, (value >> 1) | (carry_in << 7))
}
