//! # Stack Instructions
//!
//! PHA, PHP, PLA and PLP, built on the CPU's `push`/`pop`.

use super::Flow;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.set_pc(0x8000);
/// cpu.write(0x8000, 0x48); // PHA
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.read(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.push(cpu.regs.a);
    Flow::Advance
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the packed status byte as-is.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.push(cpu.regs.status());
    Flow::Advance
}

/// Executes the PLA (Pull Accumulator) instruction. Updates N and Z.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.a = cpu.pop();
    cpu.regs.set_zero_negative(cpu.regs.a);
    Flow::Advance
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    let status = cpu.pop();
    cpu.regs.set_status(status);
    Flow::Advance
}
