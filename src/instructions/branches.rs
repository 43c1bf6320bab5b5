//! # Branch Instructions
//!
//! All branch instructions use relative addressing. The resolver has already
//! turned the signed offset into an absolute target; a taken branch moves PC
//! there and costs one extra cycle on top of the base 2.

use super::Flow;
use crate::{AddressingResult, MemoryBus, Target, CPU};

fn branch<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult, taken: bool) -> Flow {
    match step.target {
        Target::Memory(target) if taken => {
            cpu.regs.pc = target;
            cpu.cycles += 1;
            Flow::Jump
        }
        _ => Flow::Advance,
    }
}

/// Branch if Carry Clear.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = !cpu.regs.flag_c;
    branch(cpu, step, taken)
}

/// Branch if Carry Set.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = cpu.regs.flag_c;
    branch(cpu, step, taken)
}

/// Branch if Equal (Z set).
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = cpu.regs.flag_z;
    branch(cpu, step, taken)
}

/// Branch if Not Equal (Z clear).
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = !cpu.regs.flag_z;
    branch(cpu, step, taken)
}

/// Branch if Minus (N set).
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = cpu.regs.flag_n;
    branch(cpu, step, taken)
}

/// Branch if Plus (N clear).
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = !cpu.regs.flag_n;
    branch(cpu, step, taken)
}

/// Branch if Overflow Clear.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = !cpu.regs.flag_v;
    branch(cpu, step, taken)
}

/// Branch if Overflow Set.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let taken = cpu.regs.flag_v;
    branch(cpu, step, taken)
}
