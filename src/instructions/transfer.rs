//! # Register Transfer Instructions
//!
//! All six copy one register into another and update N and Z from the
//! copied value. That includes TXS, which leaves the flags alone on real
//! hardware; here it updates them like the other transfers.

use super::Flow;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.set_zero_negative(cpu.regs.x);
    Flow::Advance
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.set_zero_negative(cpu.regs.y);
    Flow::Advance
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.set_zero_negative(cpu.regs.a);
    Flow::Advance
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.set_zero_negative(cpu.regs.a);
    Flow::Advance
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.set_zero_negative(cpu.regs.x);
    Flow::Advance
}

pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.sp = cpu.regs.x;
    cpu.regs.set_zero_negative(cpu.regs.sp);
    Flow::Advance
}
