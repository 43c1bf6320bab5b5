//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and cost a flat 2 cycles,
//! charged from the opcode table.

use super::Flow;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_c = false;
    Flow::Advance
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_c = true;
    Flow::Advance
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_i = false;
    Flow::Advance
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_i = true;
    Flow::Advance
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_v = false;
    Flow::Advance
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_d = false;
    Flow::Advance
}

/// Sets D. Arithmetic stays binary; the flag is only stored.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.flag_d = true;
    Flow::Advance
}
