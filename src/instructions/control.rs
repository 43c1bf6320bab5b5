//! # Control Flow Instructions
//!
//! This module implements:
//! - JMP: Jump (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - BRK: Force Interrupt
//!
//! Every instruction here sets PC itself and returns `Flow::Jump`.

use super::Flow;
use crate::{AddressingResult, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// PC becomes the resolved address: the operand word itself for absolute
/// mode, the word it points to for indirect mode.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    match step.address() {
        Some(target) => {
            cpu.regs.pc = target;
            Flow::Jump
        }
        None => Flow::Advance,
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of JSR's last byte (PC + 2), then jumps. RTS adds one
/// to the popped value, landing on the instruction after the JSR.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.set_pc(0x8000);
/// cpu.load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
/// cpu.write(0x9000, 0x60); // RTS
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.sp(), 0xFB);
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.pc(), 0x8003);
/// assert_eq!(cpu.sp(), 0xFD);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let Some(target) = step.address() else {
        return Flow::Advance;
    };

    let return_address = cpu.regs.pc.wrapping_add(2);
    cpu.push_word(return_address);
    cpu.regs.pc = target;
    Flow::Jump
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.pc = cpu.pop_word().wrapping_add(1);
    Flow::Jump
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops status (all eight bits), then PC. Unlike RTS, no adjustment is made
/// to the popped PC.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    let status = cpu.pop();
    cpu.regs.set_status(status);
    cpu.regs.pc = cpu.pop_word();
    Flow::Jump
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Runs the interrupt entry sequence with PC + 2 as the return address,
/// through the vector selected by `CpuConfig::brk_vector`. The 7 cycles come
/// from the opcode table entry.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.regs.pc = cpu.regs.pc.wrapping_add(2);
    let vector = cpu.config.brk_vector.address();
    cpu.enter_interrupt(vector);
    Flow::Jump
}
