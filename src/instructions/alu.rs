//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add/subtract with carry (no decimal mode on the 2A03)
//! - AND, ORA, EOR: bitwise logic into the accumulator
//! - CMP, CPX, CPY: register comparison
//! - BIT: bit test

use super::Flow;
use crate::{AddressingResult, MemoryBus, CPU};

/// Shared adder for ADC and SBC.
///
/// Carry is set when the unsigned sum exceeds 255. Overflow is set when both
/// inputs share a sign bit that the result does not:
/// `V = (A ^ result) & (M ^ result) & 0x80`.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let sum = a as u16 + value as u16 + cpu.regs.flag_c as u16;
    let result = sum as u8;

    cpu.regs.flag_c = sum > 0xFF;
    cpu.regs.flag_v = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.regs.set_zero_negative(result);
    cpu.regs.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// `A + M + C -> A`. Updates N, Z, C and V.
///
/// # Examples
///
/// ```
/// use cpu2a03::{FlatMemory, MemoryBus, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.set_pc(0x8000);
/// cpu.load(0x8000, &[0x69, 0x46]); // ADC #$46
/// cpu.set_a(0x58);
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x9F);
/// assert!(!cpu.flag_c());
/// assert!(cpu.flag_v());
/// assert!(cpu.flag_n());
/// ```
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    add_with_carry(cpu, step.operand);
    Flow::Advance
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// `A - M - (1 - C) -> A`, computed as `A + !M + C`. Carry acts as the
/// inverse of borrow: it is set when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    add_with_carry(cpu, !step.operand);
    Flow::Advance
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.regs.a &= step.operand;
    cpu.regs.set_zero_negative(cpu.regs.a);
    Flow::Advance
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.regs.a |= step.operand;
    cpu.regs.set_zero_negative(cpu.regs.a);
    Flow::Advance
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    cpu.regs.a ^= step.operand;
    cpu.regs.set_zero_negative(cpu.regs.a);
    Flow::Advance
}

/// Register minus operand as a signed integer.
///
/// C is set when the difference is non-negative (register >= operand).
/// N and Z come from the low byte of the difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: u8) {
    let diff = register as i16 - operand as i16;
    cpu.regs.flag_c = diff >= 0;
    cpu.regs.set_zero_negative(diff as u8);
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    compare(cpu, cpu.regs.a, step.operand);
    Flow::Advance
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    compare(cpu, cpu.regs.x, step.operand);
    Flow::Advance
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    compare(cpu, cpu.regs.y, step.operand);
    Flow::Advance
}

/// Executes the BIT (Bit Test) instruction.
///
/// Bits 7 and 6 of the operand are copied into N and V. Z is set when
/// `A & M` is zero. The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, step: &AddressingResult) -> Flow {
    let value = step.operand;
    cpu.regs.flag_n = value & 0x80 != 0;
    cpu.regs.flag_v = value & 0x40 != 0;
    cpu.regs.flag_z = cpu.regs.a & value == 0;
    Flow::Advance
}
