//! Tests for the conditional branch instructions.
//!
//! Tests cover:
//! - Branch taken and not taken for every condition
//! - Forward and backward offsets
//! - Wraparound at the top of the address space
//! - Cycle counts (2 base, +1 when taken)

use cpu2a03::{FlatMemory, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x8000);
    cpu
}

/// Runs one branch instruction with `offset` and returns the CPU.
fn run_branch(opcode: u8, offset: u8, configure: impl FnOnce(&mut CPU<FlatMemory>)) -> CPU {
    let mut cpu = setup_cpu();
    cpu.load(0x8000, &[opcode, offset]);
    configure(&mut cpu);
    cpu.step().unwrap();
    cpu
}

// ========== Taken / Not Taken ==========

#[test]
fn test_bcc_taken_when_carry_clear() {
    let cpu = run_branch(0x90, 0x05, |cpu| cpu.set_flag_c(false));

    assert_eq!(cpu.pc(), 0x8007);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bcc_not_taken_when_carry_set() {
    let cpu = run_branch(0x90, 0x05, |cpu| cpu.set_flag_c(true));

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_bcs() {
    assert_eq!(run_branch(0xB0, 0x10, |cpu| cpu.set_flag_c(true)).pc(), 0x8012);
    assert_eq!(run_branch(0xB0, 0x10, |cpu| cpu.set_flag_c(false)).pc(), 0x8002);
}

#[test]
fn test_beq_and_bne() {
    assert_eq!(run_branch(0xF0, 0x04, |cpu| cpu.set_flag_z(true)).pc(), 0x8006);
    assert_eq!(run_branch(0xF0, 0x04, |cpu| cpu.set_flag_z(false)).pc(), 0x8002);
    assert_eq!(run_branch(0xD0, 0x04, |cpu| cpu.set_flag_z(false)).pc(), 0x8006);
    assert_eq!(run_branch(0xD0, 0x04, |cpu| cpu.set_flag_z(true)).pc(), 0x8002);
}

#[test]
fn test_bmi_and_bpl() {
    assert_eq!(run_branch(0x30, 0x04, |cpu| cpu.set_flag_n(true)).pc(), 0x8006);
    assert_eq!(run_branch(0x30, 0x04, |cpu| cpu.set_flag_n(false)).pc(), 0x8002);
    assert_eq!(run_branch(0x10, 0x04, |cpu| cpu.set_flag_n(false)).pc(), 0x8006);
    assert_eq!(run_branch(0x10, 0x04, |cpu| cpu.set_flag_n(true)).pc(), 0x8002);
}

#[test]
fn test_bvc_and_bvs() {
    assert_eq!(run_branch(0x50, 0x04, |cpu| cpu.set_flag_v(false)).pc(), 0x8006);
    assert_eq!(run_branch(0x50, 0x04, |cpu| cpu.set_flag_v(true)).pc(), 0x8002);
    assert_eq!(run_branch(0x70, 0x04, |cpu| cpu.set_flag_v(true)).pc(), 0x8006);
    assert_eq!(run_branch(0x70, 0x04, |cpu| cpu.set_flag_v(false)).pc(), 0x8002);
}

// ========== Offset Tests ==========

#[test]
fn test_branch_backward() {
    // BNE -4: 0x8002 - 4 = 0x7FFE
    let cpu = run_branch(0xD0, 0xFC, |cpu| cpu.set_flag_z(false));

    assert_eq!(cpu.pc(), 0x7FFE);
}

#[test]
fn test_branch_most_negative_offset() {
    let cpu = run_branch(0xD0, 0x80, |cpu| cpu.set_flag_z(false));

    assert_eq!(cpu.pc(), 0x8002 - 128);
}

#[test]
fn test_branch_to_self() {
    // BEQ -2 loops on itself
    let cpu = run_branch(0xF0, 0xFE, |cpu| cpu.set_flag_z(true));

    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_branch_wraps_past_top_of_memory() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0xFFF0);
    cpu.load(0xFFF0, &[0x90, 0x7F]);

    cpu.step().unwrap();

    // 0xFFF2 + 0x7F wraps to 0x0071
    assert_eq!(cpu.pc(), 0x0071);
}

#[test]
fn test_branch_leaves_flags_alone() {
    let cpu = run_branch(0x90, 0x05, |cpu| cpu.set_status(0b0110_0010));

    assert_eq!(cpu.status(), 0b0110_0010);
}
