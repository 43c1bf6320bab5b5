//! Opcode table checks against the documented NMOS 6502 instruction set.

use cpu2a03::opcodes::lookup;
use cpu2a03::{AddressingMode, Instruction, OPCODE_TABLE};

#[test]
fn test_table_has_256_slots() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_documented_opcode_count() {
    assert_eq!(OPCODE_TABLE.iter().flatten().count(), 151);
}

#[test]
fn test_base_cycles_in_range() {
    for entry in OPCODE_TABLE.iter().flatten() {
        assert!(
            (2..=7).contains(&entry.base_cycles),
            "{} has {} cycles",
            entry,
            entry.base_cycles
        );
    }
}

#[test]
fn test_known_entries() {
    let cases = [
        (0x00, Instruction::Brk, AddressingMode::Implied, 7),
        (0x0A, Instruction::Asl, AddressingMode::Accumulator, 2),
        (0x20, Instruction::Jsr, AddressingMode::Absolute, 6),
        (0x4C, Instruction::Jmp, AddressingMode::Absolute, 3),
        (0x6C, Instruction::Jmp, AddressingMode::Indirect, 5),
        (0x81, Instruction::Sta, AddressingMode::IndirectX, 6),
        (0x91, Instruction::Sta, AddressingMode::IndirectY, 6),
        (0x96, Instruction::Stx, AddressingMode::ZeroPageY, 4),
        (0xA9, Instruction::Lda, AddressingMode::Immediate, 2),
        (0xBE, Instruction::Ldx, AddressingMode::AbsoluteY, 4),
        (0xD0, Instruction::Bne, AddressingMode::Relative, 2),
        (0xEA, Instruction::Nop, AddressingMode::Implied, 2),
        (0xFE, Instruction::Inc, AddressingMode::AbsoluteX, 7),
    ];

    for (opcode, instruction, mode, cycles) in cases {
        let entry = lookup(opcode).unwrap();
        assert_eq!(entry.instruction, instruction, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.mode, mode, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.base_cycles, cycles, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_known_illegal_slots() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x89, 0x9E, 0xEB, 0xFF] {
        assert!(lookup(opcode).is_none(), "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_opcodes_per_instruction() {
    let count = |instruction: Instruction| {
        OPCODE_TABLE
            .iter()
            .flatten()
            .filter(|e| e.instruction == instruction)
            .count()
    };

    assert_eq!(count(Instruction::Lda), 8);
    assert_eq!(count(Instruction::Sta), 7);
    assert_eq!(count(Instruction::Asl), 5);
    assert_eq!(count(Instruction::Jmp), 2);
    assert_eq!(count(Instruction::Bit), 2);
    assert_eq!(count(Instruction::Ldx), 5);
    assert_eq!(count(Instruction::Stx), 3);
}

#[test]
fn test_branches_use_relative_mode() {
    for entry in OPCODE_TABLE.iter().flatten() {
        let is_branch = matches!(
            entry.instruction,
            Instruction::Bcc
                | Instruction::Bcs
                | Instruction::Beq
                | Instruction::Bne
                | Instruction::Bmi
                | Instruction::Bpl
                | Instruction::Bvc
                | Instruction::Bvs
        );
        assert_eq!(is_branch, entry.mode == AddressingMode::Relative, "{}", entry);
    }
}

#[test]
fn test_size_bytes_matches_operand_length() {
    for entry in OPCODE_TABLE.iter().flatten() {
        assert_eq!(entry.size_bytes(), 1 + entry.mode.operand_len());
    }
}
