//! # Opcode Table
//!
//! Static 256-entry table mapping every opcode byte to the instruction it
//! encodes, its addressing mode and its base cycle cost. The 151 documented
//! NMOS opcodes have entries; the remaining 105 are `None` and surface as
//! `ExecutionError::IllegalOpcode` when fetched.
//!
//! The table is a `const`, built at compile time and immutable thereafter.

use std::fmt;

use crate::AddressingMode;

/// The 56 documented 6502 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::And => "AND",
            Instruction::Asl => "ASL",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Brk => "BRK",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Eor => "EOR",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
            Instruction::Nop => "NOP",
            Instruction::Ora => "ORA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Rti => "RTI",
            Instruction::Rts => "RTS",
            Instruction::Sbc => "SBC",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
        }
    }

    /// Whether the instruction sets PC itself, replacing the generic advance.
    ///
    /// Conditional branches only do so when taken.
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Instruction::Bcc
                | Instruction::Bcs
                | Instruction::Beq
                | Instruction::Bmi
                | Instruction::Bne
                | Instruction::Bpl
                | Instruction::Bvc
                | Instruction::Bvs
                | Instruction::Brk
                | Instruction::Jmp
                | Instruction::Jsr
                | Instruction::Rti
                | Instruction::Rts
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Static metadata for one opcode.
///
/// # Examples
///
/// ```
/// use cpu2a03::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// let lda = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda.instruction, Instruction::Lda);
/// assert_eq!(lda.mode, AddressingMode::Immediate);
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.base_cycles, 2);
/// assert_eq!(lda.size_bytes(), 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Operation to execute.
    pub instruction: Instruction,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
    /// Assembler mnemonic, e.g. "LDA".
    pub mnemonic: &'static str,
    /// Cycles charged on every execution. Taken branches add one more.
    pub base_cycles: u8,
}

impl OpcodeEntry {
    /// Total instruction size including the opcode (1-3 bytes).
    pub const fn size_bytes(&self) -> u8 {
        self.mode.operand_len() + 1
    }
}

impl fmt::Display for OpcodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.mnemonic, self.mode)
    }
}

const fn entry(
    instruction: Instruction,
    mode: AddressingMode,
    base_cycles: u8,
) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        instruction,
        mode,
        mnemonic: instruction.mnemonic(),
        base_cycles,
    })
}

/// Looks up the entry for `opcode`, `None` for illegal opcodes.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeEntry> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [Option<OpcodeEntry>; 256] = [
    /* 0x00 */ entry(Instruction::Brk, AddressingMode::Implied, 7),
    /* 0x01 */ entry(Instruction::Ora, AddressingMode::IndirectX, 6),
    /* 0x02 */ None,
    /* 0x03 */ None,
    /* 0x04 */ None,
    /* 0x05 */ entry(Instruction::Ora, AddressingMode::ZeroPage, 3),
    /* 0x06 */ entry(Instruction::Asl, AddressingMode::ZeroPage, 5),
    /* 0x07 */ None,
    /* 0x08 */ entry(Instruction::Php, AddressingMode::Implied, 3),
    /* 0x09 */ entry(Instruction::Ora, AddressingMode::Immediate, 2),
    /* 0x0A */ entry(Instruction::Asl, AddressingMode::Accumulator, 2),
    /* 0x0B */ None,
    /* 0x0C */ None,
    /* 0x0D */ entry(Instruction::Ora, AddressingMode::Absolute, 4),
    /* 0x0E */ entry(Instruction::Asl, AddressingMode::Absolute, 6),
    /* 0x0F */ None,
    /* 0x10 */ entry(Instruction::Bpl, AddressingMode::Relative, 2),
    /* 0x11 */ entry(Instruction::Ora, AddressingMode::IndirectY, 5),
    /* 0x12 */ None,
    /* 0x13 */ None,
    /* 0x14 */ None,
    /* 0x15 */ entry(Instruction::Ora, AddressingMode::ZeroPageX, 4),
    /* 0x16 */ entry(Instruction::Asl, AddressingMode::ZeroPageX, 6),
    /* 0x17 */ None,
    /* 0x18 */ entry(Instruction::Clc, AddressingMode::Implied, 2),
    /* 0x19 */ entry(Instruction::Ora, AddressingMode::AbsoluteY, 4),
    /* 0x1A */ None,
    /* 0x1B */ None,
    /* 0x1C */ None,
    /* 0x1D */ entry(Instruction::Ora, AddressingMode::AbsoluteX, 4),
    /* 0x1E */ entry(Instruction::Asl, AddressingMode::AbsoluteX, 7),
    /* 0x1F */ None,
    /* 0x20 */ entry(Instruction::Jsr, AddressingMode::Absolute, 6),
    /* 0x21 */ entry(Instruction::And, AddressingMode::IndirectX, 6),
    /* 0x22 */ None,
    /* 0x23 */ None,
    /* 0x24 */ entry(Instruction::Bit, AddressingMode::ZeroPage, 3),
    /* 0x25 */ entry(Instruction::And, AddressingMode::ZeroPage, 3),
    /* 0x26 */ entry(Instruction::Rol, AddressingMode::ZeroPage, 5),
    /* 0x27 */ None,
    /* 0x28 */ entry(Instruction::Plp, AddressingMode::Implied, 4),
    /* 0x29 */ entry(Instruction::And, AddressingMode::Immediate, 2),
    /* 0x2A */ entry(Instruction::Rol, AddressingMode::Accumulator, 2),
    /* 0x2B */ None,
    /* 0x2C */ entry(Instruction::Bit, AddressingMode::Absolute, 4),
    /* 0x2D */ entry(Instruction::And, AddressingMode::Absolute, 4),
    /* 0x2E */ entry(Instruction::Rol, AddressingMode::Absolute, 6),
    /* 0x2F */ None,
    /* 0x30 */ entry(Instruction::Bmi, AddressingMode::Relative, 2),
    /* 0x31 */ entry(Instruction::And, AddressingMode::IndirectY, 5),
    /* 0x32 */ None,
    /* 0x33 */ None,
    /* 0x34 */ None,
    /* 0x35 */ entry(Instruction::And, AddressingMode::ZeroPageX, 4),
    /* 0x36 */ entry(Instruction::Rol, AddressingMode::ZeroPageX, 6),
    /* 0x37 */ None,
    /* 0x38 */ entry(Instruction::Sec, AddressingMode::Implied, 2),
    /* 0x39 */ entry(Instruction::And, AddressingMode::AbsoluteY, 4),
    /* 0x3A */ None,
    /* 0x3B */ None,
    /* 0x3C */ None,
    /* 0x3D */ entry(Instruction::And, AddressingMode::AbsoluteX, 4),
    /* 0x3E */ entry(Instruction::Rol, AddressingMode::AbsoluteX, 7),
    /* 0x3F */ None,
    /* 0x40 */ entry(Instruction::Rti, AddressingMode::Implied, 6),
    /* 0x41 */ entry(Instruction::Eor, AddressingMode::IndirectX, 6),
    /* 0x42 */ None,
    /* 0x43 */ None,
    /* 0x44 */ None,
    /* 0x45 */ entry(Instruction::Eor, AddressingMode::ZeroPage, 3),
    /* 0x46 */ entry(Instruction::Lsr, AddressingMode::ZeroPage, 5),
    /* 0x47 */ None,
    /* 0x48 */ entry(Instruction::Pha, AddressingMode::Implied, 3),
    /* 0x49 */ entry(Instruction::Eor, AddressingMode::Immediate, 2),
    /* 0x4A */ entry(Instruction::Lsr, AddressingMode::Accumulator, 2),
    /* 0x4B */ None,
    /* 0x4C */ entry(Instruction::Jmp, AddressingMode::Absolute, 3),
    /* 0x4D */ entry(Instruction::Eor, AddressingMode::Absolute, 4),
    /* 0x4E */ entry(Instruction::Lsr, AddressingMode::Absolute, 6),
    /* 0x4F */ None,
    /* 0x50 */ entry(Instruction::Bvc, AddressingMode::Relative, 2),
    /* 0x51 */ entry(Instruction::Eor, AddressingMode::IndirectY, 5),
    /* 0x52 */ None,
    /* 0x53 */ None,
    /* 0x54 */ None,
    /* 0x55 */ entry(Instruction::Eor, AddressingMode::ZeroPageX, 4),
    /* 0x56 */ entry(Instruction::Lsr, AddressingMode::ZeroPageX, 6),
    /* 0x57 */ None,
    /* 0x58 */ entry(Instruction::Cli, AddressingMode::Implied, 2),
    /* 0x59 */ entry(Instruction::Eor, AddressingMode::AbsoluteY, 4),
    /* 0x5A */ None,
    /* 0x5B */ None,
    /* 0x5C */ None,
    /* 0x5D */ entry(Instruction::Eor, AddressingMode::AbsoluteX, 4),
    /* 0x5E */ entry(Instruction::Lsr, AddressingMode::AbsoluteX, 7),
    /* 0x5F */ None,
    /* 0x60 */ entry(Instruction::Rts, AddressingMode::Implied, 6),
    /* 0x61 */ entry(Instruction::Adc, AddressingMode::IndirectX, 6),
    /* 0x62 */ None,
    /* 0x63 */ None,
    /* 0x64 */ None,
    /* 0x65 */ entry(Instruction::Adc, AddressingMode::ZeroPage, 3),
    /* 0x66 */ entry(Instruction::Ror, AddressingMode::ZeroPage, 5),
    /* 0x67 */ None,
    /* 0x68 */ entry(Instruction::Pla, AddressingMode::Implied, 4),
    /* 0x69 */ entry(Instruction::Adc, AddressingMode::Immediate, 2),
    /* 0x6A */ entry(Instruction::Ror, AddressingMode::Accumulator, 2),
    /* 0x6B */ None,
    /* 0x6C */ entry(Instruction::Jmp, AddressingMode::Indirect, 5),
    /* 0x6D */ entry(Instruction::Adc, AddressingMode::Absolute, 4),
    /* 0x6E */ entry(Instruction::Ror, AddressingMode::Absolute, 6),
    /* 0x6F */ None,
    /* 0x70 */ entry(Instruction::Bvs, AddressingMode::Relative, 2),
    /* 0x71 */ entry(Instruction::Adc, AddressingMode::IndirectY, 5),
    /* 0x72 */ None,
    /* 0x73 */ None,
    /* 0x74 */ None,
    /* 0x75 */ entry(Instruction::Adc, AddressingMode::ZeroPageX, 4),
    /* 0x76 */ entry(Instruction::Ror, AddressingMode::ZeroPageX, 6),
    /* 0x77 */ None,
    /* 0x78 */ entry(Instruction::Sei, AddressingMode::Implied, 2),
    /* 0x79 */ entry(Instruction::Adc, AddressingMode::AbsoluteY, 4),
    /* 0x7A */ None,
    /* 0x7B */ None,
    /* 0x7C */ None,
    /* 0x7D */ entry(Instruction::Adc, AddressingMode::AbsoluteX, 4),
    /* 0x7E */ entry(Instruction::Ror, AddressingMode::AbsoluteX, 7),
    /* 0x7F */ None,
    /* 0x80 */ None,
    /* 0x81 */ entry(Instruction::Sta, AddressingMode::IndirectX, 6),
    /* 0x82 */ None,
    /* 0x83 */ None,
    /* 0x84 */ entry(Instruction::Sty, AddressingMode::ZeroPage, 3),
    /* 0x85 */ entry(Instruction::Sta, AddressingMode::ZeroPage, 3),
    /* 0x86 */ entry(Instruction::Stx, AddressingMode::ZeroPage, 3),
    /* 0x87 */ None,
    /* 0x88 */ entry(Instruction::Dey, AddressingMode::Implied, 2),
    /* 0x89 */ None,
    /* 0x8A */ entry(Instruction::Txa, AddressingMode::Implied, 2),
    /* 0x8B */ None,
    /* 0x8C */ entry(Instruction::Sty, AddressingMode::Absolute, 4),
    /* 0x8D */ entry(Instruction::Sta, AddressingMode::Absolute, 4),
    /* 0x8E */ entry(Instruction::Stx, AddressingMode::Absolute, 4),
    /* 0x8F */ None,
    /* 0x90 */ entry(Instruction::Bcc, AddressingMode::Relative, 2),
    /* 0x91 */ entry(Instruction::Sta, AddressingMode::IndirectY, 6),
    /* 0x92 */ None,
    /* 0x93 */ None,
    /* 0x94 */ entry(Instruction::Sty, AddressingMode::ZeroPageX, 4),
    /* 0x95 */ entry(Instruction::Sta, AddressingMode::ZeroPageX, 4),
    /* 0x96 */ entry(Instruction::Stx, AddressingMode::ZeroPageY, 4),
    /* 0x97 */ None,
    /* 0x98 */ entry(Instruction::Tya, AddressingMode::Implied, 2),
    /* 0x99 */ entry(Instruction::Sta, AddressingMode::AbsoluteY, 5),
    /* 0x9A */ entry(Instruction::Txs, AddressingMode::Implied, 2),
    /* 0x9B */ None,
    /* 0x9C */ None,
    /* 0x9D */ entry(Instruction::Sta, AddressingMode::AbsoluteX, 5),
    /* 0x9E */ None,
    /* 0x9F */ None,
    /* 0xA0 */ entry(Instruction::Ldy, AddressingMode::Immediate, 2),
    /* 0xA1 */ entry(Instruction::Lda, AddressingMode::IndirectX, 6),
    /* 0xA2 */ entry(Instruction::Ldx, AddressingMode::Immediate, 2),
    /* 0xA3 */ None,
    /* 0xA4 */ entry(Instruction::Ldy, AddressingMode::ZeroPage, 3),
    /* 0xA5 */ entry(Instruction::Lda, AddressingMode::ZeroPage, 3),
    /* 0xA6 */ entry(Instruction::Ldx, AddressingMode::ZeroPage, 3),
    /* 0xA7 */ None,
    /* 0xA8 */ entry(Instruction::Tay, AddressingMode::Implied, 2),
    /* 0xA9 */ entry(Instruction::Lda, AddressingMode::Immediate, 2),
    /* 0xAA */ entry(Instruction::Tax, AddressingMode::Implied, 2),
    /* 0xAB */ None,
    /* 0xAC */ entry(Instruction::Ldy, AddressingMode::Absolute, 4),
    /* 0xAD */ entry(Instruction::Lda, AddressingMode::Absolute, 4),
    /* 0xAE */ entry(Instruction::Ldx, AddressingMode::Absolute, 4),
    /* 0xAF */ None,
    /* 0xB0 */ entry(Instruction::Bcs, AddressingMode::Relative, 2),
    /* 0xB1 */ entry(Instruction::Lda, AddressingMode::IndirectY, 5),
    /* 0xB2 */ None,
    /* 0xB3 */ None,
    /* 0xB4 */ entry(Instruction::Ldy, AddressingMode::ZeroPageX, 4),
    /* 0xB5 */ entry(Instruction::Lda, AddressingMode::ZeroPageX, 4),
    /* 0xB6 */ entry(Instruction::Ldx, AddressingMode::ZeroPageY, 4),
    /* 0xB7 */ None,
    /* 0xB8 */ entry(Instruction::Clv, AddressingMode::Implied, 2),
    /* 0xB9 */ entry(Instruction::Lda, AddressingMode::AbsoluteY, 4),
    /* 0xBA */ entry(Instruction::Tsx, AddressingMode::Implied, 2),
    /* 0xBB */ None,
    /* 0xBC */ entry(Instruction::Ldy, AddressingMode::AbsoluteX, 4),
    /* 0xBD */ entry(Instruction::Lda, AddressingMode::AbsoluteX, 4),
    /* 0xBE */ entry(Instruction::Ldx, AddressingMode::AbsoluteY, 4),
    /* 0xBF */ None,
    /* 0xC0 */ entry(Instruction::Cpy, AddressingMode::Immediate, 2),
    /* 0xC1 */ entry(Instruction::Cmp, AddressingMode::IndirectX, 6),
    /* 0xC2 */ None,
    /* 0xC3 */ None,
    /* 0xC4 */ entry(Instruction::Cpy, AddressingMode::ZeroPage, 3),
    /* 0xC5 */ entry(Instruction::Cmp, AddressingMode::ZeroPage, 3),
    /* 0xC6 */ entry(Instruction::Dec, AddressingMode::ZeroPage, 5),
    /* 0xC7 */ None,
    /* 0xC8 */ entry(Instruction::Iny, AddressingMode::Implied, 2),
    /* 0xC9 */ entry(Instruction::Cmp, AddressingMode::Immediate, 2),
    /* 0xCA */ entry(Instruction::Dex, AddressingMode::Implied, 2),
    /* 0xCB */ None,
    /* 0xCC */ entry(Instruction::Cpy, AddressingMode::Absolute, 4),
    /* 0xCD */ entry(Instruction::Cmp, AddressingMode::Absolute, 4),
    /* 0xCE */ entry(Instruction::Dec, AddressingMode::Absolute, 6),
    /* 0xCF */ None,
    /* 0xD0 */ entry(Instruction::Bne, AddressingMode::Relative, 2),
    /* 0xD1 */ entry(Instruction::Cmp, AddressingMode::IndirectY, 5),
    /* 0xD2 */ None,
    /* 0xD3 */ None,
    /* 0xD4 */ None,
    /* 0xD5 */ entry(Instruction::Cmp, AddressingMode::ZeroPageX, 4),
    /* 0xD6 */ entry(Instruction::Dec, AddressingMode::ZeroPageX, 6),
    /* 0xD7 */ None,
    /* 0xD8 */ entry(Instruction::Cld, AddressingMode::Implied, 2),
    /* 0xD9 */ entry(Instruction::Cmp, AddressingMode::AbsoluteY, 4),
    /* 0xDA */ None,
    /* 0xDB */ None,
    /* 0xDC */ None,
    /* 0xDD */ entry(Instruction::Cmp, AddressingMode::AbsoluteX, 4),
    /* 0xDE */ entry(Instruction::Dec, AddressingMode::AbsoluteX, 7),
    /* 0xDF */ None,
    /* 0xE0 */ entry(Instruction::Cpx, AddressingMode::Immediate, 2),
    /* 0xE1 */ entry(Instruction::Sbc, AddressingMode::IndirectX, 6),
    /* 0xE2 */ None,
    /* 0xE3 */ None,
    /* 0xE4 */ entry(Instruction::Cpx, AddressingMode::ZeroPage, 3),
    /* 0xE5 */ entry(Instruction::Sbc, AddressingMode::ZeroPage, 3),
    /* 0xE6 */ entry(Instruction::Inc, AddressingMode::ZeroPage, 5),
    /* 0xE7 */ None,
    /* 0xE8 */ entry(Instruction::Inx, AddressingMode::Implied, 2),
    /* 0xE9 */ entry(Instruction::Sbc, AddressingMode::Immediate, 2),
    /* 0xEA */ entry(Instruction::Nop, AddressingMode::Implied, 2),
    /* 0xEB */ None,
    /* 0xEC */ entry(Instruction::Cpx, AddressingMode::Absolute, 4),
    /* 0xED */ entry(Instruction::Sbc, AddressingMode::Absolute, 4),
    /* 0xEE */ entry(Instruction::Inc, AddressingMode::Absolute, 6),
    /* 0xEF */ None,
    /* 0xF0 */ entry(Instruction::Beq, AddressingMode::Relative, 2),
    /* 0xF1 */ entry(Instruction::Sbc, AddressingMode::IndirectY, 5),
    /* 0xF2 */ None,
    /* 0xF3 */ None,
    /* 0xF4 */ None,
    /* 0xF5 */ entry(Instruction::Sbc, AddressingMode::ZeroPageX, 4),
    /* 0xF6 */ entry(Instruction::Inc, AddressingMode::ZeroPageX, 6),
    /* 0xF7 */ None,
    /* 0xF8 */ entry(Instruction::Sed, AddressingMode::Implied, 2),
    /* 0xF9 */ entry(Instruction::Sbc, AddressingMode::AbsoluteY, 4),
    /* 0xFA */ None,
    /* 0xFB */ None,
    /* 0xFC */ None,
    /* 0xFD */ entry(Instruction::Sbc, AddressingMode::AbsoluteX, 4),
    /* 0xFE */ entry(Instruction::Inc, AddressingMode::AbsoluteX, 7),
    /* 0xFF */ None,
];
